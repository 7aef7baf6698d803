pub mod chunk;
mod core;
pub mod extract_frame;
pub mod info;

use crate::cli::{Cli, Commands};

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

impl Command for Cli {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.commands {
            Commands::Chunk(cmd) => cmd.execute(),
            Commands::Info(cmd) => cmd.execute(),
            Commands::ExtractFrame(cmd) => cmd.execute(),
        }
    }
}
