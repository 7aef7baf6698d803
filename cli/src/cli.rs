use crate::command::{chunk::ChunkCommand, extract_frame::ExtractFrameCommand, info::InfoCommand};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::io;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    name = "apng",
    version,
    about = "Inspect animated PNG files chunk by chunk",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
}

impl Cli {
    /// Installs the process wide logger according to `--log-level` and `--quiet`.
    pub fn init_logger(&self) -> anyhow::Result<()> {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}: {}",
                    record.level().as_str().to_ascii_lowercase(),
                    message
                ))
            })
            .level(self.global.level_filter())
            .chain(io::stderr())
            .apply()?;
        Ok(())
    }
}

#[derive(Args, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct GlobalArgs {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Verbosity of diagnostics written to stderr"
    )]
    pub(crate) log_level: LogLevel,
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all diagnostics (same as --log-level off)"
    )]
    pub(crate) quiet: bool,
}

impl GlobalArgs {
    #[inline]
    pub(crate) const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else {
            self.log_level.as_level_filter()
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "Chunk level operations")]
    Chunk(ChunkCommand),
    #[command(about = "Show the image header and animation frames")]
    Info(InfoCommand),
    #[command(about = "Write a single animation frame as a standalone PNG")]
    ExtractFrame(ExtractFrameCommand),
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}
