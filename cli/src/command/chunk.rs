use crate::command::{
    Command,
    core::{blend_name, dispose_name, open_png, read_chunks},
};
use clap::{Parser, ValueHint};
use libapng::{ChunkBody, PNG_SIGNATURE, ReadOptions, TypedChunk, prelude::*};
use std::path::PathBuf;
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub struct ChunkCommand {
    #[command(subcommand)]
    command: ChunkCommands,
}

impl Command for ChunkCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            ChunkCommands::List(cmd) => cmd.execute(),
        }
    }
}

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ChunkCommands {
    #[command(about = "List chunks")]
    List(ListCommand),
}

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(short, long, help = "Display decoded chunk fields")]
    pub(crate) long: bool,
    #[arg(short = 'H', long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg(long, help = "Verify the checksum of every chunk")]
    pub(crate) verify_crc: bool,
    #[arg(value_hint = ValueHint::FilePath)]
    pub(crate) file: PathBuf,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        list_chunks(self)
    }
}

fn list_chunks(args: ListCommand) -> anyhow::Result<()> {
    let options = ReadOptions::builder().verify_crc(args.verify_crc).build();
    let mut reader = open_png(&args.file, options)?;
    // payloads are only needed to decode fdAT sequence numbers or to check them
    let skip_data = !(args.long || args.verify_crc);
    let chunks = read_chunks(&mut reader, skip_data)?;

    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset"]
                .into_iter()
                .chain(args.long.then_some("Body")),
        )
    }
    let mut offset = PNG_SIGNATURE.len();
    for (idx, chunk) in chunks.iter().enumerate() {
        builder.push_record(
            [
                (idx + 1).to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{offset:#06x}"),
            ]
            .into_iter()
            .chain(args.long.then(|| describe(chunk))),
        );
        offset += chunk.bytes_len();
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    println!("{table}");
    Ok(())
}

fn describe(chunk: &TypedChunk) -> String {
    match chunk.body() {
        Some(ChunkBody::Header(h)) => format!(
            "width={} height={} bit_depth={} color_type={} compression={} filter={} interlace={}",
            h.width,
            h.height,
            h.bit_depth,
            h.color_type,
            h.compression_method,
            h.filter_method,
            h.interlace_method
        ),
        Some(ChunkBody::AnimationControl(ac)) => {
            format!("num_frames={} num_plays={}", ac.num_frames, ac.num_plays)
        }
        Some(ChunkBody::FrameControl(fc)) => format!(
            "sequence={} width={} height={} x={} y={} delay={}/{} dispose={} blend={}",
            fc.sequence_number,
            fc.width,
            fc.height,
            fc.x_offset,
            fc.y_offset,
            fc.delay_num,
            fc.delay_den,
            dispose_name(fc),
            blend_name(fc)
        ),
        Some(ChunkBody::FrameData(fd)) => format!("sequence={}", fd.sequence_number),
        Some(ChunkBody::ImageData | ChunkBody::End | ChunkBody::Generic) | None => String::new(),
    }
}
