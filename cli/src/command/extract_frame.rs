use crate::command::{
    Command,
    core::{Animation, Frame, open_png, read_chunks},
};
use anyhow::{Context, bail};
use clap::{Parser, ValueHint};
use libapng::{ChunkType, ChunkWriter, ImageHeader, ReadOptions, TypedChunk};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ExtractFrameCommand {
    #[arg(long, help = "Zero based index of the frame to extract")]
    pub(crate) frame: usize,
    #[arg(short, long, value_hint = ValueHint::FilePath, help = "Output PNG file")]
    pub(crate) output: PathBuf,
    #[arg(long, help = "Overwrite the output file if it exists")]
    pub(crate) overwrite: bool,
    #[arg(value_hint = ValueHint::FilePath)]
    pub(crate) file: PathBuf,
}

impl Command for ExtractFrameCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        extract_frame(self)
    }
}

fn extract_frame(args: ExtractFrameCommand) -> anyhow::Result<()> {
    let mut reader = open_png(&args.file, ReadOptions::default())?;
    let chunks = read_chunks(&mut reader, false)?;
    let animation = Animation::from_chunks(&chunks)?;
    if !animation.is_animated() {
        bail!("{} is not an animated PNG", args.file.display());
    }
    let Some(frame) = animation.frames.get(args.frame) else {
        bail!(
            "frame {} out of range, {} has {} frames",
            args.frame,
            args.file.display(),
            animation.frames.len()
        );
    };
    if frame.payloads.is_empty() {
        bail!("frame {} has no image data", args.frame);
    }
    if !args.overwrite && fs::exists(&args.output)? {
        bail!(
            "{} already exists, use --overwrite to replace it",
            args.output.display()
        );
    }
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut file = write_frame(BufWriter::new(file), &animation.header, &animation.leading, frame)?;
    file.flush()?;
    log::info!(
        "wrote frame {} ({}x{}) to {}",
        args.frame,
        frame.control.width,
        frame.control.height,
        args.output.display()
    );
    Ok(())
}

/// Writes `frame` as a standalone still image and returns the sink.
fn write_frame<W: Write>(
    w: W,
    header: &ImageHeader,
    leading: &[TypedChunk],
    frame: &Frame,
) -> anyhow::Result<W> {
    let mut writer = ChunkWriter::from(w);
    writer.write_signature()?;
    let header = ImageHeader {
        width: frame.control.width,
        height: frame.control.height,
        ..*header
    };
    writer.write_chunk(TypedChunk::from(header))?;
    for chunk in leading {
        writer.write_chunk(chunk)?;
    }
    for payload in &frame.payloads {
        writer.write_data(ChunkType::IDAT, payload)?;
    }
    writer.write_data(ChunkType::IEND, &[])?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libapng::{Chunk, ChunkKind, ChunkReader, FrameControl, RawChunk, read_signature};

    #[test]
    fn frame_becomes_still_image() {
        let header = ImageHeader {
            width: 100,
            height: 50,
            bit_depth: 8,
            color_type: 6,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        };
        let gamma = TypedChunk::from_raw(RawChunk::from_data(
            ChunkType::try_from("gAMA").unwrap(),
            [0, 0, 0xB1, 0x8F],
        ))
        .unwrap();
        let frame = Frame {
            control: FrameControl {
                sequence_number: 3,
                width: 10,
                height: 5,
                x_offset: 0,
                y_offset: 0,
                delay_num: 1,
                delay_den: 10,
                dispose_op: 0,
                blend_op: 0,
            },
            payloads: vec![vec![1, 2, 3], vec![4, 5]],
            default_image: false,
        };

        let bytes = write_frame(Vec::new(), &header, &[gamma.clone()], &frame).unwrap();
        let mut source = bytes.as_slice();
        read_signature(&mut source).unwrap();
        let chunks = ChunkReader::with_options(source, ReadOptions::builder().verify_crc(true).build())
            .chunks(false)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        let kinds = chunks.iter().map(TypedChunk::kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                ChunkKind::Header,
                ChunkKind::Generic,
                ChunkKind::ImageData,
                ChunkKind::ImageData,
                ChunkKind::End
            ]
        );
        let written = chunks[0].header().unwrap();
        assert_eq!((written.width, written.height), (10, 5));
        assert_eq!(written.color_type, 6);
        assert_eq!(chunks[1], gamma);
        assert_eq!(chunks[2].data(), [1, 2, 3]);
        assert_eq!(chunks[3].data(), [4, 5]);
    }
}
