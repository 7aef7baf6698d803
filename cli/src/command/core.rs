use anyhow::{Context, bail};
use libapng::{
    AnimationControl, BlendOp, ChunkKind, ChunkReader, DisposeOp, FrameControl, ImageHeader,
    ReadOptions, TypedChunk, read_signature,
};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Opens `path`, checks the PNG signature and returns a reader positioned at the first chunk.
pub(crate) fn open_png(
    path: &Path,
    options: ReadOptions,
) -> anyhow::Result<ChunkReader<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    read_signature(&mut reader).with_context(|| format!("{} is not a PNG file", path.display()))?;
    Ok(ChunkReader::with_options(reader, options))
}

/// Reads chunks until the end of input.
///
/// Checksum mismatches are logged and the affected chunk is kept.
pub(crate) fn read_chunks<R: Read>(
    reader: &mut ChunkReader<R>,
    skip_data: bool,
) -> anyhow::Result<Vec<TypedChunk>> {
    let mut chunks = Vec::new();
    for result in reader.chunks(skip_data) {
        match result {
            Ok(chunk) => chunks.push(chunk),
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}");
                chunks.extend(e.into_chunk());
            }
            Err(e) => return Err(e).context(format!("failed to read chunk #{}", chunks.len() + 1)),
        }
    }
    Ok(chunks)
}

/// One animation frame: its control chunk and the compressed payloads that follow it.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub(crate) control: FrameControl,
    pub(crate) payloads: Vec<Vec<u8>>,
    /// The frame is drawn from the `IDAT` chunks of the default image.
    pub(crate) default_image: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct Animation {
    pub(crate) header: ImageHeader,
    pub(crate) control: Option<AnimationControl>,
    pub(crate) frames: Vec<Frame>,
    /// Generic chunks located before the first `IDAT`.
    pub(crate) leading: Vec<TypedChunk>,
}

impl Animation {
    pub(crate) fn from_chunks(chunks: &[TypedChunk]) -> anyhow::Result<Self> {
        let mut header = None;
        let mut control = None;
        let mut frames = Vec::<Frame>::new();
        let mut leading = Vec::new();
        let mut seen_image_data = false;
        let mut seen_frame_data = false;
        for chunk in chunks {
            match chunk.kind() {
                ChunkKind::Header => {
                    if header.is_some() {
                        bail!("duplicate IHDR chunk");
                    }
                    header = chunk.header().copied();
                }
                ChunkKind::AnimationControl => control = chunk.animation_control().copied(),
                ChunkKind::FrameControl => {
                    if let Some(fc) = chunk.frame_control() {
                        frames.push(Frame {
                            control: *fc,
                            payloads: Vec::new(),
                            default_image: false,
                        });
                    }
                }
                ChunkKind::ImageData => {
                    seen_image_data = true;
                    if frames.len() == 1 && !seen_frame_data {
                        let frame = &mut frames[0];
                        frame.default_image = true;
                        frame.payloads.extend(chunk.frame_payload().map(<[u8]>::to_vec));
                    }
                }
                ChunkKind::FrameData => {
                    seen_frame_data = true;
                    match frames.last_mut() {
                        Some(frame) => frame
                            .payloads
                            .extend(chunk.frame_payload().map(<[u8]>::to_vec)),
                        None => log::warn!("fdAT chunk before any fcTL chunk is ignored"),
                    }
                }
                ChunkKind::End => break,
                ChunkKind::Generic => {
                    if !seen_image_data {
                        leading.push(chunk.clone());
                    }
                }
            }
        }
        let Some(header) = header else {
            bail!("missing IHDR chunk");
        };
        if let Some(control) = control {
            if control.num_frames as usize != frames.len() {
                log::warn!(
                    "acTL declares {} frames but {} fcTL chunks were found",
                    control.num_frames,
                    frames.len()
                );
            }
        }
        Ok(Self {
            header,
            control,
            frames,
            leading,
        })
    }

    #[inline]
    pub(crate) fn is_animated(&self) -> bool {
        self.control.is_some()
    }
}

pub(crate) fn dispose_name(fc: &FrameControl) -> String {
    match fc.dispose() {
        Ok(DisposeOp::None) => "none".into(),
        Ok(DisposeOp::Background) => "background".into(),
        Ok(DisposeOp::Previous) => "previous".into(),
        Err(e) => e.to_string(),
    }
}

pub(crate) fn blend_name(fc: &FrameControl) -> String {
    match fc.blend() {
        Ok(BlendOp::Source) => "source".into(),
        Ok(BlendOp::Over) => "over".into(),
        Err(e) => e.to_string(),
    }
}
