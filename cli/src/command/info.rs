use crate::command::{
    Command,
    core::{Animation, blend_name, dispose_name, open_png, read_chunks},
};
use clap::{Parser, ValueHint};
use libapng::ReadOptions;
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct InfoCommand {
    #[arg(value_hint = ValueHint::FilePath)]
    pub(crate) file: PathBuf,
}

impl Command for InfoCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        show_info(self)
    }
}

fn show_info(args: InfoCommand) -> anyhow::Result<()> {
    let mut reader = open_png(&args.file, ReadOptions::default())?;
    let chunks = read_chunks(&mut reader, true)?;
    let animation = Animation::from_chunks(&chunks)?;
    for line in render(&animation) {
        println!("{line}");
    }
    Ok(())
}

fn render(animation: &Animation) -> Vec<String> {
    let h = &animation.header;
    let mut lines = vec![format!(
        "image: {}x{}, bit depth {}, color type {}, interlace {}",
        h.width, h.height, h.bit_depth, h.color_type, h.interlace_method
    )];
    let Some(control) = animation.control else {
        lines.push("animation: none".into());
        return lines;
    };
    let plays = if control.is_infinite() {
        "infinite".to_string()
    } else {
        control.num_plays.to_string()
    };
    lines.push(format!(
        "animation: {} frames, plays {plays}",
        control.num_frames
    ));
    for (idx, frame) in animation.frames.iter().enumerate() {
        let fc = &frame.control;
        lines.push(format!(
            "frame {idx}: {}x{} at ({}, {}), delay {:.3}s, dispose {}, blend {}{}",
            fc.width,
            fc.height,
            fc.x_offset,
            fc.y_offset,
            fc.delay_secs(),
            dispose_name(fc),
            blend_name(fc),
            if frame.default_image {
                ", default image"
            } else {
                ""
            }
        ));
    }
    lines
}
