//! The `apng-cli` crate provides the `apng` command for inspecting
//! animated PNG files at the chunk level.
//!
//! It handles argument parsing, logging setup and command execution on top of
//! [`libapng`].
#![doc(html_root_url = "https://docs.rs/apng-cli/0.1.0")]
pub mod cli;
pub mod command;
