//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod ping;

pub use args::{BuildArgs, Cli, Commands, PingArgs};
