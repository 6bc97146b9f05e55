//! Command-line front end for `hued`.
//!
//! The binary in `main.rs` only parses arguments, installs logging and calls
//! [`run`]. Everything else lives here so it can be exercised from tests
//! with an in-memory writer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod keys;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, Format, ThemeCommand};
pub use commands::run;
pub use config::{DefaultTheme, Settings};
