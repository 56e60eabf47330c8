//! Command-line interface

pub mod commands;
pub mod context;
pub mod display;
pub mod iaas;
pub mod mongodbflex;

pub use commands::CliArgs;
pub use context::{CommandContext, GlobalFlags};
