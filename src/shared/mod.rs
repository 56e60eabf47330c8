pub mod error;

pub use error::{CliError, Result};
