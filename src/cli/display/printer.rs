//! User-facing messages and confirmation prompts

use super::StatusIcon;
use crate::shared::error::{CliError, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    pub assume_yes: bool,
}

impl Printer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    pub fn success(&self, text: &str) {
        println!("{} {}", StatusIcon::SUCCESS.green(), text);
    }

    /// Single progress line on stderr in place of a spinner
    pub fn progress(&self, text: &str) {
        eprintln!("{} {}", StatusIcon::PENDING, text.cyan());
    }

    /// Ask for a y/N answer on stdin unless `--assume-yes` was given
    pub fn prompt_for_confirmation(&self, prompt: &str) -> Result<()> {
        if self.assume_yes {
            return Ok(());
        }
        let stdin = std::io::stdin();
        confirm_from(&mut stdin.lock(), &mut std::io::stderr(), prompt)
    }
}

pub fn confirm_from<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<()> {
    write!(out, "{} [y/N] ", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(CliError::Aborted),
    }
}
