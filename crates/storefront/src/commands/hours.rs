//! Opening hours conversion command.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use storefront_i18n::convert_opening_hours_to_german;

/// Run the hours command.
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let lines: Vec<String> = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("Failed to read stdin")?,
    };

    let mut out = io::stdout().lock();
    for line in convert_opening_hours_to_german(&lines) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
