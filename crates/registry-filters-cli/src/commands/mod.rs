//! One module per subcommand. Each `run` returns the text to print.

pub mod decode;
pub mod encode;
pub mod page;
pub mod reconcile;
pub mod sort;
pub mod workers;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a whole input file, or stdin when no file was given.
pub(crate) fn read_input(file: Option<&Path>, stdin: &mut dyn Read) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}
