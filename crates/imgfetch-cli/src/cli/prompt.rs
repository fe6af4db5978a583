//! Interactive URL prompt.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please enter the URL of the image: ";

/// Writes the prompt to `output` and reads one line from `input`, trimmed.
/// Fails only when `input` is already at end of file.
pub fn read_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no URL given: stdin closed");
    }
    Ok(line.trim().to_string())
}
