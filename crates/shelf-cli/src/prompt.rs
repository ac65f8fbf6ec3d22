//! Line-based prompting
//!
//! Shared by the interactive menu and the confirmation step of `remove`.

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Print `label` and read one trimmed line
///
/// Returns `None` at end of input.
pub fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interpret a yes/no answer; anything but y/yes is no
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    let stdin = io::stdin();
    let answer = read_field(
        &mut stdin.lock(),
        &mut io::stdout(),
        &format!("{} [y/N] ", prompt),
    )?;

    Ok(answer.as_deref().map(is_yes).unwrap_or(false))
}
