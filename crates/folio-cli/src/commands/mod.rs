/*!
 * Command implementations and shared prompts.
 */

use std::io::{self, Write};

use anyhow::{Context as _, Result};

pub mod dashboard;
pub mod login;
pub mod session;
pub mod show;

/// Prompt for a single visible line on stdin.
pub(crate) fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt for a passphrase with hidden input.
pub(crate) fn prompt_password(prompt: &str) -> Result<String> {
    rpassword::prompt_password(prompt).context("reading passphrase")
}
