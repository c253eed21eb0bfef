use std::io::Write;

use crate::CliContext;
use crate::commands;

const PROMPT: &str = "steep> ";

/// Print the prompt and read one line from stdin.
///
/// Returns an error on a closed stdin so the REPL can shut down.
pub fn readline() -> Result<String, String> {
    let mut out = std::io::stdout();
    write!(out, "{PROMPT}").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    let read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("stdin closed".to_string());
    }
    Ok(buffer)
}

/// Treat a raw input line as a user interaction.
///
/// Every line, blank or malformed ones included, stops the repeating tone.
/// Returns the trimmed command text, or `None` when there is nothing to run.
pub async fn accept<'a>(line: &'a str, ctx: &CliContext) -> Option<&'a str> {
    commands::silence(ctx).await;
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}
