use std::{path::Path, time::Duration};

use console::style;
use indicatif::HumanDuration;

const LABEL_WIDTH: usize = 10;

fn line(label: &str, message: &str) -> String {
    format!(
        "{:>width$} {message}",
        style(label).green().bold(),
        width = LABEL_WIDTH
    )
}

/// `   Wrote dark-theme.json (42 tokens)`
pub fn wrote(path: &Path, tokens: usize) {
    eprintln!(
        "{}",
        line("Wrote", &format!("{} ({tokens} tokens)", path.display()))
    );
}

pub fn finished(files: usize, elapsed: Duration) {
    let noun = if files == 1 { "theme file" } else { "theme files" };
    eprintln!(
        "{}",
        line(
            "Finished",
            &format!("{files} {noun} in {}", HumanDuration(elapsed))
        )
    );
}

/// Prints the error with its whole context chain.
pub fn failed(err: &anyhow::Error) {
    eprintln!("{}: {err:#}", style("error").red().bold());
}
