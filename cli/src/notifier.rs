//! Terminal alert/confirm surface: alerts on stderr, confirmations on stdin.

use std::io::{self, Write};

use panel::panels::Notifier;

pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            eprintln!("{message} [y/N] y");
            return true;
        }

        eprint!("{message} [y/N] ");
        if let Err(error) = io::stderr().flush() {
            tracing::debug!(%error, "stderr flush failed");
        }
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(error) => {
                tracing::warn!(%error, "could not read confirmation; treating as no");
                false
            }
        }
    }
}

/// Only an explicit `y`/`yes` confirms; anything else, including EOF, declines.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "notifier_test.rs"]
mod tests;
