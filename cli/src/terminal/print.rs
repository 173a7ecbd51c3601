use std::io::{self, Write};

use colored::*;
use ipcanon_core::batch::Outcome;

/// Writes bare canonical addresses, one per line.
pub fn canonical_lines(outcomes: &[Outcome]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for outcome in outcomes {
        if let Ok(addr) = &outcome.result {
            writeln!(out, "{addr}")?;
        }
    }
    out.flush()
}

/// Writes one verdict per input, e.g. `[valid]   ::1 > 0000:...:0001`.
pub fn verdict_lines(outcomes: &[Outcome]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for outcome in outcomes {
        writeln!(out, "{}", verdict(outcome))?;
    }
    out.flush()
}

fn verdict(outcome: &Outcome) -> String {
    match &outcome.result {
        Ok(addr) => format!(
            "{}   {} {} {}",
            "[valid]".green().bold(),
            outcome.input,
            ">".bright_black(),
            addr.to_string().bright_white()
        ),
        Err(_) => format!("{} {:?}", "[invalid]".red().bold(), outcome.input),
    }
}
