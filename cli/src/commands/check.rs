use ipcanon_common::config::Config;
use ipcanon_core::batch::{self, Summary};
use tracing::info;

use crate::terminal::print;

pub fn check(inputs: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("no addresses to check");
    }

    let outcomes = batch::canonicalize_all(inputs.as_slice(), cfg);
    if prints_verdicts(cfg.quiet) {
        print::verdict_lines(&outcomes)?;
    }

    let summary = Summary::from_outcomes(&outcomes);
    if summary.invalid > 0 {
        anyhow::bail!("{} of {} addresses are invalid", summary.invalid, summary.total());
    }

    info!("All {} addresses are valid", summary.valid);
    Ok(())
}

/// Verdict lines are dropped from `-qq` on; the exit status still reports.
fn prints_verdicts(quiet: u8) -> bool {
    quiet < 2
}
