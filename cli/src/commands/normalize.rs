use ipcanon_common::config::Config;
use ipcanon_core::batch::{self, Summary};
use tracing::{error, info, warn};

use crate::terminal::print;

/// Invalid inputs are logged and skipped; they never fail the command.
pub fn normalize(inputs: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("no addresses to normalize");
    }

    let outcomes = batch::canonicalize_all(inputs.as_slice(), cfg);

    for outcome in outcomes.iter().filter(|outcome| !outcome.is_valid()) {
        error!("Not a valid address: {:?}", outcome.input);
    }

    print::canonical_lines(&outcomes)?;

    let summary = Summary::from_outcomes(&outcomes);
    if summary.invalid > 0 {
        warn!("{} of {} inputs were rejected", summary.invalid, summary.total());
    } else {
        let unit: &str = if summary.valid == 1 { "address has been" } else { "addresses have been" };
        info!("{} {unit} normalized", summary.valid);
    }

    Ok(())
}
