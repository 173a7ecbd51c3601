//! Canonicalizes many candidates at once.
//!
//! Validation is pure, so the work is spread across the rayon pool. Results
//! come back in input order.

use ipcanon_common::config::Config;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::addr::CanonicalAddr;
use crate::error::InvalidAddress;

/// The result of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub input: String,
    pub result: Result<CanonicalAddr, InvalidAddress>,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let valid = outcomes.iter().filter(|outcome| outcome.is_valid()).count();
        Self {
            valid,
            invalid: outcomes.len() - valid,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }
}

/// Validates every input, honouring the family filter in `cfg`.
pub fn canonicalize_all<S>(inputs: &[S], cfg: &Config) -> Vec<Outcome>
where
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<Outcome> = inputs
        .par_iter()
        .map(|input| canonicalize_one(input.as_ref(), cfg))
        .collect();

    let summary = Summary::from_outcomes(&outcomes);
    debug!(
        valid = summary.valid,
        invalid = summary.invalid,
        "batch canonicalized"
    );

    outcomes
}

/// Validates a single input, honouring the family filter in `cfg`.
pub fn canonicalize_one(input: &str, cfg: &Config) -> Outcome {
    let result = input.parse::<CanonicalAddr>().and_then(|addr| {
        if cfg.accepts(addr.family()) {
            Ok(addr)
        } else {
            trace!(input, family = %addr.family(), "address family filtered out");
            Err(InvalidAddress)
        }
    });

    Outcome {
        input: input.to_owned(),
        result,
    }
}
