use thiserror::Error;

/// The one and only rejection produced by the validators.
///
/// Every reason an input can fail (length, foreign characters, malformed
/// groups, out of range values, bad compression) collapses into this value.
/// The reason itself is only emitted as a `TRACE` event.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("invalid IP address")]
pub struct InvalidAddress;
