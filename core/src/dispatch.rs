//! Picks a family parser by sniffing the input for `.` and `:`.

use tracing::trace;

use crate::addr::CanonicalAddr;
use crate::charset::{VALID_IPV4_CHARS, VALID_IPV6_CHARS, contains_invalid_chars};
use crate::error::InvalidAddress;
use crate::{ipv4, ipv6};

/// Shortest valid input, `::1`.
pub const MIN_INPUT_LEN: usize = 3;
/// Longest valid input, a fully written IPv6 address.
pub const MAX_INPUT_LEN: usize = 39;

/// Classifies `input` and runs the matching family parser.
pub fn parse(input: &str) -> Result<CanonicalAddr, InvalidAddress> {
    // less than ::1 or greater than 0000:0000:0000:0000:0000:0000:0000:0000
    if !(MIN_INPUT_LEN..=MAX_INPUT_LEN).contains(&input.len()) {
        trace!(len = input.len(), "input length out of bounds");
        return Err(InvalidAddress);
    }

    let has_dot = input.contains('.');
    let has_colon = input.contains(':');

    if has_dot && !has_colon {
        if contains_invalid_chars(input, VALID_IPV4_CHARS) {
            trace!(input, "character outside the IPv4 set");
            return Err(InvalidAddress);
        }
        return ipv4::parse(input).map(CanonicalAddr::V4);
    }

    if has_colon {
        if contains_invalid_chars(input, VALID_IPV6_CHARS) {
            trace!(input, "character outside the IPv6 set");
            return Err(InvalidAddress);
        }
        return ipv6::parse(input).map(CanonicalAddr::V6);
    }

    trace!(input, "neither '.' nor ':' present");
    Err(InvalidAddress)
}

/// Validates an address of either family and returns its canonical form.
pub fn parse_ip(input: &str) -> Result<String, InvalidAddress> {
    parse(input).map(|addr| addr.to_string())
}

/// Entry point for callers holding raw bytes. Non UTF-8 input is rejected.
pub fn parse_ip_bytes(input: &[u8]) -> Result<String, InvalidAddress> {
    let input = std::str::from_utf8(input).map_err(|_| {
        trace!("input is not valid UTF-8");
        InvalidAddress
    })?;
    parse_ip(input)
}

/// Entry point for callers that may not hold a string at all.
pub fn parse_ip_opt(input: Option<&str>) -> Result<String, InvalidAddress> {
    input.ok_or(InvalidAddress).and_then(parse_ip)
}
