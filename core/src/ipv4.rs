//! # IPv4 Validator
//!
//! Parses dotted decimal text into four octets. Each octet is one to three
//! decimal digits, at most 255, and carries no leading zero unless it is
//! exactly `0`.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::error::InvalidAddress;

const OCTET_COUNT: usize = 4;
const MAX_OCTET_LEN: usize = 3;

/// Parses `input` into an [`Ipv4Addr`].
///
/// The split on `.` must produce exactly four chunks and every chunk must be
/// valid. An empty chunk is a failure, so `1..2.3` and `192.168.0.` reject.
pub fn parse(input: &str) -> Result<Ipv4Addr, InvalidAddress> {
    let mut octets = [0u8; OCTET_COUNT];
    let mut count = 0;

    for chunk in input.split('.') {
        if count == OCTET_COUNT {
            trace!(input, "more than four octets");
            return Err(InvalidAddress);
        }
        octets[count] = read_chunk(chunk)?;
        count += 1;
    }

    if count != OCTET_COUNT {
        trace!(input, count, "expected four octets");
        return Err(InvalidAddress);
    }

    Ok(Ipv4Addr::from(octets))
}

/// Validates `input` and returns its canonical dotted decimal form.
pub fn parse_ipv4(input: &str) -> Result<String, InvalidAddress> {
    parse(input).map(|addr| canonical(&addr))
}

/// Renders `addr` as dotted decimal.
///
/// Validated chunks never carry leading zeros, so this is the same text the
/// chunks were written with.
pub fn canonical(addr: &Ipv4Addr) -> String {
    addr.to_string()
}

fn read_chunk(chunk: &str) -> Result<u8, InvalidAddress> {
    // 1111 invalid
    if chunk.len() > MAX_OCTET_LEN {
        trace!(chunk, "octet longer than three digits");
        return Err(InvalidAddress);
    }

    // 0 valid, 01 invalid
    if chunk.starts_with('0') && chunk.len() > 1 {
        trace!(chunk, "octet has a leading zero");
        return Err(InvalidAddress);
    }

    if chunk.is_empty() || !chunk.bytes().all(|b| b.is_ascii_digit()) {
        trace!(chunk, "octet is not a decimal number");
        return Err(InvalidAddress);
    }

    chunk.parse::<u8>().map_err(|_| {
        trace!(chunk, "octet out of range");
        InvalidAddress
    })
}
