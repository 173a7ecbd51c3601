//! # IPv6 Validator / Normalizer
//!
//! Parses colon separated text into eight 16-bit groups.
//!
//! Handles:
//! * `::` zero-compression, expanded at the first empty group.
//! * A dotted decimal tail (e.g. `::ffff:192.0.2.1`) occupying the last two groups.
//! * Mixed case hex digits.
//!
//! The canonical form is every group written as four lowercase hex digits.

use std::fmt::{self, Write};
use std::iter;
use std::net::Ipv6Addr;

use tracing::trace;

use crate::error::InvalidAddress;
use crate::ipv4;

pub const GROUP_COUNT: usize = 8;

/// `::1` splits into three groups.
const MIN_GROUP_COUNT: usize = 3;
const MAX_GROUP_LEN: usize = 4;

/// One colon separated group before it is resolved to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group<'a> {
    /// Text as written. Empty text marks the edges of `::`.
    Text(&'a str),
    /// Half of an embedded dotted decimal tail.
    Value(u16),
}

impl Group<'_> {
    fn len(&self) -> usize {
        match self {
            Group::Text(text) => text.len(),
            Group::Value(_) => MAX_GROUP_LEN,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Group::Text(""))
    }

    fn value(&self) -> Result<u16, InvalidAddress> {
        match *self {
            Group::Value(value) => Ok(value),
            Group::Text("") => Ok(0),
            Group::Text(text) => {
                if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
                    trace!(group = text, "group is not a hex number");
                    return Err(InvalidAddress);
                }
                u16::from_str_radix(text, 16).map_err(|_| {
                    trace!(group = text, "group out of range");
                    InvalidAddress
                })
            }
        }
    }
}

/// Parses `input` into an [`Ipv6Addr`].
///
/// Only the first empty group is expanded. Any further empty group is caught
/// by the group count checks or, when the count works out, read as zero.
pub fn parse(input: &str) -> Result<Ipv6Addr, InvalidAddress> {
    if input.contains(' ') || input.contains(":::") {
        trace!(input, "space or run of three colons");
        return Err(InvalidAddress);
    }

    let mut groups: Vec<Group<'_>> = input.split(':').map(Group::Text).collect();

    let tail = match groups.last() {
        Some(Group::Text(last)) if last.contains('.') => Some(*last),
        _ => None,
    };

    // 127.1.2.255 > [7f01, 02ff]
    if let Some(tail) = tail {
        let [a, b, c, d] = ipv4::parse(tail)?.octets();
        groups.pop();
        groups.push(Group::Value(u16::from_be_bytes([a, b])));
        groups.push(Group::Value(u16::from_be_bytes([c, d])));
    }

    if let Some(group) = groups.iter().find(|group| group.len() > MAX_GROUP_LEN) {
        trace!(input, ?group, "group longer than four digits");
        return Err(InvalidAddress);
    }

    if !(MIN_GROUP_COUNT..=GROUP_COUNT).contains(&groups.len()) {
        trace!(input, count = groups.len(), "group count out of bounds");
        return Err(InvalidAddress);
    }

    match groups.iter().position(Group::is_empty) {
        Some(index) => {
            let missing = GROUP_COUNT - groups.len();
            groups.splice(index..index, iter::repeat_n(Group::Text(""), missing));
        }
        None if groups.len() != GROUP_COUNT => {
            trace!(input, count = groups.len(), "no shorthand and fewer than eight groups");
            return Err(InvalidAddress);
        }
        None => {}
    }

    if groups.len() != GROUP_COUNT {
        trace!(input, count = groups.len(), "expansion did not produce eight groups");
        return Err(InvalidAddress);
    }

    let mut segments = [0u16; GROUP_COUNT];
    for (segment, group) in segments.iter_mut().zip(&groups) {
        *segment = group.value()?;
    }

    Ok(Ipv6Addr::from(segments))
}

/// Validates `input` and returns its fully expanded, lowercase form.
pub fn parse_ipv6(input: &str) -> Result<String, InvalidAddress> {
    parse(input).map(|addr| canonical(&addr))
}

/// Renders `addr` as eight zero padded lowercase groups.
pub fn canonical(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

pub(crate) fn write_canonical<W: Write>(addr: &Ipv6Addr, out: &mut W) -> fmt::Result {
    for (index, segment) in addr.segments().iter().enumerate() {
        if index > 0 {
            out.write_char(':')?;
        }
        write!(out, "{segment:04x}")?;
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
