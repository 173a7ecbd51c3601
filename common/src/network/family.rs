//! # Address Family
//!
//! The two address families understood by the validators.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// Four dotted decimal octets.
    V4,
    /// Eight colon separated 16-bit hex groups.
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => f.write_str("IPv4"),
            AddressFamily::V6 => f.write_str("IPv6"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    /// Parses a family name.
    ///
    /// Accepts "4", "v4", "ipv4", "6", "v6" and "ipv6" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(AddressFamily::V4),
            "6" | "v6" | "ipv6" => Ok(AddressFamily::V6),
            _ => Err(format!("unknown address family: {s}")),
        }
    }
}
