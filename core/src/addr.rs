//! # Canonical Address
//!
//! A validated address of either family. Its [`Display`](fmt::Display)
//! writes the canonical form, so `addr.to_string()` is what the string
//! level entry points return.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipcanon_common::network::family::AddressFamily;

use crate::error::InvalidAddress;
use crate::{dispatch, ipv6};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalAddr {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl CanonicalAddr {
    pub fn family(&self) -> AddressFamily {
        match self {
            CanonicalAddr::V4(_) => AddressFamily::V4,
            CanonicalAddr::V6(_) => AddressFamily::V6,
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match *self {
            CanonicalAddr::V4(addr) => IpAddr::V4(addr),
            CanonicalAddr::V6(addr) => IpAddr::V6(addr),
        }
    }
}

impl FromStr for CanonicalAddr {
    type Err = InvalidAddress;

    /// Parses either family through the dispatcher.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dispatch::parse(s)
    }
}

impl fmt::Display for CanonicalAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalAddr::V4(addr) => write!(f, "{addr}"),
            CanonicalAddr::V6(addr) => ipv6::write_canonical(addr, f),
        }
    }
}

impl From<Ipv4Addr> for CanonicalAddr {
    fn from(addr: Ipv4Addr) -> Self {
        CanonicalAddr::V4(addr)
    }
}

impl From<Ipv6Addr> for CanonicalAddr {
    fn from(addr: Ipv6Addr) -> Self {
        CanonicalAddr::V6(addr)
    }
}

impl From<IpAddr> for CanonicalAddr {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => CanonicalAddr::V4(addr),
            IpAddr::V6(addr) => CanonicalAddr::V6(addr),
        }
    }
}
