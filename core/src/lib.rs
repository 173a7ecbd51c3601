//! Validation and canonicalization of textual IPv4 and IPv6 addresses.
//!
//! Every entry point is a pure function: a valid input yields its canonical
//! form, anything else yields [`InvalidAddress`].
//!
//! ```
//! assert_eq!(
//!     ipcanon_core::parse_ip("2001:db8::1").as_deref(),
//!     Ok("2001:0db8:0000:0000:0000:0000:0000:0001")
//! );
//! assert!(ipcanon_core::parse_ip("192.168.0.0/24").is_err());
//! ```

pub mod addr;
pub mod batch;
pub mod charset;
pub mod dispatch;
pub mod error;
pub mod ipv4;
pub mod ipv6;

pub use addr::CanonicalAddr;
pub use dispatch::{parse_ip, parse_ip_bytes, parse_ip_opt};
pub use error::InvalidAddress;
pub use ipv4::parse_ipv4;
pub use ipv6::parse_ipv6;
