//! Character classes accepted by the dispatcher before a family parser runs.

/// Characters that may appear in a dotted decimal address.
pub const VALID_IPV4_CHARS: &str = ".0123456789";

/// Characters that may appear in a colon separated address, including an
/// embedded dotted decimal tail.
pub const VALID_IPV6_CHARS: &str = ".0123456789:abcdefABCDEF";

/// Returns `true` if any character of `input` is missing from `valid_chars`.
pub fn contains_invalid_chars(input: &str, valid_chars: &str) -> bool {
    input.chars().any(|c| !valid_chars.contains(c))
}
