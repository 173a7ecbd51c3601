use crate::network::family::AddressFamily;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Restricts accepted addresses to a single family.
    ///
    /// Addresses of the other family are treated as invalid input.
    pub family: Option<AddressFamily>,
    /// Quiet level. Anything above zero silences informational logs.
    pub quiet: u8,
}

impl Config {
    /// Returns `true` if an address of `family` passes the configured filter.
    pub fn accepts(&self, family: AddressFamily) -> bool {
        self.family.is_none_or(|wanted| wanted == family)
    }
}
