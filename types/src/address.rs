//! Account address type with `0x` prefix.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An address as it appears in balance and delegate datasets.
///
/// When it represents a blockchain account it is a 42-character string made
/// of the `0x` prefix and 40 hex digits. Other identifiers are carried as-is,
/// so construction through [`Address::new`] does not validate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// The standard prefix for account addresses.
    pub const PREFIX: &'static str = "0x";

    /// Length of a full account address, prefix included.
    pub const ACCOUNT_LEN: usize = 42;

    /// Wrap a raw address string without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse a strict account address (`0x` + 40 hex digits).
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let address = Self(raw.into());
        if address.is_account() {
            Ok(address)
        } else {
            Err(TypesError::InvalidAddress(address.0))
        }
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this address is a well-formed account address.
    pub fn is_account(&self) -> bool {
        Self::has_account_shape(&self.0)
            && self.0[Self::PREFIX.len()..]
                .bytes()
                .all(|b| b.is_ascii_hexdigit())
    }

    /// Whether `s` has the length and prefix of an account address.
    ///
    /// Length is counted in characters, not bytes. Display code abbreviates
    /// anything of this shape; it does not check the hex digits.
    pub fn has_account_shape(s: &str) -> bool {
        s.starts_with(Self::PREFIX) && s.chars().count() == Self::ACCOUNT_LEN
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
