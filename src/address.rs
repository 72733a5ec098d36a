use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rpc::QueryError;

/// A ledger account as typed by the user.
///
/// Only surrounding whitespace and emptiness are checked here; anything else
/// (wrong length, non-base58 characters) is left for the endpoint to reject.
/// Deserializing goes through the same check as typed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse user input into an address
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(QueryError::InvalidInput(
                "Enter a wallet address".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl std::str::FromStr for AccountAddress {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
