use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::Contract;
use crate::error::Nep6Error;

/// A NEP-6 wallet account entry.
///
/// Constructed once, from a wallet file or by a wallet implementation, and
/// not mutated afterwards. Wire field names (`address`, `label`, `isDefault`,
/// `lock`, `key`, `contract`, `extra`) are contractual.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Base58Check encoded address of the account,
    /// e.g. `AQLASLtT6pWbThcSCYU1biVqhMnzhTgLFq`.
    pub address: String,

    /// Label the user has given the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether this is the default change account.
    #[serde(default)]
    pub is_default: bool,

    /// Whether the user has locked the account; clients shouldn't spend
    /// funds from a locked account.
    #[serde(default)]
    pub lock: bool,

    /// Private key in NEP-2 encrypted form. Absent for watch-only or
    /// non-standard addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Verification contract details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,

    /// Implementor-defined extra data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl Account {
    /// Creates a watch-only account carrying only an address.
    #[must_use]
    pub fn watch_only(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: None,
            is_default: false,
            lock: false,
            key: None,
            contract: None,
            extra: None,
        }
    }

    /// Parses an account from its NEP-6 JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Nep6Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the account back to NEP-6 JSON with stable field names.
    pub fn to_json(&self) -> Result<String, Nep6Error> {
        Ok(serde_json::to_string(self)?)
    }
}
