use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account::Account;
use crate::error::Nep6Error;

/// A NEP-6 wallet file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// User-assigned wallet name. May be null in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Schema version, `"1.0"` for the current standard.
    pub version: String,

    /// Scrypt parameters used for NEP-2 key encryption.
    pub scrypt: ScryptParameters,

    /// Accounts stored in the wallet.
    #[serde(default)]
    pub accounts: Vec<Account>,

    /// Implementor-defined extra data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl Wallet {
    /// Current NEP-6 schema version.
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Creates an empty wallet with default scrypt parameters.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            version: Self::CURRENT_VERSION.to_string(),
            scrypt: ScryptParameters::DEFAULT,
            accounts: Vec::new(),
            extra: None,
        }
    }

    /// Parses a wallet from its NEP-6 JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Nep6Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the wallet back to NEP-6 JSON with stable field names.
    pub fn to_json(&self) -> Result<String, Nep6Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Scrypt difficulty parameters carried in a NEP-6 wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParameters {
    pub n: u64,
    pub r: u32,
    pub p: u32,
}

impl ScryptParameters {
    /// Parameters the NEP-6 standard recommends.
    pub const DEFAULT: Self = Self {
        n: 16384,
        r: 8,
        p: 8,
    };
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wallet_roundtrip() {
        let wallet = Wallet::new(Some("primary".to_string()));
        let parsed = Wallet::from_json(&wallet.to_json().unwrap()).unwrap();
        assert_eq!(parsed, wallet);
        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.scrypt, ScryptParameters::DEFAULT);
    }

    #[test]
    fn parses_standard_wallet_file() {
        let wallet = Wallet::from_json(
            r#"{
                "name": null,
                "version": "1.0",
                "scrypt": {"n": 16384, "r": 8, "p": 8},
                "accounts": [
                    {
                        "address": "AQLASLtT6pWbThcSCYU1biVqhMnzhTgLFq",
                        "isDefault": true,
                        "lock": false
                    }
                ],
                "extra": null
            }"#,
        )
        .unwrap();

        assert!(wallet.name.is_none());
        assert_eq!(wallet.accounts.len(), 1);
        assert!(wallet.accounts[0].is_default);
        assert!(wallet.accounts[0].key.is_none());
    }

    #[test]
    fn missing_scrypt_section_is_a_parse_error() {
        assert!(Wallet::from_json(r#"{"version":"1.0","accounts":[]}"#).is_err());
    }
}
