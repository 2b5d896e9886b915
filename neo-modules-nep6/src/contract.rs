use serde::{Deserialize, Serialize};

use crate::error::Nep6Error;

/// Verification contract attached to a NEP-6 account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract script, hex encoded.
    pub script: String,

    /// Entry-point parameter list.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Whether the contract has been deployed to the chain.
    #[serde(default)]
    pub deployed: bool,
}

impl Contract {
    /// Parses a contract from its NEP-6 JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Nep6Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the contract back to NEP-6 JSON with stable field names.
    pub fn to_json(&self) -> Result<String, Nep6Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A named parameter of a verification contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
}

/// NEP-6 contract parameter types; serialized by their standard names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    Signature,
    Boolean,
    Integer,
    Hash160,
    Hash256,
    ByteArray,
    PublicKey,
    String,
    Array,
    InteropInterface,
    Void,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_type_uses_standard_names_on_the_wire() {
        let parameter = Parameter {
            name: "signature".to_string(),
            parameter_type: ParameterType::Signature,
        };

        let json = serde_json::to_value(&parameter).unwrap();
        assert_eq!(json["name"], "signature");
        assert_eq!(json["type"], "Signature");
    }

    #[test]
    fn unknown_parameter_type_is_rejected() {
        let result = serde_json::from_str::<Parameter>(r#"{"name":"x","type":"Bogus"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn contract_roundtrip() {
        let contract = Contract {
            script: "21036dc4bf8f0405dcf5d12a38487b359cb4bd693357a387d74fc438ffc7757948b0ac"
                .to_string(),
            parameters: vec![Parameter {
                name: "signature".to_string(),
                parameter_type: ParameterType::Signature,
            }],
            deployed: false,
        };

        let parsed = Contract::from_json(&contract.to_json().unwrap()).unwrap();
        assert_eq!(parsed, contract);
    }
}
