// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_contract_state.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Deployed contract information returned by `getcontractstate`.
///
/// The compiled script is carried as the hex string the node emits; this
/// client never parses or executes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcContractState {
    /// Contract version number.
    #[serde(default)]
    pub version: i32,

    /// Script hash identifying the contract.
    pub hash: String,

    /// Compiled script, hex encoded. Passed through untouched.
    pub script: String,

    /// Parameter type names of the contract entry point.
    #[serde(default)]
    pub parameters: Vec<String>,

    /// Return type name of the contract entry point.
    #[serde(rename = "returntype", default)]
    pub return_type: String,

    /// Whether the contract uses storage.
    #[serde(default)]
    pub storage: bool,

    /// Human-readable contract name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Author-assigned code version.
    #[serde(rename = "code_version", default, skip_serializing_if = "Option::is_none")]
    pub code_version: Option<String>,

    /// Contract author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_node_schema() {
        let state: RpcContractState = serde_json::from_str(
            r#"{
                "version": 0,
                "hash": "0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9",
                "script": "011fc56b6c766b00527ac4",
                "parameters": ["String", "Array"],
                "returntype": "ByteArray",
                "storage": true,
                "name": "RPX Sale",
                "code_version": "1.0",
                "author": "Red Pulse",
                "email": "rpx@red-pulse.com",
                "description": "RPX Sale"
            }"#,
        )
        .unwrap();

        assert_eq!(state.hash, "0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
        assert_eq!(state.parameters, vec!["String", "Array"]);
        assert_eq!(state.return_type, "ByteArray");
        assert!(state.storage);
        assert_eq!(state.name.as_deref(), Some("RPX Sale"));
        assert_eq!(state.code_version.as_deref(), Some("1.0"));
    }

    #[test]
    fn absent_metadata_roundtrips_as_absent() {
        let state: RpcContractState = serde_json::from_str(
            r#"{"hash":"0xab","script":"00","returntype":"Void"}"#,
        )
        .unwrap();
        assert!(state.name.is_none());

        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("author").is_none());
        assert_eq!(json["returntype"], "Void");
    }

    #[test]
    fn missing_hash_is_a_parse_error() {
        assert!(serde_json::from_str::<RpcContractState>(r#"{"script":"00"}"#).is_err());
    }
}
