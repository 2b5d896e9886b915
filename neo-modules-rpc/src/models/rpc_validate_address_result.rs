// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_validate_address_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Address validation verdict returned by `validateaddress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcValidateAddressResult {
    /// The address that was checked.
    pub address: String,

    /// Whether the address is valid on this network.
    #[serde(rename = "isvalid")]
    pub is_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isvalid_wire_name_is_stable() {
        let result = RpcValidateAddressResult {
            address: "AQVh2pG732YvtNaxEGkQUei3YA4cvo7d2i".to_string(),
            is_valid: true,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isvalid"], true);

        let parsed: RpcValidateAddressResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, result);
    }
}
