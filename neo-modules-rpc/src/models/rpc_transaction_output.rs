// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_transaction_output.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Transaction output returned by `gettxout`.
///
/// The node only answers for unspent outputs; a spent output yields a `null`
/// result, which the wrapper surfaces as `None` rather than an error.
/// Historical node versions emitted capitalized keys (`N`, `Asset`, ...), so
/// those are accepted as aliases; serialization always uses the lowercase
/// names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcTransactionOutput {
    /// Index of the output within its transaction, starting from 0.
    #[serde(alias = "N")]
    pub n: u32,

    /// Hash of the asset the output is denominated in.
    #[serde(alias = "Asset")]
    pub asset: String,

    /// Amount, as the node's decimal string.
    #[serde(alias = "Value")]
    pub value: String,

    /// Receiving address.
    #[serde(alias = "Address")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capitalized_legacy_keys() {
        let output: RpcTransactionOutput = serde_json::from_str(
            r#"{
                "N": 0,
                "Asset": "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b",
                "Value": "2950",
                "Address": "AHCNSDkh2Xs66SzmyKGdoDKY752uyeXDrt"
            }"#,
        )
        .unwrap();

        assert_eq!(output.n, 0);
        assert_eq!(
            output.asset,
            "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b"
        );
        assert_eq!(output.value, "2950");
        assert_eq!(output.address, "AHCNSDkh2Xs66SzmyKGdoDKY752uyeXDrt");
    }

    #[test]
    fn roundtrip_uses_lowercase_keys() {
        let output = RpcTransactionOutput {
            n: 1,
            asset: "0xc56f".to_string(),
            value: "12.5".to_string(),
            address: "AHCNSDkh2Xs66SzmyKGdoDKY752uyeXDrt".to_string(),
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["n"], 1);
        assert_eq!(json["asset"], "0xc56f");

        let parsed: RpcTransactionOutput = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, output);
    }
}
