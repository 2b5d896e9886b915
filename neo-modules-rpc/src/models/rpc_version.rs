// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_version.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Node software details returned by `getversion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcVersion {
    /// P2P listening port.
    #[serde(default)]
    pub port: u16,

    /// Random nonce identifying this node instance.
    #[serde(default)]
    pub nonce: u32,

    /// User agent string, e.g. `/NEO:2.10.3/`.
    #[serde(rename = "useragent")]
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_payload() {
        let version: RpcVersion = serde_json::from_str(
            r#"{"port":10333,"nonce":771199013,"useragent":"/NEO:2.10.3/"}"#,
        )
        .unwrap();
        assert_eq!(version.port, 10333);
        assert_eq!(version.nonce, 771_199_013);
        assert_eq!(version.user_agent, "/NEO:2.10.3/");
    }
}
