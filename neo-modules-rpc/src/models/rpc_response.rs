// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_response.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result`/`error` is present on a conforming node; when a
/// node emits both, `error` takes precedence during handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version.
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Identifier of the request this answers.
    #[serde(default)]
    pub id: Value,

    /// Result payload, typed per method. `null` is a legitimate value for
    /// some methods and is kept distinct from an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error object when the call failed on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcResponseError>,
}

/// Error object carried inside a failing [`RpcResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Node-reported error code.
    pub code: i64,

    /// Node-reported error message.
    pub message: String,

    /// Additional error data, if the node attached any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
