// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::methods::ApiMethod;

/// JSON-RPC 2.0 request envelope.
///
/// Built per call and immediately dispatched; `params` keeps the order the
/// caller supplied, which must match the method's documented positional
/// signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always `"2.0"`.
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Wire name of the invoked method.
    pub method: String,

    /// Positional parameters, in the method's documented order.
    pub params: Vec<Value>,

    /// Opaque request identifier echoed back by the node.
    pub id: Value,
}

impl RpcRequest {
    /// Builds an envelope for `method`. A missing id defaults to `1`.
    #[must_use]
    pub fn new(method: ApiMethod, params: Vec<Value>, id: Option<Value>) -> Self {
        Self {
            json_rpc: "2.0".to_string(),
            method: method.as_str().to_string(),
            params,
            id: id.unwrap_or_else(|| Value::from(1)),
        }
    }
}
