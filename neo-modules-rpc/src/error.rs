// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for RPC client operations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while issuing an RPC call.
///
/// A `null` result for a method that legitimately returns nothing (such as
/// `gettxout` on a spent output) is not represented here; wrappers surface it
/// as `None`.
#[derive(Debug, Error)]
pub enum RpcClientError {
    /// A caller-supplied argument violated a documented precondition.
    /// Raised synchronously, before any network interaction.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Violated precondition.
        reason: &'static str,
    },

    /// The transport failed to complete the network exchange.
    /// Passed through from the transport unmodified, never retried.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not a JSON-RPC envelope.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// The node itself answered with a JSON-RPC error object.
    #[error("node returned error {code}: {message}")]
    Node {
        /// Error code reported by the node.
        code: i64,
        /// Error message reported by the node.
        message: String,
        /// Optional additional data attached by the node.
        data: Option<Value>,
    },

    /// The `result` field did not match the shape expected for the method.
    /// Indicates a protocol or node-version mismatch, not a transient fault.
    #[error("failed to decode `{method}` result: {source}")]
    Decode {
        /// Wire name of the method whose result failed to decode.
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The node returned no result for a method whose result is required.
    #[error("`{method}` returned no result")]
    MissingResult {
        /// Wire name of the method.
        method: &'static str,
    },
}

impl From<reqwest::Error> for RpcClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
