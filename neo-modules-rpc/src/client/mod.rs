// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed method wrappers, split per node API area the way the node
//! documentation groups them.

mod blockchain;
mod contract;
mod node;
mod transactions;

use std::sync::Arc;

use reqwest::Url;

use crate::error::RpcClientError;
use crate::methods::ApiMethod;
use crate::transport::{HttpTransport, RpcTransport};

/// Typed entry point over a Neo node's JSON-RPC interface.
///
/// Holds no per-call state: every method is one independent request/response
/// exchange, so a single client can be shared freely across tasks. Cloning is
/// cheap (the transport is behind an `Arc`).
#[derive(Clone)]
pub struct RpcClient {
    transport: Arc<dyn RpcTransport>,
}

impl RpcClient {
    /// Creates a client over the default HTTP transport.
    pub fn new(endpoint: Url) -> Result<Self, RpcClientError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(
            endpoint,
        )?)))
    }

    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    pub(crate) fn transport(&self) -> &dyn RpcTransport {
        self.transport.as_ref()
    }
}

pub(crate) fn require_non_empty(
    argument: &'static str,
    value: &str,
) -> Result<(), RpcClientError> {
    if value.trim().is_empty() {
        return Err(RpcClientError::InvalidArgument {
            argument,
            reason: "must be a non-empty string",
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    argument: &'static str,
    value: i64,
) -> Result<(), RpcClientError> {
    if value < 0 {
        return Err(RpcClientError::InvalidArgument {
            argument,
            reason: "must not be negative",
        });
    }
    Ok(())
}

pub(crate) fn require_result<T>(
    result: Option<T>,
    method: ApiMethod,
) -> Result<T, RpcClientError> {
    result.ok_or(RpcClientError::MissingResult {
        method: method.as_str(),
    })
}
