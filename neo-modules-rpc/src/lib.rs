// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! JSON-RPC client for Neo blockchain nodes.
//!
//! The crate is two thin layers: a generic per-method request/response
//! handler ([`RpcMethodHandler`]) that turns positional parameters into a
//! JSON-RPC 2.0 envelope and decodes the `result` field into a typed model,
//! and a set of typed method wrappers on [`RpcClient`] that validate their
//! arguments before any network interaction. Network I/O lives behind the
//! [`RpcTransport`] seam; an HTTP implementation over reqwest is provided.
//!
//! Every call is independent and stateless. The client performs no retries,
//! no caching and no cross-method coordination.

mod client;
mod error;
mod handler;
mod methods;
pub mod models;
mod transport;

pub use client::RpcClient;
pub use error::RpcClientError;
pub use handler::RpcMethodHandler;
pub use methods::ApiMethod;
pub use transport::{HttpTransport, HttpTransportBuilder, RpcTransport, DEFAULT_HTTP_TIMEOUT};

// Re-export commonly used types
pub use models::{RpcRequest, RpcResponse, RpcResponseError};
