// Copyright (C) 2015-2025 The Neo Project.
//
// transport.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::RpcClientError;
use crate::models::{RpcRequest, RpcResponse};

/// Default timeout applied to each HTTP request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport collaborator contract.
///
/// Accepts a built request and returns the raw response envelope, or fails
/// with a transport-level error. Timeouts and cancellation are the
/// implementor's concern; the client layer performs no retries and holds no
/// cross-call state.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Dispatches one request and awaits its response.
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, RpcClientError>;
}

/// HTTP transport posting JSON-RPC envelopes to a node endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http: Client,
    credentials: Option<(String, String)>,
}

impl HttpTransport {
    /// Creates a configurable builder for the transport.
    #[must_use]
    pub fn builder(endpoint: Url) -> HttpTransportBuilder {
        HttpTransportBuilder::new(endpoint)
    }

    /// Creates a transport with the default timeout and no authentication.
    pub fn new(endpoint: Url) -> Result<Self, RpcClientError> {
        HttpTransportBuilder::new(endpoint).build()
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, RpcClientError> {
        let started = Instant::now();

        let mut call = self.http.post(self.endpoint.clone()).json(request);
        if let Some((user, password)) = &self.credentials {
            call = call.basic_auth(user, Some(password));
        }

        let response = call.send().await?;
        let body = response.text().await?;
        let envelope: RpcResponse =
            serde_json::from_str(&body).map_err(RpcClientError::InvalidResponse)?;

        debug!(
            method = %request.method,
            elapsed_ms = started.elapsed().as_millis() as u64,
            node_error = envelope.error.is_some(),
            "rpc request completed"
        );

        Ok(envelope)
    }
}

/// Configurable builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    endpoint: Url,
    timeout: Duration,
    credentials: Option<(String, String)>,
}

impl HttpTransportBuilder {
    /// Starts a builder targeting `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_HTTP_TIMEOUT,
            credentials: None,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets HTTP basic-auth credentials for nodes behind an authenticating
    /// proxy.
    #[must_use]
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    /// Sets credentials only when both parts are present.
    #[must_use]
    pub fn with_optional_auth(mut self, user: Option<String>, password: Option<String>) -> Self {
        if let (Some(user), Some(password)) = (user, password) {
            self.credentials = Some((user, password));
        }
        self
    }

    /// Builds the transport, constructing the underlying HTTP client.
    pub fn build(self) -> Result<HttpTransport, RpcClientError> {
        let http = Client::builder().timeout(self.timeout).build()?;
        Ok(HttpTransport {
            endpoint: self.endpoint,
            http,
            credentials: self.credentials,
        })
    }
}
