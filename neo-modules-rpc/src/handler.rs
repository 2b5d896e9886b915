// Copyright (C) 2015-2025 The Neo Project.
//
// handler.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RpcClientError;
use crate::methods::ApiMethod;
use crate::models::RpcRequest;
use crate::transport::RpcTransport;

/// Generic request/response handler bound to one RPC method and its result
/// type.
///
/// One instance per method, parameterized by the expected result shape;
/// the method name and `T` are the only things that vary between methods.
/// The handler performs no semantic validation of parameters — each typed
/// wrapper validates its own arguments before delegating here.
pub struct RpcMethodHandler<T> {
    method: ApiMethod,
    _result: PhantomData<fn() -> T>,
}

impl<T> RpcMethodHandler<T> {
    /// Binds a handler to `method`.
    #[must_use]
    pub const fn new(method: ApiMethod) -> Self {
        Self {
            method,
            _result: PhantomData,
        }
    }

    /// The method this handler is bound to.
    #[must_use]
    pub const fn method(&self) -> ApiMethod {
        self.method
    }

    /// Constructs the request envelope with the bound method name and the
    /// supplied positional parameters, in the order given. Pure and
    /// infallible.
    #[must_use]
    pub fn build_request(&self, id: Option<Value>, params: Vec<Value>) -> RpcRequest {
        RpcRequest::new(self.method, params, id)
    }
}

impl<T: DeserializeOwned> RpcMethodHandler<T> {
    /// Dispatches the built request through `transport` and decodes the
    /// `result` field into `T`.
    ///
    /// Transport failures pass through unwrapped; a node error object becomes
    /// [`RpcClientError::Node`]; a `null` or absent result is returned as
    /// `None` because some methods legitimately answer with nothing
    /// (`gettxout` on a spent output).
    pub async fn send_request(
        &self,
        transport: &dyn RpcTransport,
        id: Option<Value>,
        params: Vec<Value>,
    ) -> Result<Option<T>, RpcClientError> {
        let request = self.build_request(id, params);
        let response = transport.send(&request).await?;

        if let Some(error) = response.error {
            return Err(RpcClientError::Node {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        match response.result {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| RpcClientError::Decode {
                    method: self.method.as_str(),
                    source,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RpcResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubTransport {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl StubTransport {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RpcTransport for StubTransport {
        async fn send(&self, _request: &RpcRequest) -> Result<RpcResponse, RpcClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            serde_json::from_str(self.body).map_err(RpcClientError::InvalidResponse)
        }
    }

    #[test]
    fn build_request_carries_method_and_params_verbatim() {
        let handler = RpcMethodHandler::<Value>::new(ApiMethod::GetTxOut);
        let request = handler.build_request(
            None,
            vec![Value::from("f4250dab094c38d8"), Value::from(0)],
        );

        assert_eq!(request.method, "gettxout");
        assert_eq!(request.params[0], Value::from("f4250dab094c38d8"));
        assert_eq!(request.params[1], Value::from(0));
        assert_eq!(request.id, Value::from(1));
    }

    #[tokio::test]
    async fn null_result_is_absence_not_error() {
        let transport =
            StubTransport::new(r#"{"jsonrpc":"2.0","id":1,"result":null}"#);
        let handler = RpcMethodHandler::<Value>::new(ApiMethod::GetTxOut);

        let result = handler.send_request(&transport, None, vec![]).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn node_error_surfaces_code_and_message() {
        let transport = StubTransport::new(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#,
        );
        let handler = RpcMethodHandler::<Value>::new(ApiMethod::GetVersion);

        let err = handler.send_request(&transport, None, vec![]).await.unwrap_err();
        match err {
            RpcClientError::Node { code, message, .. } => {
                assert_eq!(code, -32601);
                assert_eq!(message, "Method not found");
            }
            other => panic!("expected node error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_decode_error() {
        let transport =
            StubTransport::new(r#"{"jsonrpc":"2.0","id":1,"result":"not a number"}"#);
        let handler = RpcMethodHandler::<u32>::new(ApiMethod::GetBlockCount);

        let err = handler.send_request(&transport, None, vec![]).await.unwrap_err();
        match err {
            RpcClientError::Decode { method, .. } => assert_eq!(method, "getblockcount"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn typed_result_is_decoded() {
        let transport =
            StubTransport::new(r#"{"jsonrpc":"2.0","id":1,"result":2007512}"#);
        let handler = RpcMethodHandler::<u32>::new(ApiMethod::GetBlockCount);

        let count = handler.send_request(&transport, None, vec![]).await.unwrap();
        assert_eq!(count, Some(2_007_512));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}
