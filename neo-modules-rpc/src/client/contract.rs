// Copyright (C) 2015-2025 The Neo Project.
//
// contract.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::Value;

use super::{require_non_empty, require_result, RpcClient};
use crate::error::RpcClientError;
use crate::handler::RpcMethodHandler;
use crate::methods::ApiMethod;
use crate::models::{RpcContractState, RpcRequest};

impl RpcClient {
    /// Queries contract information by script hash (`getcontractstate`).
    pub async fn get_contract_state(
        &self,
        script_hash: &str,
    ) -> Result<RpcContractState, RpcClientError> {
        require_non_empty("script_hash", script_hash)?;
        let handler = RpcMethodHandler::<RpcContractState>::new(ApiMethod::GetContractState);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(script_hash)])
            .await?;
        require_result(result, ApiMethod::GetContractState)
    }

    /// Builds the `getcontractstate` envelope without dispatching it.
    pub fn build_get_contract_state_request(
        &self,
        script_hash: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("script_hash", script_hash)?;
        Ok(
            RpcMethodHandler::<RpcContractState>::new(ApiMethod::GetContractState)
                .build_request(id, vec![Value::from(script_hash)]),
        )
    }

    /// Returns the stored value under `key` (hex) in the given contract's
    /// storage (`getstorage`). A missing key yields `None`.
    pub async fn get_storage(
        &self,
        script_hash: &str,
        key: &str,
    ) -> Result<Option<String>, RpcClientError> {
        require_non_empty("script_hash", script_hash)?;
        require_non_empty("key", key)?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetStorage);
        handler
            .send_request(
                self.transport(),
                None,
                vec![Value::from(script_hash), Value::from(key)],
            )
            .await
    }

    /// Builds the `getstorage` envelope.
    pub fn build_get_storage_request(
        &self,
        script_hash: &str,
        key: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("script_hash", script_hash)?;
        require_non_empty("key", key)?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetStorage)
            .build_request(id, vec![Value::from(script_hash), Value::from(key)]))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::client_with_body;
    use crate::error::RpcClientError;
    use std::sync::atomic::Ordering;

    const CONTRACT_STATE_BODY: &str = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "version": 0,
            "hash": "0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9",
            "script": "011fc56b6c766b00527ac4",
            "parameters": ["String", "Array"],
            "returntype": "ByteArray",
            "storage": true,
            "name": "RPX Sale",
            "code_version": "1.0",
            "author": "Red Pulse",
            "email": "rpx@red-pulse.com",
            "description": "RPX Sale"
        }
    }"#;

    #[tokio::test]
    async fn contract_state_is_decoded_from_documented_schema() {
        let (client, _) = client_with_body(CONTRACT_STATE_BODY);
        let state = client
            .get_contract_state("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9")
            .await
            .unwrap();
        assert_eq!(state.hash, "0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
        assert_eq!(state.name.as_deref(), Some("RPX Sale"));
        assert!(state.storage);
    }

    #[tokio::test]
    async fn empty_script_hash_fails_without_network_call() {
        let (client, calls) = client_with_body(CONTRACT_STATE_BODY);
        let err = client.get_contract_state("").await.unwrap_err();
        assert!(matches!(
            err,
            RpcClientError::InvalidArgument { argument: "script_hash", .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn whitespace_script_hash_is_rejected_too() {
        let (client, calls) = client_with_body(CONTRACT_STATE_BODY);
        assert!(client.get_contract_state("   ").await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn build_request_carries_script_hash_verbatim() {
        let (client, _) = client_with_body("{}");
        let request = client
            .build_get_contract_state_request("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9", None)
            .unwrap();
        assert_eq!(request.method, "getcontractstate");
        assert_eq!(
            request.params,
            vec![serde_json::Value::from(
                "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9"
            )]
        );
    }

    #[tokio::test]
    async fn missing_storage_key_yields_none() {
        let (client, _) = client_with_body(r#"{"jsonrpc":"2.0","id":1,"result":null}"#);
        let value = client.get_storage("0xecc6", "00").await.unwrap();
        assert!(value.is_none());
    }
}
