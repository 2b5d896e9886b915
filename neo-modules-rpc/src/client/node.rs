// Copyright (C) 2015-2025 The Neo Project.
//
// node.rs file belongs to the neo project and is free
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
use crate::models::{RpcPeers, RpcRequest, RpcValidateAddressResult, RpcVersion};

impl RpcClient {
    /// Returns the node's connection count (`getconnectioncount`).
    pub async fn get_connection_count(&self) -> Result<u32, RpcClientError> {
        let handler = RpcMethodHandler::<u32>::new(ApiMethod::GetConnectionCount);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetConnectionCount)
    }

    /// Builds the `getconnectioncount` envelope without dispatching it.
    #[must_use]
    pub fn build_get_connection_count_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<u32>::new(ApiMethod::GetConnectionCount).build_request(id, vec![])
    }

    /// Returns the peers the node knows about (`getpeers`).
    pub async fn get_peers(&self) -> Result<RpcPeers, RpcClientError> {
        let handler = RpcMethodHandler::<RpcPeers>::new(ApiMethod::GetPeers);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetPeers)
    }

    /// Builds the `getpeers` envelope without dispatching it.
    #[must_use]
    pub fn build_get_peers_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<RpcPeers>::new(ApiMethod::GetPeers).build_request(id, vec![])
    }

    /// Returns the node software details (`getversion`).
    pub async fn get_version(&self) -> Result<RpcVersion, RpcClientError> {
        let handler = RpcMethodHandler::<RpcVersion>::new(ApiMethod::GetVersion);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetVersion)
    }

    /// Builds the `getversion` envelope without dispatching it.
    #[must_use]
    pub fn build_get_version_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<RpcVersion>::new(ApiMethod::GetVersion).build_request(id, vec![])
    }

    /// Returns the hashes of unconfirmed transactions in the node's memory
    /// pool (`getrawmempool`).
    pub async fn get_raw_mempool(&self) -> Result<Vec<String>, RpcClientError> {
        let handler = RpcMethodHandler::<Vec<String>>::new(ApiMethod::GetRawMemPool);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetRawMemPool)
    }

    /// Builds the `getrawmempool` envelope without dispatching it.
    #[must_use]
    pub fn build_get_raw_mempool_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<Vec<String>>::new(ApiMethod::GetRawMemPool).build_request(id, vec![])
    }

    /// Checks whether `address` is valid on the node's network
    /// (`validateaddress`).
    pub async fn validate_address(
        &self,
        address: &str,
    ) -> Result<RpcValidateAddressResult, RpcClientError> {
        require_non_empty("address", address)?;
        let handler =
            RpcMethodHandler::<RpcValidateAddressResult>::new(ApiMethod::ValidateAddress);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(address)])
            .await?;
        require_result(result, ApiMethod::ValidateAddress)
    }

    /// Builds the `validateaddress` envelope.
    pub fn build_validate_address_request(
        &self,
        address: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("address", address)?;
        Ok(
            RpcMethodHandler::<RpcValidateAddressResult>::new(ApiMethod::ValidateAddress)
                .build_request(id, vec![Value::from(address)]),
        )
    }
}
