// Copyright (C) 2015-2025 The Neo Project.
//
// blockchain.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::Value;

use super::{require_non_empty, require_non_negative, require_result, RpcClient};
use crate::error::RpcClientError;
use crate::handler::RpcMethodHandler;
use crate::methods::ApiMethod;
use crate::models::RpcRequest;

impl RpcClient {
    /// Returns the hash of the tallest block in the main chain
    /// (`getbestblockhash`).
    pub async fn get_best_block_hash(&self) -> Result<String, RpcClientError> {
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetBestBlockHash);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetBestBlockHash)
    }

    /// Builds the `getbestblockhash` envelope without dispatching it.
    #[must_use]
    pub fn build_get_best_block_hash_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<String>::new(ApiMethod::GetBestBlockHash).build_request(id, vec![])
    }

    /// Returns the serialized block with the given hash, hex encoded
    /// (`getblock`).
    pub async fn get_block_hex(&self, block_hash: &str) -> Result<String, RpcClientError> {
        require_non_empty("block_hash", block_hash)?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetBlock);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(block_hash)])
            .await?;
        require_result(result, ApiMethod::GetBlock)
    }

    /// Builds the `getblock` envelope for a block hash.
    pub fn build_get_block_request(
        &self,
        block_hash: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("block_hash", block_hash)?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetBlock)
            .build_request(id, vec![Value::from(block_hash)]))
    }

    /// Returns the serialized block at the given height, hex encoded
    /// (`getblock` by index).
    pub async fn get_block_hex_by_index(&self, index: i32) -> Result<String, RpcClientError> {
        require_non_negative("index", i64::from(index))?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetBlock);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(index)])
            .await?;
        require_result(result, ApiMethod::GetBlock)
    }

    /// Builds the `getblock` envelope for a block height.
    pub fn build_get_block_by_index_request(
        &self,
        index: i32,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_negative("index", i64::from(index))?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetBlock)
            .build_request(id, vec![Value::from(index)]))
    }

    /// Returns the number of blocks in the main chain (`getblockcount`).
    pub async fn get_block_count(&self) -> Result<u32, RpcClientError> {
        let handler = RpcMethodHandler::<u32>::new(ApiMethod::GetBlockCount);
        let result = handler.send_request(self.transport(), None, vec![]).await?;
        require_result(result, ApiMethod::GetBlockCount)
    }

    /// Builds the `getblockcount` envelope without dispatching it.
    #[must_use]
    pub fn build_get_block_count_request(&self, id: Option<Value>) -> RpcRequest {
        RpcMethodHandler::<u32>::new(ApiMethod::GetBlockCount).build_request(id, vec![])
    }

    /// Returns the hash of the block at the given height (`getblockhash`).
    pub async fn get_block_hash(&self, index: i32) -> Result<String, RpcClientError> {
        require_non_negative("index", i64::from(index))?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetBlockHash);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(index)])
            .await?;
        require_result(result, ApiMethod::GetBlockHash)
    }

    /// Builds the `getblockhash` envelope.
    pub fn build_get_block_hash_request(
        &self,
        index: i32,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_negative("index", i64::from(index))?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetBlockHash)
            .build_request(id, vec![Value::from(index)]))
    }

    /// Returns the aggregated system fee up to the given height, as the
    /// node's decimal string (`getblocksysfee`).
    pub async fn get_block_sys_fee(&self, height: i32) -> Result<String, RpcClientError> {
        require_non_negative("height", i64::from(height))?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetBlockSysFee);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(height)])
            .await?;
        require_result(result, ApiMethod::GetBlockSysFee)
    }

    /// Builds the `getblocksysfee` envelope.
    pub fn build_get_block_sys_fee_request(
        &self,
        height: i32,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_negative("height", i64::from(height))?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetBlockSysFee)
            .build_request(id, vec![Value::from(height)]))
    }
}
