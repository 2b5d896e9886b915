// Copyright (C) 2015-2025 The Neo Project.
//
// transactions.rs file belongs to the neo project and is free
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
use crate::models::{RpcRequest, RpcTransactionOutput};

impl RpcClient {
    /// Returns the serialized transaction, hex encoded (`getrawtransaction`).
    pub async fn get_raw_transaction_hex(&self, tx_id: &str) -> Result<String, RpcClientError> {
        require_non_empty("tx_id", tx_id)?;
        let handler = RpcMethodHandler::<String>::new(ApiMethod::GetRawTransaction);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(tx_id)])
            .await?;
        require_result(result, ApiMethod::GetRawTransaction)
    }

    /// Builds the `getrawtransaction` envelope.
    pub fn build_get_raw_transaction_request(
        &self,
        tx_id: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("tx_id", tx_id)?;
        Ok(RpcMethodHandler::<String>::new(ApiMethod::GetRawTransaction)
            .build_request(id, vec![Value::from(tx_id)]))
    }

    /// Returns the unspent transaction output at `index` of transaction
    /// `tx_id` (`gettxout`).
    ///
    /// The node answers `null` for an output that has already been spent;
    /// that is passed through as `None`, not an error. (Upstream node
    /// behavior: "gettxout returns unspent output only".)
    pub async fn get_tx_out(
        &self,
        tx_id: &str,
        index: i32,
    ) -> Result<Option<RpcTransactionOutput>, RpcClientError> {
        require_non_empty("tx_id", tx_id)?;
        require_non_negative("index", i64::from(index))?;
        let handler = RpcMethodHandler::<RpcTransactionOutput>::new(ApiMethod::GetTxOut);
        handler
            .send_request(
                self.transport(),
                None,
                vec![Value::from(tx_id), Value::from(index)],
            )
            .await
    }

    /// Builds the `gettxout` envelope without dispatching it.
    pub fn build_get_tx_out_request(
        &self,
        tx_id: &str,
        index: i32,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("tx_id", tx_id)?;
        require_non_negative("index", i64::from(index))?;
        Ok(
            RpcMethodHandler::<RpcTransactionOutput>::new(ApiMethod::GetTxOut)
                .build_request(id, vec![Value::from(tx_id), Value::from(index)]),
        )
    }

    /// Broadcasts a serialized transaction, hex encoded
    /// (`sendrawtransaction`). Returns the node's acceptance verdict.
    pub async fn send_raw_transaction(&self, raw_tx: &str) -> Result<bool, RpcClientError> {
        require_non_empty("raw_tx", raw_tx)?;
        let handler = RpcMethodHandler::<bool>::new(ApiMethod::SendRawTransaction);
        let result = handler
            .send_request(self.transport(), None, vec![Value::from(raw_tx)])
            .await?;
        require_result(result, ApiMethod::SendRawTransaction)
    }

    /// Builds the `sendrawtransaction` envelope.
    pub fn build_send_raw_transaction_request(
        &self,
        raw_tx: &str,
        id: Option<Value>,
    ) -> Result<RpcRequest, RpcClientError> {
        require_non_empty("raw_tx", raw_tx)?;
        Ok(RpcMethodHandler::<bool>::new(ApiMethod::SendRawTransaction)
            .build_request(id, vec![Value::from(raw_tx)]))
    }
}
