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

//! Wire-format models: the JSON-RPC envelope pair plus the typed result
//! objects the node's documented schemas map onto.

mod rpc_contract_state;
mod rpc_peers;
mod rpc_request;
mod rpc_response;
mod rpc_transaction_output;
mod rpc_validate_address_result;
mod rpc_version;

pub use rpc_contract_state::RpcContractState;
pub use rpc_peers::{RpcPeer, RpcPeers};
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use rpc_transaction_output::RpcTransactionOutput;
pub use rpc_validate_address_result::RpcValidateAddressResult;
pub use rpc_version::RpcVersion;
