// Copyright (C) 2015-2025 The Neo Project.
//
// methods.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;

/// The set of node RPC methods this client knows how to call.
///
/// Every request envelope is built from a variant of this enumeration, so a
/// request can never carry a method name outside the supported set. Extending
/// the client means adding a variant here plus a typed wrapper on
/// [`RpcClient`](crate::RpcClient).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    GetBestBlockHash,
    GetBlock,
    GetBlockCount,
    GetBlockHash,
    GetBlockSysFee,
    GetConnectionCount,
    GetContractState,
    GetPeers,
    GetRawMemPool,
    GetRawTransaction,
    GetStorage,
    GetTxOut,
    GetVersion,
    SendRawTransaction,
    ValidateAddress,
}

impl ApiMethod {
    /// Wire name of the method as the node expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetBestBlockHash => "getbestblockhash",
            Self::GetBlock => "getblock",
            Self::GetBlockCount => "getblockcount",
            Self::GetBlockHash => "getblockhash",
            Self::GetBlockSysFee => "getblocksysfee",
            Self::GetConnectionCount => "getconnectioncount",
            Self::GetContractState => "getcontractstate",
            Self::GetPeers => "getpeers",
            Self::GetRawMemPool => "getrawmempool",
            Self::GetRawTransaction => "getrawtransaction",
            Self::GetStorage => "getstorage",
            Self::GetTxOut => "gettxout",
            Self::GetVersion => "getversion",
            Self::SendRawTransaction => "sendrawtransaction",
            Self::ValidateAddress => "validateaddress",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
