// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_peers.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Node peer lists returned by `getpeers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcPeers {
    /// Peers the node knows about but is not connected to.
    #[serde(default)]
    pub unconnected: Vec<RpcPeer>,

    /// Peers the node has blacklisted.
    #[serde(default)]
    pub bad: Vec<RpcPeer>,

    /// Currently connected peers.
    #[serde(default)]
    pub connected: Vec<RpcPeer>,
}

/// A single peer entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcPeer {
    /// Peer IP address.
    pub address: String,

    /// Peer P2P port.
    pub port: u16,
}
