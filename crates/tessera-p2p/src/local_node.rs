use std::sync::Arc;

use libp2p::identity::PublicKey;
use libp2p::{Multiaddr, PeerId};
use parking_lot::RwLock;

/// The node's own discovery-facing identity record.
///
/// Owned by the discovery subsystem, which updates the advertised
/// addresses over the node's lifetime. Every change bumps `seq` so
/// remote peers can tell a fresh record from a stale one.
#[derive(Debug)]
pub struct LocalNode {
    public_key: PublicKey,
    peer_id: PeerId,
    state: RwLock<RecordState>,
}

#[derive(Debug)]
struct RecordState {
    addrs: Vec<Multiaddr>,
    seq: u64,
}

/// Point-in-time copy of a [`LocalNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub peer_id: PeerId,
    pub addrs: Vec<Multiaddr>,
    pub seq: u64,
}

/// Shared handle to the local node record.
pub type LocalIdentity = Arc<LocalNode>;

impl LocalNode {
    pub fn new(public_key: PublicKey, addrs: Vec<Multiaddr>) -> Self {
        let peer_id = public_key.to_peer_id();
        Self {
            public_key,
            peer_id,
            state: RwLock::new(RecordState { addrs, seq: 1 }),
        }
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn addrs(&self) -> Vec<Multiaddr> {
        self.state.read().addrs.clone()
    }

    pub fn seq(&self) -> u64 {
        self.state.read().seq
    }

    /// Replace the advertised addresses.
    ///
    /// Returns the sequence number after the update. Setting the same
    /// addresses again leaves `seq` untouched.
    pub fn set_addrs(&self, addrs: Vec<Multiaddr>) -> u64 {
        let mut state = self.state.write();
        if state.addrs != addrs {
            state.addrs = addrs;
            state.seq += 1;
        }
        state.seq
    }

    pub fn record(&self) -> NodeRecord {
        let state = self.state.read();
        NodeRecord {
            peer_id: self.peer_id,
            addrs: state.addrs.clone(),
            seq: state.seq,
        }
    }
}
