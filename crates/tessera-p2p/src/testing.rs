//! Stand-in services for unit tests.

use std::net::SocketAddr;
use std::sync::Arc;

use libp2p::identity::Keypair;
use libp2p::{Multiaddr, PeerId};

use crate::local_node::{LocalIdentity, LocalNode};
use crate::service::{Discovery, DiscoveryService, Host, HostService};

#[derive(Debug)]
pub struct MockHost {
    pub peer_id: PeerId,
}

impl Host for MockHost {
    fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    fn listen_addrs(&self) -> Vec<Multiaddr> {
        Vec::new()
    }
}

#[derive(Debug)]
pub struct MockDiscovery;

impl Discovery for MockDiscovery {
    fn local_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 9000))
    }
}

pub fn mock_host() -> HostService {
    Arc::new(MockHost { peer_id: PeerId::random() })
}

pub fn mock_discovery() -> DiscoveryService {
    Arc::new(MockDiscovery)
}

pub fn mock_local_node() -> LocalIdentity {
    Arc::new(LocalNode::new(Keypair::generate_ed25519().public(), Vec::new()))
}

/// Compare trait-object handles by data pointer only.
pub fn same_host(a: &HostService, b: &HostService) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

pub fn same_discovery(a: &DiscoveryService, b: &DiscoveryService) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
