use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use libp2p::{Multiaddr, PeerId};

/// A running peer-transport service (connection management, stream muxing).
///
/// Implemented outside this crate by whatever owns the swarm.
pub trait Host: Send + Sync + fmt::Debug {
    /// Identity the host authenticates connections with.
    fn peer_id(&self) -> PeerId;

    /// Addresses the host currently accepts connections on.
    fn listen_addrs(&self) -> Vec<Multiaddr>;
}

/// A running discovery protocol engine bound to a UDP socket.
pub trait Discovery: Send + Sync + fmt::Debug {
    /// Local UDP endpoint the discovery engine answers on.
    fn local_addr(&self) -> SocketAddr;
}

/// Shared handle to the host. Cloning never starts or stops the service.
pub type HostService = Arc<dyn Host>;

/// Shared handle to the discovery engine.
pub type DiscoveryService = Arc<dyn Discovery>;
