use tracing::{info, warn, Span};

use crate::error::ConfigurationError;
use crate::local_node::LocalIdentity;
use crate::service::{DiscoveryService, HostService};
use crate::strategy::SetupStrategy;

/// Networking services handed to the rest of the node after startup.
#[derive(Debug, Clone)]
pub struct NetworkServices {
    pub host: Option<HostService>,
    pub local_node: Option<LocalIdentity>,
    pub discovery: Option<DiscoveryService>,
}

impl NetworkServices {
    /// Validate `strategy` once and collect its services.
    ///
    /// On a configuration error nothing is handed out; the caller must abort
    /// startup rather than continue with partial networking state.
    pub fn wire(strategy: &dyn SetupStrategy, log: &Span) -> Result<Self, ConfigurationError> {
        if let Err(e) = strategy.check() {
            warn!(error = %e, "invalid p2p setup");
            return Err(e);
        }

        let host = strategy.host();
        let (local_node, discovery) = strategy.discovery(log);

        match &host {
            Some(h) => info!(peer_id = %h.peer_id(), "p2p host enabled"),
            None => info!("p2p disabled"),
        }
        match (&local_node, &discovery) {
            (Some(node), Some(disc)) => info!(
                seq = node.seq(),
                udp = %disc.local_addr(),
                "discovery enabled"
            ),
            _ => info!("discovery disabled"),
        }

        Ok(Self { host, local_node, discovery })
    }

    pub fn p2p_enabled(&self) -> bool {
        self.host.is_some()
    }

    pub fn discovery_enabled(&self) -> bool {
        self.local_node.is_some() && self.discovery.is_some()
    }
}
