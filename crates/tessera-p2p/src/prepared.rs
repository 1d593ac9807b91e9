use tracing::Span;

use crate::error::ConfigurationError;
use crate::local_node::LocalIdentity;
use crate::service::{DiscoveryService, HostService};
use crate::strategy::SetupStrategy;

/// Provides a p2p host and discovery service that are already set up.
///
/// Used for in-process node simulation and tests, where the caller builds
/// the services itself and only needs them validated and handed out.
#[derive(Debug, Clone, Default)]
pub struct Prepared {
    pub host: Option<HostService>,
    pub local_node: Option<LocalIdentity>,
    pub discovery: Option<DiscoveryService>,
}

impl Prepared {
    pub fn new(
        host: Option<HostService>,
        local_node: Option<LocalIdentity>,
        discovery: Option<DiscoveryService>,
    ) -> Self {
        Self { host, local_node, discovery }
    }

    pub fn with_host(mut self, host: HostService) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_discovery(
        mut self,
        local_node: LocalIdentity,
        discovery: DiscoveryService,
    ) -> Self {
        self.local_node = Some(local_node);
        self.discovery = Some(discovery);
        self
    }
}

impl SetupStrategy for Prepared {
    fn check(&self) -> Result<(), ConfigurationError> {
        let has_local_node = self.local_node.is_some();
        let has_discovery = self.discovery.is_some();
        if has_local_node != has_discovery {
            return Err(ConfigurationError::InconsistentDiscovery {
                has_local_node,
                has_discovery,
            });
        }
        if has_local_node && self.host.is_none() {
            return Err(ConfigurationError::DiscoveryWithoutHost);
        }
        Ok(())
    }

    fn host(&self) -> Option<HostService> {
        self.host.clone()
    }

    fn discovery(&self, _log: &Span) -> (Option<LocalIdentity>, Option<DiscoveryService>) {
        (self.local_node.clone(), self.discovery.clone())
    }
}
