//! tessera-p2p
//!
//! Setup layer between a Tessera node and its networking services.
//!
//! A [`SetupStrategy`] supplies the libp2p host and the discovery engine.
//! [`Prepared`] wraps services that were already built elsewhere and checks
//! they fit together. [`NetworkServices::wire`] runs the startup sequence:
//! check once, then collect the services.

pub mod error;
pub mod local_node;
pub mod prepared;
pub mod service;
pub mod startup;
pub mod strategy;

#[cfg(test)]
mod testing;

pub use error::ConfigurationError;
pub use local_node::{LocalIdentity, LocalNode, NodeRecord};
pub use prepared::Prepared;
pub use service::{Discovery, DiscoveryService, Host, HostService};
pub use startup::NetworkServices;
pub use strategy::SetupStrategy;
