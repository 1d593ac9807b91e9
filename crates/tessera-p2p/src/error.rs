use thiserror::Error;

/// Structural inconsistency between the services bundled by a setup strategy.
///
/// Raised only by [`SetupStrategy::check`](crate::SetupStrategy::check).
/// These are never transient: a node that sees one must abort startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "inconsistent discovery setup: local node present = {has_local_node}, \
         discovery service present = {has_discovery}"
    )]
    InconsistentDiscovery {
        has_local_node: bool,
        has_discovery: bool,
    },

    #[error("cannot provide discovery without p2p host")]
    DiscoveryWithoutHost,
}
