use tracing::Span;

use crate::error::ConfigurationError;
use crate::local_node::LocalIdentity;
use crate::service::{DiscoveryService, HostService};

/// A way of obtaining the host and discovery services at node startup.
///
/// Startup calls [`check`](Self::check) once and aborts on error, then asks
/// for the services. Absent services mean the feature is disabled, which is
/// a valid running mode and never an error.
pub trait SetupStrategy {
    /// Verify that the bundled services are mutually consistent.
    fn check(&self) -> Result<(), ConfigurationError>;

    /// The p2p host, or `None` if p2p is disabled.
    fn host(&self) -> Option<HostService>;

    /// The local node record and discovery engine, or `(None, None)` if
    /// discovery is disabled.
    ///
    /// `log` is the span strategies that construct services report under.
    fn discovery(&self, log: &Span) -> (Option<LocalIdentity>, Option<DiscoveryService>);
}
