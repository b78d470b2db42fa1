//! Address search port
//!
//! Defines the interface for free-text address lookup.

use async_trait::async_trait;
use domain::AddressCandidate;
#[cfg(test)]
use mockall::automock;

/// Port for address search
///
/// Implementations never fail: transport errors, non-success statuses and
/// malformed bodies all yield an empty list (and are logged by the adapter).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressSearchPort: Send + Sync {
    /// Search for candidates matching `query`, in relevance order
    ///
    /// Queries shorter than three characters return an empty list without
    /// touching the network.
    async fn search(&self, query: &str) -> Vec<AddressCandidate>;
}
