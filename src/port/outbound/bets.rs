//! Gateway port for the remote aposta service.

use async_trait::async_trait;

use crate::domain::{Aposta, BetStatus, NewBet};
use crate::error::Result;

/// Server-side filter for list queries.
///
/// The filter is forwarded to the service verbatim; the client never
/// narrows the returned collection itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<BetStatus>,
}

impl ListFilter {
    #[must_use]
    pub fn with_status(status: BetStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Read/write access to bet records on the remote service.
///
/// Commands and the list view depend on this trait, never on the HTTP
/// client directly, so tests can substitute scripted gateways.
#[async_trait]
pub trait BetGateway: Send + Sync {
    /// Fetch all bets, optionally filtered server-side by status.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Aposta>>;

    /// Fetch a single bet. Fetching a placed bet triggers settlement on
    /// the server when the underlying match has finished.
    async fn get(&self, id: &str) -> Result<Aposta>;

    /// Submit a new bet. The server assigns id, timestamp and status, and
    /// may or may not echo the stored record back.
    async fn place(&self, bet: &NewBet) -> Result<Option<Aposta>>;
}
