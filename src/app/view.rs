//! The bet list view.
//!
//! Owns the displayed collection and the fetch-gating rules. The rows are
//! always exactly the last successful server response; a refresh either
//! replaces them wholesale or leaves them alone.

use tracing::{debug, warn};

use crate::auth::Session;
use crate::domain::Aposta;
use crate::port::outbound::{BetGateway, ListFilter};

/// What a [`BetListView::refresh`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Session not initialized or not authenticated; no request was made.
    Skipped,
    /// Fetch succeeded; the rows were replaced wholesale.
    Replaced { count: usize },
    /// Fetch failed; prior rows (or the empty state) were kept.
    Failed { error: String },
}

/// View state over the authenticated user's bets.
#[derive(Debug, Default)]
pub struct BetListView {
    rows: Vec<Aposta>,
    filter: ListFilter,
}

impl BetListView {
    #[must_use]
    pub fn new(filter: ListFilter) -> Self {
        Self {
            rows: Vec::new(),
            filter,
        }
    }

    /// The currently displayed collection.
    #[must_use]
    pub fn rows(&self) -> &[Aposta] {
        &self.rows
    }

    /// Fetch once and update the view.
    ///
    /// Makes no request unless the session is initialized and
    /// authenticated. A failed fetch is logged and absorbed here; callers
    /// decide whether the outcome warrants a nonzero exit.
    pub async fn refresh<G: BetGateway + ?Sized>(
        &mut self,
        session: &Session,
        gateway: &G,
    ) -> RefreshOutcome {
        if !session.initialized() || !session.authenticated() {
            debug!(
                initialized = session.initialized(),
                authenticated = session.authenticated(),
                "skipping fetch, session not ready"
            );
            return RefreshOutcome::Skipped;
        }

        match gateway.list(&self.filter).await {
            Ok(bets) => {
                let count = bets.len();
                self.rows = bets;
                debug!(count, "bet list replaced");
                RefreshOutcome::Replaced { count }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch bets, keeping displayed rows");
                RefreshOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }
}
