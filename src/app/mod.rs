//! Application state sitting between the CLI and the gateway port.

pub mod view;

pub use view::{BetListView, RefreshOutcome};
