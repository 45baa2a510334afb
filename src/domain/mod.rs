//! Service-agnostic domain types.
//!
//! Nothing in here knows about HTTP, serde wire names, or the CLI. The
//! adapters translate in and out of these types at the edges.

pub mod bet;
pub mod money;

pub use bet::{Aposta, BetResult, BetStatus, NewBet};
pub use money::{format_amount, Amount};
