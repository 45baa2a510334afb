//! Outbound ports: seams the application drives external services through.

pub mod bets;

pub use bets::{BetGateway, ListFilter};
