//! Outbound adapters: implementations of the ports over real services.

pub mod api;
