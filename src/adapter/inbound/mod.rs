//! Inbound adapters: ways the user drives the application.

pub mod cli;
