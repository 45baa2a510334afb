//! Apostas - a listing and tracking client for the aposta betting service.
//!
//! The service owns the records; this crate is the view over them. A
//! session object carries the bearer credential issued by an external
//! identity broker, an HTTP gateway fetches bet records, and the CLI
//! renders them as tables.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - bet records, statuses, results, amounts
//! - [`port`] - the `BetGateway` trait the application drives
//! - [`adapter`] - the REST client (outbound) and the CLI (inbound)
//! - [`app`] - the bet list view: fetch gating and wholesale replacement
//! - [`auth`] - explicit session/credential resolution
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use apostas::app::BetListView;
//! use apostas::auth::Session;
//! use apostas::port::outbound::ListFilter;
//!
//! let session = Session::resolve(Some("token"), None).unwrap();
//! let mut view = BetListView::new(ListFilter::default());
//! assert!(view.rows().is_empty());
//! # let _ = session;
//! ```

pub mod adapter;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
