//! HTTP adapter for the aposta service.

pub mod client;
pub mod dto;

pub use client::ApostaClient;
