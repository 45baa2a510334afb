//! Bet records as served by the aposta service.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::money::Amount;

/// A bet record. Held only in view-local memory for the lifetime of a
/// command; the service is the single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Aposta {
    /// Server-assigned identifier.
    pub id: String,
    /// Identifier of the match the bet is on.
    pub id_partida: i64,
    /// When the bet was placed.
    pub data_aposta: DateTime<Utc>,
    /// Predicted outcome.
    pub resultado: BetResult,
    /// Wagered amount.
    pub valor: Amount,
    /// Lifecycle status.
    pub status: BetStatus,
}

/// A bet not yet submitted. The server assigns `id`, `dataAposta` and the
/// initial status.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBet {
    pub id_partida: i64,
    pub resultado: BetResult,
    pub valor: Amount,
}

/// Bet lifecycle status.
///
/// Unknown labels are carried through untouched so a new server-side
/// status never fails an otherwise good list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetStatus {
    /// Placed, match not yet settled.
    Realizada,
    /// Settled as won.
    Ganhou,
    /// Settled as lost.
    Perdeu,
    /// A label this client does not know about.
    Other(String),
}

impl BetStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Realizada => "REALIZADA",
            Self::Ganhou => "GANHOU",
            Self::Perdeu => "PERDEU",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for BetStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "REALIZADA" => Self::Realizada,
            "GANHOU" => Self::Ganhou,
            "PERDEU" => Self::Perdeu,
            _ => Self::Other(label),
        }
    }
}

impl FromStr for BetStatus {
    type Err = std::convert::Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(label.to_string()))
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted match outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetResult {
    /// Home side wins.
    VitoriaMandante,
    /// Visiting side wins.
    VitoriaVisitante,
    /// Draw.
    Empate,
    /// A label this client does not know about.
    Other(String),
}

impl BetResult {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::VitoriaMandante => "VITORIA_MANDANTE",
            Self::VitoriaVisitante => "VITORIA_VISITANTE",
            Self::Empate => "EMPATE",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for BetResult {
    fn from(label: String) -> Self {
        match label.as_str() {
            "VITORIA_MANDANTE" => Self::VitoriaMandante,
            "VITORIA_VISITANTE" => Self::VitoriaVisitante,
            "EMPATE" => Self::Empate,
            _ => Self::Other(label),
        }
    }
}

impl FromStr for BetResult {
    type Err = std::convert::Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(label.to_string()))
    }
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_labels_round_trip() {
        for label in ["REALIZADA", "GANHOU", "PERDEU"] {
            let status: BetStatus = label.parse().unwrap();
            assert!(!matches!(status, BetStatus::Other(_)));
            assert_eq!(status.to_string(), label);
        }
    }

    #[test]
    fn unknown_status_label_survives_untouched() {
        let status = BetStatus::from("CANCELADA".to_string());
        assert_eq!(status, BetStatus::Other("CANCELADA".into()));
        assert_eq!(status.to_string(), "CANCELADA");
    }

    #[test]
    fn known_result_labels_round_trip() {
        for label in ["VITORIA_MANDANTE", "VITORIA_VISITANTE", "EMPATE"] {
            let result: BetResult = label.parse().unwrap();
            assert!(!matches!(result, BetResult::Other(_)));
            assert_eq!(result.to_string(), label);
        }
    }
}
