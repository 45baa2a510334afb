//! Builders for domain records used across tests.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::domain::{Aposta, BetResult, BetStatus, NewBet};

/// A placed bet with deterministic fields and the given id.
#[must_use]
pub fn aposta(id: &str) -> Aposta {
    Aposta {
        id: id.to_string(),
        id_partida: 7,
        data_aposta: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        resultado: BetResult::Empate,
        valor: dec!(25.5),
        status: BetStatus::Realizada,
    }
}

/// A settled, won bet.
#[must_use]
pub fn aposta_ganhou(id: &str) -> Aposta {
    Aposta {
        status: BetStatus::Ganhou,
        resultado: BetResult::VitoriaMandante,
        ..aposta(id)
    }
}

/// A new bet ready to submit.
#[must_use]
pub fn new_bet() -> NewBet {
    NewBet {
        id_partida: 7,
        resultado: BetResult::VitoriaVisitante,
        valor: dec!(10),
    }
}
