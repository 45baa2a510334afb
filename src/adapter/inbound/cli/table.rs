//! Table rendering for bet records.
//!
//! Columns mirror the service's own list view: ID, ID Partida, Data da
//! Aposta, Resultado, Valor, Status.

use chrono::{DateTime, Local, TimeZone, Utc};
use tabled::{Table, Tabled};

use crate::domain::{format_amount, Aposta};

#[derive(Tabled)]
pub struct BetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "ID Partida")]
    id_partida: i64,
    #[tabled(rename = "Data da Aposta")]
    data_aposta: String,
    #[tabled(rename = "Resultado")]
    resultado: String,
    #[tabled(rename = "Valor")]
    valor: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BetRow {
    fn new<Tz: TimeZone>(bet: &Aposta, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: bet.id.clone(),
            id_partida: bet.id_partida,
            data_aposta: format_timestamp(bet.data_aposta, tz),
            resultado: bet.resultado.to_string(),
            valor: format_amount(bet.valor),
            status: bet.status.to_string(),
        }
    }
}

/// Render a timestamp in the given zone, `dd/MM/yyyy HH:mm:ss`.
fn format_timestamp<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

/// Render bets as a table in the viewer's local time zone.
#[must_use]
pub fn render(bets: &[Aposta]) -> String {
    render_in(bets, &Local)
}

/// Render bets as a table in an explicit time zone.
#[must_use]
pub fn render_in<Tz: TimeZone>(bets: &[Aposta], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let rows: Vec<BetRow> = bets.iter().map(|bet| BetRow::new(bet, tz)).collect();
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::fixtures;
    use chrono::FixedOffset;
    use rust_decimal_macros::dec;

    fn brt() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    #[test]
    fn one_row_per_bet_plus_header() {
        let bets = vec![fixtures::aposta("a"), fixtures::aposta("b")];
        let table = render_in(&bets, &Utc);

        let data_rows = table
            .lines()
            .filter(|line| line.contains(" a ") || line.contains(" b "))
            .count();
        assert_eq!(data_rows, 2);
    }

    #[test]
    fn header_matches_the_service_list_view() {
        let table = render_in(&[fixtures::aposta("a")], &Utc);
        let header = table.lines().nth(1).unwrap();
        for column in [
            "ID",
            "ID Partida",
            "Data da Aposta",
            "Resultado",
            "Valor",
            "Status",
        ] {
            assert!(header.contains(column), "missing column {column}");
        }
    }

    #[test]
    fn valor_renders_with_two_fraction_digits() {
        let mut bet = fixtures::aposta("a");
        bet.valor = dec!(7);
        let table = render_in(&[bet], &Utc);
        assert!(table.contains("7.00"));
    }

    #[test]
    fn timestamp_renders_in_the_requested_zone() {
        // 12:30 UTC is 09:30 in UTC-3.
        let table = render_in(&[fixtures::aposta("a")], &brt());
        assert!(table.contains("01/05/2024 09:30:00"));
    }

    #[test]
    fn unknown_status_renders_verbatim() {
        let mut bet = fixtures::aposta("a");
        bet.status = crate::domain::BetStatus::Other("CANCELADA".into());
        let table = render_in(&[bet], &Utc);
        assert!(table.contains("CANCELADA"));
    }
}
