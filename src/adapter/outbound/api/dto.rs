//! Wire types for the aposta REST API.
//!
//! The service speaks camelCase JSON. Timestamps arrive either as RFC 3339
//! or as the zone-less `yyyy-MM-ddTHH:mm:ss[.SSS]` shape the service's
//! `LocalDateTime` fields serialize to; zone-less values are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Aposta, NewBet};
use crate::domain::money::Amount;

/// A bet record as returned by `GET /aposta` and `GET /aposta/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApostaDto {
    pub id: String,
    pub id_partida: i64,
    #[serde(with = "wire_datetime")]
    pub data_aposta: DateTime<Utc>,
    pub resultado: String,
    pub valor: Amount,
    pub status: String,
}

impl From<ApostaDto> for Aposta {
    fn from(dto: ApostaDto) -> Self {
        Self {
            id: dto.id,
            id_partida: dto.id_partida,
            data_aposta: dto.data_aposta,
            resultado: dto.resultado.into(),
            valor: dto.valor,
            status: dto.status.into(),
        }
    }
}

/// Request body for `POST /aposta`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBetDto {
    pub id_partida: i64,
    pub resultado: String,
    /// The service models amounts as doubles; send a JSON number, not the
    /// decimal's string form.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Amount,
}

impl From<&NewBet> for NewBetDto {
    fn from(bet: &NewBet) -> Self {
        Self {
            id_partida: bet.id_partida,
            resultado: bet.resultado.to_string(),
            valor: bet.valor,
        }
    }
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErroDto {
    pub mensagem: Option<String>,
    pub codigo: Option<i32>,
    pub data: Option<String>,
}

mod wire_datetime {
    use super::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_SHAPE: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, NAIVE_SHAPE)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetResult, BetStatus};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn decodes_camel_case_record_with_rfc3339_timestamp() {
        let json = r#"{
            "id": "4be6c9d6",
            "idPartida": 7,
            "dataAposta": "2024-05-01T12:30:00Z",
            "resultado": "EMPATE",
            "valor": 25.5,
            "status": "REALIZADA"
        }"#;

        let bet: Aposta = serde_json::from_str::<ApostaDto>(json).unwrap().into();

        assert_eq!(bet.id, "4be6c9d6");
        assert_eq!(bet.id_partida, 7);
        assert_eq!(
            bet.data_aposta,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        );
        assert_eq!(bet.resultado, BetResult::Empate);
        assert_eq!(bet.valor, dec!(25.5));
        assert_eq!(bet.status, BetStatus::Realizada);
    }

    #[test]
    fn decodes_zone_less_timestamp_as_utc() {
        let json = r#"{
            "id": "x",
            "idPartida": 1,
            "dataAposta": "2024-05-01T12:30:00.123",
            "resultado": "EMPATE",
            "valor": 1,
            "status": "REALIZADA"
        }"#;

        let dto: ApostaDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.data_aposta.timezone(), Utc);
        assert_eq!(
            dto.data_aposta.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn unknown_labels_decode_without_failing_the_record() {
        let json = r#"{
            "id": "x",
            "idPartida": 1,
            "dataAposta": "2024-05-01T12:30:00Z",
            "resultado": "ANULADA",
            "valor": 1,
            "status": "CANCELADA"
        }"#;

        let bet: Aposta = serde_json::from_str::<ApostaDto>(json).unwrap().into();
        assert_eq!(bet.status, BetStatus::Other("CANCELADA".into()));
        assert_eq!(bet.resultado, BetResult::Other("ANULADA".into()));
    }

    #[test]
    fn rejects_garbage_timestamps() {
        let json = r#"{
            "id": "x",
            "idPartida": 1,
            "dataAposta": "yesterday",
            "resultado": "EMPATE",
            "valor": 1,
            "status": "REALIZADA"
        }"#;

        assert!(serde_json::from_str::<ApostaDto>(json).is_err());
    }

    #[test]
    fn new_bet_serializes_with_camel_case_keys() {
        let dto = NewBetDto::from(&NewBet {
            id_partida: 42,
            resultado: BetResult::VitoriaMandante,
            valor: dec!(12.75),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["idPartida"], 42);
        assert_eq!(json["resultado"], "VITORIA_MANDANTE");
        assert_eq!(json["valor"], serde_json::json!(12.75));
    }

    #[test]
    fn decodes_server_error_body() {
        let json = r#"{"mensagem": "Aposta não encontrada", "data": "2024-05-01T12:30:00", "codigo": 404}"#;
        let erro: ErroDto = serde_json::from_str(json).unwrap();
        assert_eq!(erro.mensagem.as_deref(), Some("Aposta não encontrada"));
        assert_eq!(erro.codigo, Some(404));
        assert!(erro.data.is_some());
    }
}
