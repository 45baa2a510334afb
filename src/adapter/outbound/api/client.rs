//! REST client for the aposta service.
//!
//! Every request carries the session's bearer token. Timed-out and
//! refused connections are retried with a bounded backoff for read
//! operations; `place` is a write and is never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::{ApostaDto, ErroDto, NewBetDto};
use crate::auth::BearerToken;
use crate::config::Config;
use crate::domain::{Aposta, NewBet};
use crate::error::{ApiError, Result, ServerDetail};
use crate::port::outbound::{BetGateway, ListFilter};

/// HTTP client for the aposta REST API.
pub struct ApostaClient {
    http: HttpClient,
    base_url: String,
    token: BearerToken,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl ApostaClient {
    /// Create a client with default HTTP settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: BearerToken) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            token,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    /// Create a client with timeouts and retry settings from config.
    #[must_use]
    pub fn from_config(config: &Config, token: BearerToken) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url().to_string(),
            token,
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(AUTHORIZATION, format!("Bearer {}", self.token.reveal()))
    }

    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            match self.authorized(build()).send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    warn!(
                        attempt,
                        max_attempts,
                        error = %err,
                        "HTTP request failed, retrying"
                    );
                    if self.retry_backoff_ms > 0 {
                        sleep(Duration::from_millis(self.retry_backoff_ms)).await;
                    }
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    /// Decode the service's `Erro` body, if there is one.
    async fn server_detail(response: Response) -> ServerDetail {
        let detail = response
            .json::<ErroDto>()
            .await
            .ok()
            .and_then(|erro| erro.mensagem);
        ServerDetail(detail)
    }

    async fn unexpected_status(url: String, response: Response) -> ApiError {
        let status = response.status().as_u16();
        ApiError::UnexpectedStatus {
            status,
            url,
            detail: Self::server_detail(response).await,
        }
    }
}

#[async_trait]
impl BetGateway for ApostaClient {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Aposta>> {
        let url = format!("{}/aposta", self.base_url);
        debug!(url = %url, status = ?filter.status, "fetching bets");

        let response = self
            .send_with_retry(|| {
                let request = self.http.get(&url);
                match &filter.status {
                    Some(status) => request.query(&[("status", status.as_str())]),
                    None => request,
                }
            })
            .await?;

        if !response.status().is_success() {
            return Err(Self::unexpected_status(url, response).await.into());
        }

        let bets: Vec<ApostaDto> = response.json().await?;
        debug!(count = bets.len(), "fetched bets");
        Ok(bets.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: &str) -> Result<Aposta> {
        let url = format!("{}/aposta/{}", self.base_url, id);
        debug!(url = %url, "fetching bet");

        let response = self.send_with_retry(|| self.http.get(&url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::BetNotFound {
                id: id.to_string(),
                detail: Self::server_detail(response).await,
            }
            .into());
        }
        if !response.status().is_success() {
            return Err(Self::unexpected_status(url, response).await.into());
        }

        let bet: ApostaDto = response.json().await?;
        Ok(bet.into())
    }

    async fn place(&self, bet: &NewBet) -> Result<Option<Aposta>> {
        let url = format!("{}/aposta", self.base_url);
        let body = NewBetDto::from(bet);
        debug!(url = %url, id_partida = bet.id_partida, "placing bet");

        // Writes go out exactly once.
        let response = self
            .authorized(self.http.post(&url).json(&body))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::unexpected_status(url, response).await.into());
        }

        // The service historically answers 200 with an empty body.
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let placed: ApostaDto = serde_json::from_slice(&bytes).map_err(ApiError::Decode)?;
        Ok(Some(placed.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_carry_the_bearer_header() {
        let client = ApostaClient::new("http://localhost:8081", BearerToken::new("tok-1"));
        let request = client
            .authorized(client.http.get("http://localhost:8081/aposta"))
            .build()
            .unwrap();

        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok-1");
    }

    #[test]
    fn from_config_strips_the_trailing_slash() {
        let config = Config::from_toml("[api]\nbase_url = \"http://host:8081/\"\n").unwrap();
        let client = ApostaClient::from_config(&config, BearerToken::new("t"));
        assert_eq!(client.base_url, "http://host:8081");
    }
}
