use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Credential resolution errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to read token file '{path}': {source}")]
    TokenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("token from {source_name} is empty")]
    EmptyToken { source_name: &'static str },

    #[error("not authenticated: no bearer token available (set APOSTAS_TOKEN or [auth] in the config)")]
    NotAuthenticated,
}

/// Errors raised by the aposta HTTP API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bet '{id}' not found{detail}")]
    BetNotFound { id: String, detail: ServerDetail },

    #[error("unexpected status {status} from {url}{detail}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        detail: ServerDetail,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Optional server-provided message, rendered as `: <mensagem>` when present.
#[derive(Debug, Default)]
pub struct ServerDetail(pub Option<String>);

impl std::fmt::Display for ServerDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(message) => write!(f, ": {message}"),
            None => Ok(()),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A fetch the list view absorbed, surfaced for a one-shot exit code.
    #[error("failed to fetch bets: {reason}")]
    FetchFailed { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_not_found_includes_server_message_when_present() {
        let err = ApiError::BetNotFound {
            id: "abc".into(),
            detail: ServerDetail(Some("Aposta não encontrada".into())),
        };
        let text = err.to_string();
        assert!(text.contains("abc"));
        assert!(text.contains("Aposta não encontrada"));
    }

    #[test]
    fn bet_not_found_reads_cleanly_without_server_message() {
        let err = ApiError::BetNotFound {
            id: "abc".into(),
            detail: ServerDetail(None),
        };
        assert_eq!(err.to_string(), "bet 'abc' not found");
    }
}
