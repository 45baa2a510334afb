//! Explicit session object standing in for the identity broker.
//!
//! The broker itself (token issuance, refresh, login flows) lives outside
//! this crate. What the commands consume is the broker's observable state:
//! whether auth was ever configured (`initialized`), whether a usable
//! credential is present (`authenticated`), and the token itself. Passing
//! this object around explicitly replaces the implicit ambient auth
//! context the service's web UI relies on.

use std::fmt;

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};

/// Environment variable consulted for the token, `.env` included.
pub const TOKEN_ENV_VAR: &str = "APOSTAS_TOKEN";

/// A bearer credential. Redacted in `Debug` and `Display`; the raw value
/// only leaves through [`BearerToken::reveal`], which the HTTP adapter
/// uses to build the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Where the active token came from, for `apostas session` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Environment,
    Config,
    TokenFile,
}

impl TokenSource {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Flag => "--token flag",
            Self::Environment => "APOSTAS_TOKEN environment variable",
            Self::Config => "auth.token in config",
            Self::TokenFile => "auth.token_file contents",
        }
    }
}

/// Broker-derived session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No auth configuration anywhere; the broker was never set up.
    Uninitialized,
    /// Auth is configured but no usable token was found.
    Anonymous,
    /// A token is available.
    Authenticated {
        token: BearerToken,
        source: TokenSource,
    },
}

impl Session {
    /// Resolve the session from the explicit inputs, in precedence order:
    /// `--token` flag, `APOSTAS_TOKEN`, `auth.token`, `auth.token_file`.
    ///
    /// A present-but-empty source is an error rather than a silent
    /// fallthrough, so a truncated token file fails loudly.
    pub fn resolve(flag_token: Option<&str>, auth: Option<&AuthConfig>) -> Result<Self> {
        if let Some(token) = flag_token {
            return Self::from_raw(token, TokenSource::Flag).map_err(Into::into);
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            return Self::from_raw(&token, TokenSource::Environment).map_err(Into::into);
        }

        let Some(auth) = auth else {
            return Ok(Self::Uninitialized);
        };

        if let Some(token) = &auth.token {
            return Self::from_raw(token, TokenSource::Config).map_err(Into::into);
        }

        if let Some(path) = &auth.token_file {
            let contents =
                std::fs::read_to_string(path).map_err(|source| AuthError::TokenFile {
                    path: path.clone(),
                    source,
                })?;
            return Self::from_raw(&contents, TokenSource::TokenFile).map_err(Into::into);
        }

        Ok(Self::Anonymous)
    }

    fn from_raw(raw: &str, source: TokenSource) -> std::result::Result<Self, AuthError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuthError::EmptyToken {
                source_name: source.describe(),
            });
        }
        Ok(Self::Authenticated {
            token: BearerToken::new(trimmed),
            source,
        })
    }

    /// Whether auth was ever configured.
    #[must_use]
    pub fn initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Whether a usable credential is present.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The active token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&BearerToken> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}
