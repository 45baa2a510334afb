//! Miette-based error diagnostics for config file problems.
//!
//! Renders the offending config with a labeled span so the user sees
//! exactly which line TOML parsing choked on.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// TOML parse failure with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(apostas::config))]
pub struct ConfigFileDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Suggestion for fixing the error.
    #[help]
    pub help: Option<String>,
}

/// Print a parse error against the config source.
pub fn report_parse_error(path: &Path, content: &str, err: &toml::de::Error) {
    let span = err
        .span()
        .map(|range| SourceSpan::from((range.start, range.len())));

    let diagnostic = ConfigFileDiagnostic {
        message: err.message().to_string(),
        src: NamedSource::new(path.display().to_string(), content.to_string()),
        span,
        help: Some("compare with config.toml.example".to_string()),
    };

    eprintln!("{:?}", miette::Report::new(diagnostic));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_carry_a_span() {
        let content = "[api\nbase_url = \"x\"\n";
        let err = toml::from_str::<toml::Value>(content).unwrap_err();
        assert!(err.span().is_some());
    }
}
