//! Path utilities for apostas.
//!
//! All data lives under `~/.apostas/`:
//! - `~/.apostas/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the apostas home directory (`~/.apostas/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".apostas")
}

/// Returns the default config file path (`~/.apostas/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Ensures the apostas home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_apostas_home() {
        let home = home_dir();
        let config = default_config();

        assert!(home.to_string_lossy().contains(".apostas"));
        assert!(config.to_string_lossy().contains(".apostas"));
    }
}
