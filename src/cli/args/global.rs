//! Global CLI options shared across all commands
//!
//! Consolidates the global flags so handlers take one parameter instead of
//! threading each flag separately.

use clap::ValueEnum;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.joblink/config.yaml)
    pub config: Option<String>,

    /// Backend origin override
    pub api_host: Option<String>,

    /// Admin token override; bypasses the stored token
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli
                .format
                .unwrap_or_else(|| configured_format(cli.config.as_deref())),
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            token: cli.token.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// Get token override as `Option<&str>`.
    pub fn token_ref(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Format named by `preferences.format`, or pretty when unset or unreadable
fn configured_format(config_path: Option<&str>) -> OutputFormat {
    Config::load_or_default_at(config_path)
        .ok()
        .and_then(|config| config.preferences.format)
        .and_then(|name| OutputFormat::from_str(&name, true).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_format_from_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "preferences:\n  format: JSON\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["joblink-admin", "--config", &path, "status"]).unwrap();
        assert_eq!(GlobalOptions::from_cli(&cli).format, OutputFormat::Json);

        let cli = Cli::try_parse_from([
            "joblink-admin",
            "--config",
            &path,
            "--format",
            "table",
            "status",
        ])
        .unwrap();
        assert_eq!(GlobalOptions::from_cli(&cli).format, OutputFormat::Table);
    }

    #[test]
    fn test_format_defaults_to_pretty() {
        assert_eq!(configured_format(Some("/nonexistent/config.yaml")), OutputFormat::Pretty);
    }

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config: Some("/custom/path".to_string()),
            api_host: Some("http://localhost:9090".to_string()),
            token: Some("tok".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_host_ref(), Some("http://localhost:9090"));
        assert_eq!(opts.token_ref(), Some("tok"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Pretty,
            config: None,
            api_host: None,
            token: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_host_ref(), None);
        assert_eq!(opts.token_ref(), None);
    }
}
