//! Command-line interface parsing
//!
//! Parses the global `--components-dir` option and the `serve`, `list` and
//! `detail` sub-commands, and merges them over the environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::Config;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither `--components-dir` nor the environment named a directory
    #[error("Components directory is required: pass --components-dir or set COMPONENTS_DIR")]
    MissingComponentsDir,
}

/// Serve component documentation from a directory of MDX files
#[derive(Parser, Debug)]
#[command(name = "mdc_server")]
#[command(about = "Component documentation lookup server")]
#[command(version)]
pub struct Cli {
    /// Directory containing the component documentation units
    #[arg(short = 'd', long, global = true, value_name = "DIR")]
    pub components_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the available components
    List,
    /// Print the documentation of one component
    Detail {
        /// Component name (case-insensitive)
        name: String,
    },
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.components_dir {
            config.components_dir = Some(dir.clone());
        }
        if let Command::Serve { port: Some(port) } = &self.command {
            config.server_port = *port;
        }
        config
    }
}

/// Returns the configured components directory or an error naming the fix.
pub fn require_components_dir(config: &Config) -> Result<PathBuf, CliError> {
    config
        .components_dir
        .clone()
        .ok_or(CliError::MissingComponentsDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::parse_from(["mdc_server", "-d", "/docs", "serve", "--port", "8080"]);

        assert_eq!(cli.components_dir, Some(PathBuf::from("/docs")));
        assert_eq!(cli.command, Command::Serve { port: Some(8080) });
    }

    #[test]
    fn test_global_dir_after_subcommand() {
        let cli = Cli::parse_from(["mdc_server", "detail", "Button", "--components-dir", "/docs"]);

        assert_eq!(cli.components_dir, Some(PathBuf::from("/docs")));
        assert_eq!(
            cli.command,
            Command::Detail {
                name: "Button".to_string()
            }
        );
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["mdc_server", "-d", "/cli/docs", "serve", "-p", "4000"]);
        let config = Config {
            components_dir: Some(PathBuf::from("/env/docs")),
            ..Config::default()
        };

        let merged = cli.apply(config);
        assert_eq!(merged.components_dir, Some(PathBuf::from("/cli/docs")));
        assert_eq!(merged.server_port, 4000);
    }

    #[test]
    fn test_apply_keeps_env_values() {
        let cli = Cli::parse_from(["mdc_server", "list"]);
        let config = Config {
            components_dir: Some(PathBuf::from("/env/docs")),
            server_port: 5000,
            ..Config::default()
        };

        let merged = cli.apply(config);
        assert_eq!(merged.components_dir, Some(PathBuf::from("/env/docs")));
        assert_eq!(merged.server_port, 5000);
    }

    #[test]
    fn test_require_components_dir() {
        let config = Config::default();
        assert!(matches!(
            require_components_dir(&config),
            Err(CliError::MissingComponentsDir)
        ));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["mdc_server"]).is_err());
    }
}
