//! Command-line interface for broadside.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Broadside - two-player grid battle match server
#[derive(Parser, Debug)]
#[command(name = "broadside")]
#[command(about = "Two-player grid battle match coordinator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP match server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and BROADSIDE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and BROADSIDE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a config file and print the effective settings
    CheckConfig {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_to_no_overrides() {
        let cli = Cli::try_parse_from(["broadside", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert!(port.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "broadside", "serve", "--config", "b.toml", "--host", "0.0.0.0", "-p", "8080",
        ])
        .unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert_eq!(config, Some(PathBuf::from("b.toml")));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_check_config_requires_path() {
        assert!(Cli::try_parse_from(["broadside", "check-config"]).is_err());
    }
}
