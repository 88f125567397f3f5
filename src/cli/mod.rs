//! Command-line surface.
//!
//! With no subcommand the GUI starts; `run` and `export` perform the same
//! import → run-all and import → download workflows headlessly for CI.

pub mod headless;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::http::client::StatusPolicy;

#[derive(Parser, Debug)]
#[command(name = "api-test-creator")]
#[command(author, version, about = "Build, run and export HTTP API test cases", long_about = None)]
pub struct Cli {
    /// Base URL prefixed to every endpoint
    #[arg(long, env = "API_TEST_BASE_URL", default_value = "", global = true)]
    pub base_url: String,

    /// Name of the exported archive (defaults to tests.zip)
    #[arg(long, env = "API_TEST_ZIP_NAME", default_value = "", global = true)]
    pub zip_name: String,

    /// Directory exported archives are written to
    #[arg(long, env = "API_TEST_OUTPUT_DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Pause after each test during a run-all, in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    pub delay_ms: u64,

    /// Count any HTTP response as a pass, not only 2xx
    #[arg(long, global = true)]
    pub accept_any_status: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Import a JSON test file and run every test in order
    Run {
        /// JSON array of { endpoint, method, input }
        #[arg(short, long)]
        file: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Import a JSON test file and write the generated test archive
    Export {
        /// JSON array of { endpoint, method, input }
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Output format for headless run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by the GUI and the headless commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub zip_name: String,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub status_policy: StatusPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            zip_name: String::new(),
            output_dir: PathBuf::from("."),
            delay: crate::testing::sequencer::DEFAULT_DELAY,
            status_policy: StatusPolicy::default(),
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.trim().to_string(),
            zip_name: self.zip_name.clone(),
            output_dir: self.output_dir.clone(),
            delay: Duration::from_millis(self.delay_ms),
            status_policy: if self.accept_any_status {
                StatusPolicy::AnyResponse
            } else {
                StatusPolicy::Successful
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_gui_with_defaults() {
        let cli = Cli::try_parse_from(["api-test-creator"]).unwrap();
        assert!(cli.command.is_none());

        let config = cli.config();
        assert_eq!(config.delay, Duration::from_millis(1000));
        assert_eq!(config.status_policy, StatusPolicy::Successful);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parses_run_with_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "api-test-creator",
            "run",
            "--file",
            "tests.json",
            "--format",
            "json",
            "--base-url",
            " https://api.x ",
            "--delay-ms",
            "0",
            "--accept-any-status",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Run {
                file: PathBuf::from("tests.json"),
                format: OutputFormat::Json,
            })
        );
        let config = cli.config();
        assert_eq!(config.base_url, "https://api.x");
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.status_policy, StatusPolicy::AnyResponse);
    }

    #[test]
    fn export_requires_a_file() {
        assert!(Cli::try_parse_from(["api-test-creator", "export"]).is_err());
    }
}
