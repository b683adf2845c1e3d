//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Checkview - terminal client for checklist assessment results
///
/// Fetch a completed assessment response, print its summary statistics and
/// per-area details, optionally download the PDF report, and request a free
/// training access code.
///
/// Examples:
///   checkview abc123
///   checkview abc123 --api-url https://checklist.example.com
///   checkview abc123 --export --output-dir reports
///   checkview abc123 --request-access --email me@example.com
///   checkview --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Identifier of the assessment response to display
    #[arg(value_name = "RESPONSE_ID", required_unless_present = "init_config")]
    pub response_id: Option<String>,

    /// Base URL of the assessment service
    #[arg(
        long,
        default_value = "http://localhost:3000",
        env = "CHECKVIEW_API_URL",
        value_name = "URL"
    )]
    pub api_url: String,

    /// Path to configuration file
    ///
    /// If not specified, looks for .checkview.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Download the PDF report after rendering the summary
    #[arg(short, long)]
    pub export: bool,

    /// Directory where exported reports are saved
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Submit an access-code request after rendering the summary
    #[arg(long)]
    pub request_access: bool,

    /// Email address for the access-code request
    ///
    /// Falls back to the CHECKVIEW_EMAIL environment variable.
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Optional message to attach to the access-code request
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Output format for the summary (text, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip the engagement reminder entirely
    #[arg(long)]
    pub no_reminder: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .checkview.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sectioned text (default)
    #[default]
    Text,
    /// JSON document with the derived summary
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the response identifier, empty if not set (validated first).
    pub fn response_id(&self) -> &str {
        self.response_id.as_deref().unwrap_or("")
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("API URL must start with 'http://' or 'https://'".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err("Timeout must be at least 1 second".to_string());
            }
        }

        if self.message.is_some() && !self.request_access {
            return Err("--message requires --request-access".to_string());
        }

        if self.output_dir.is_some() && !self.export {
            return Err("--output-dir requires --export".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            response_id: Some("abc123".to_string()),
            api_url: "http://localhost:3000".to_string(),
            config: None,
            export: false,
            output_dir: None,
            request_access: false,
            email: None,
            message: None,
            format: OutputFormat::Text,
            timeout: None,
            no_reminder: false,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_invalid_api_url() {
        let mut args = make_args();
        args.api_url = "localhost:3000".to_string();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_verbosity() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_message_requires_request_access() {
        let mut args = make_args();
        args.message = Some("please".to_string());
        assert!(args.validate().is_err());

        args.request_access = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut args = make_args();
        args.timeout = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
