//! CLI module for pascalite
//!
//! This module provides the command-line interface to the syntax frontend.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the statement tree, then any diagnostics
//! - `check <file>` - Report diagnostics only
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::frontend::SourceKind;
use crate::frontend::config::{ParserConfig, WhenTermination};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax frontend for the pascalite dialect
#[derive(Parser, Debug)]
#[command(name = "pascalite")]
#[command(version = VERSION)]
#[command(about = "Lex, parse and check pascalite sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Close WHEN chains only at OTHERWISE; a bare END after a clause is a parse error
    #[arg(long, global = true)]
    pub legacy_when: bool,

    /// Maximum nesting of statements and parenthesized expressions
    #[arg(long, global = true, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Render diagnostics without ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the statement tree, then any diagnostics
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Treat the file as a single statement instead of a program
        #[arg(long)]
        fragment: bool,
    },

    /// Report diagnostics only
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Treat the file as a single statement instead of a program
        #[arg(long)]
        fragment: bool,
    },
}

impl Cli {
    /// Parser configuration selected by the global flags.
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new();
        if self.legacy_when {
            config = config.with_when_termination(WhenTermination::Legacy);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        config
    }

    fn options(&self, fragment: bool) -> commands::ParseOptions {
        commands::ParseOptions {
            config: self.parser_config(),
            kind: if fragment {
                SourceKind::Fragment
            } else {
                SourceKind::Program
            },
            color: !self.no_color,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    tracing::debug!(command = ?cli.command, "executing");
    match &cli.command {
        Command::Lex { file } => commands::lex_file(&file.to_string_lossy(), !cli.no_color),
        Command::Parse { file, fragment } => commands::parse_file(&file.to_string_lossy(), &cli.options(*fragment)),
        Command::Check { file, fragment } => commands::check_file(&file.to_string_lossy(), &cli.options(*fragment)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["pascalite", "lex", "demo.pas"]).unwrap();
        assert!(matches!(cli.command, Command::Lex { .. }));
    }

    #[test]
    fn test_cli_parse_fragment() {
        let cli = Cli::try_parse_from(["pascalite", "parse", "when.pas", "--fragment"]).unwrap();
        if let Command::Parse { fragment, .. } = cli.command {
            assert!(fragment);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pascalite", "check", "demo.pas", "--legacy-when", "--max-depth", "16"]).unwrap();
        let config = cli.parser_config();
        assert_eq!(config.when_termination, WhenTermination::Legacy);
        assert_eq!(config.max_depth, 16);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pascalite", "check", "demo.pas"]).unwrap();
        assert!(!cli.no_color);
        let config = cli.parser_config();
        assert_eq!(config.when_termination, WhenTermination::EndTerminates);
        assert_eq!(config.max_depth, ParserConfig::default().max_depth);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pascalite"]).is_err());
    }
}
