//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::frontend::config::ParserConfig;
use crate::frontend::report::Reporter;
use crate::frontend::{self, FrontendError, SourceKind, lexer};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while lexing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Options shared by `parse` and `check`.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub config: ParserConfig,
    pub kind: SourceKind,
    pub color: bool,
}

/// Read a source file, rejecting files above [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Turn fatal frontend errors into a CLI error carrying the rendered reports.
fn fatal(reporter: &Reporter, error: &FrontendError) -> CliError {
    let msg = reporter.render_all(error.errors());
    CliError::failure(msg.trim_end())
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str, color: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = match lexer::lex(&source) {
        Ok(toks) => toks,
        Err(errs) => {
            let reporter = Reporter::new(file_path, &source, color);
            return Err(fatal(&reporter, &FrontendError::Lex(errs)));
        }
    };

    for tok in &tokens {
        println!("{:>6}..{:<6} {}", tok.span.start, tok.span.end, tok.kind);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the statement tree, then any diagnostics.
pub fn parse_file(file_path: &str, options: &ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let reporter = Reporter::new(file_path, &source, options.color);

    let parsed = frontend::parse_source(&source, options.kind, options.config.clone())
        .map_err(|e| fatal(&reporter, &e))?;

    println!("{}", parsed.dump());

    let diagnostics = parsed.diagnostics();
    if diagnostics.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    eprint!("{}", reporter.render_all(diagnostics));
    Ok(ExitCode::FAILURE)
}

/// Check a file for syntax problems.
pub fn check_file(file_path: &str, options: &ParseOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let reporter = Reporter::new(file_path, &source, options.color);

    let parsed = frontend::parse_source(&source, options.kind, options.config.clone())
        .map_err(|e| fatal(&reporter, &e))?;

    let diagnostics = parsed.diagnostics();
    if diagnostics.is_empty() {
        println!("✓ Syntax check passed!");
        return Ok(ExitCode::SUCCESS);
    }
    eprint!("{}", reporter.render_all(diagnostics));
    eprintln!("✗ {} syntax problem(s) in {}", diagnostics.len(), file_path);
    Ok(ExitCode::FAILURE)
}
