//! Handing a resolution to the calling CI environment.

use crate::config::OutputFormat;
use crate::error::{NextVersionError, Result};
use crate::resolver::ResolutionResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable GitHub Actions uses for step outputs
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Output pairs in emission order
pub fn output_pairs(result: &ResolutionResult) -> [(&'static str, String); 2] {
    [
        ("next_version", result.next_tag.clone()),
        ("is_prerelease", result.is_prerelease.to_string()),
    ]
}

/// Write `result` for the caller
///
/// For [OutputFormat::Github] the pairs are appended to `github_output` when
/// given, otherwise printed as legacy `::set-output` workflow commands.
/// [OutputFormat::Plain] always prints `key=value` lines.
pub fn write_result<W: Write>(
    result: &ResolutionResult,
    format: OutputFormat,
    github_output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let pairs = output_pairs(result);

    match (format, github_output) {
        (OutputFormat::Github, Some(path)) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    NextVersionError::output(format!("cannot open {}: {}", path.display(), e))
                })?;
            for (key, value) in &pairs {
                writeln!(file, "{}={}", key, value)?;
            }
        }
        (OutputFormat::Github, None) => {
            for (key, value) in &pairs {
                writeln!(out, "::set-output name={}::{}", key, value)?;
            }
        }
        (OutputFormat::Plain, _) => {
            for (key, value) in &pairs {
                writeln!(out, "{}={}", key, value)?;
            }
        }
    }

    Ok(())
}

/// Path from `GITHUB_OUTPUT`, ignoring an empty value
pub fn github_output_path() -> Option<PathBuf> {
    std::env::var_os(GITHUB_OUTPUT_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Write `result` to stdout or the GitHub output file
pub fn emit(result: &ResolutionResult, format: OutputFormat) -> Result<()> {
    let github_output = github_output_path();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_result(result, format, github_output.as_deref(), &mut handle)
}
