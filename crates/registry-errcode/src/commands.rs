//! Subcommand implementations
//!
//! Each command returns its stdout text so `main` stays a thin dispatcher.

use anyhow::{Context, Result};
use registry_core::{Error, ErrorCode, Errors};
use registry_storage::{Digest, FsLayer};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::OutputConfig;

#[derive(Serialize)]
struct CodeEntry {
    code: ErrorCode,
    message: &'static str,
}

/// List every error code with its message
pub fn list(json: bool, output: &OutputConfig) -> Result<String> {
    if json {
        let entries: Vec<CodeEntry> = ErrorCode::ALL
            .iter()
            .map(|code| CodeEntry {
                code: *code,
                message: code.message(),
            })
            .collect();
        return to_json(&entries, output);
    }

    let width = ErrorCode::ALL
        .iter()
        .map(|code| code.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for code in ErrorCode::ALL {
        out.push_str(&format!("{:<width$}  {}\n", code.as_str(), code.message()));
    }
    Ok(out)
}

/// Resolve a wire string to its code
pub fn parse(input: &str) -> String {
    let code = ErrorCode::parse(input);
    if code == ErrorCode::Unknown && input != ErrorCode::Unknown.as_str() {
        debug!("Unrecognized error code string: {}", input);
    }
    format!("{}: {}\n", code.as_str(), code.message())
}

/// Describe an `{"errors": [...]}` envelope the way it appears in logs
pub fn describe(envelope: &str) -> Result<String> {
    let errors: Errors =
        serde_json::from_str(envelope).context("Failed to parse error envelope")?;

    let mut out = errors.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Options for [`render`]
#[derive(Debug, Default)]
pub struct RenderOptions {
    pub message: Option<String>,
    pub detail: Option<String>,
    pub layer: Option<String>,
}

/// Build a single-error envelope
pub fn render(code: &str, options: RenderOptions, output: &OutputConfig) -> Result<String> {
    let parsed = ErrorCode::parse(code);
    if parsed == ErrorCode::Unknown && code != ErrorCode::Unknown.as_str() {
        warn!("Unrecognized error code {}, using {}", code, parsed);
    }

    let mut err = match options.message {
        Some(message) => Error::with_message(parsed, message),
        None => Error::new(parsed),
    };

    if let Some(layer) = options.layer {
        let digest = Digest::parse(&layer)
            .with_context(|| format!("Invalid layer digest: {}", layer))?;
        err = err.with_detail(registry_core::DetailUnknownLayer {
            unknown: FsLayer::new(digest),
        });
    } else if let Some(detail) = options.detail {
        let detail: Value = serde_json::from_str(&detail)
            .with_context(|| format!("Detail is not valid JSON: {}", detail))?;
        err = err.with_detail(detail);
    }

    to_json(&Errors::from(err), output)
}

fn to_json<T: Serialize>(value: &T, output: &OutputConfig) -> Result<String> {
    let mut out = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}
