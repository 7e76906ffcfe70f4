//! Error types emitted by the caddy CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use caddy_core::{RecommendError, ValidationError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the caddy CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the offending option.
        field: &'static str,
        /// Environment variable that supplies the option.
        env: &'static str,
    },
    /// The merged engine settings describe an unusable scoring curve.
    #[error("invalid engine configuration: {0}")]
    InvalidEngineConfig(#[source] ValidationError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the offending option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the offending option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the offending option.
        field: &'static str,
        /// Path that triggered the error.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Opening the shot request file failed.
    #[error("failed to open shot request at {path:?}: {source}")]
    OpenShotRequest {
        /// Path that triggered the error.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Shot request JSON could not be decoded.
    #[error("failed to parse shot request JSON at {path:?}: {source}")]
    ParseShotRequest {
        /// Path that triggered the error.
        path: Utf8PathBuf,
        #[source]
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The engine rejected the shot request.
    #[error("shot request in {path:?} could not be scored: {source}")]
    Recommend {
        /// Path that triggered the error.
        path: Utf8PathBuf,
        #[source]
        /// Underlying engine error.
        source: RecommendError,
    },
    /// Serialising the recommendation failed.
    #[error("failed to serialise recommendation: {0}")]
    SerialiseRecommendation(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
