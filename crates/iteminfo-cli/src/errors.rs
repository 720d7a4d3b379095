//! Error types for the CLI runtime.

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use thiserror::Error;

use iteminfo_catalog::CatalogError;
use iteminfo_chain::{HandlerWiringError, RequestError};

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to load catalogue: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to wire request handlers: {0}")]
    Wiring(#[from] HandlerWiringError),
    #[error("invalid identifier at position {position}: {source}")]
    Request {
        position: usize,
        source: RequestError,
    },
    #[error("identifier {0:?} is not valid UTF-8")]
    NonUtf8Identifier(OsString),
    #[error("failed to write reply: {0}")]
    WriteReply(io::Error),
}
