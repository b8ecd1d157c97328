use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: `PdfTextExtractor`
    /// (digital extraction with OCR fallback).
    pub extractor: Arc<dyn TextExtractor>,
}
