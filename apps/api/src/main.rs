mod config;
mod errors;
mod extract;
mod parser;
mod routes;
mod scoring;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::{ocr::OcrConfig, PdfTextExtractor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rescore API v{}", env!("CARGO_PKG_VERSION"));

    // Scratch dir for uploaded and derived files
    std::fs::create_dir_all(&config.upload_dir)?;
    info!("Upload scratch dir: {}", config.upload_dir.display());

    // Extraction backend: digital text first, OCR fallback for scanned PDFs
    let ocr = OcrConfig {
        language: config.ocr_lang.clone(),
        dpi: config.ocr_dpi,
        fallback_dpi: 200,
        tesseract_path: config.tesseract_path.clone(),
    };
    let extractor = Arc::new(PdfTextExtractor::new(ocr, config.min_digital_words));
    info!(
        "Extractor initialized (word gate: {}, OCR dpi: {})",
        config.min_digital_words, config.ocr_dpi
    );

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
