use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts without a `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Scratch directory for uploaded PDFs, ground-truth files, and derived
    /// extracted-text files. Created on demand, never cleaned up by the service.
    pub upload_dir: PathBuf,
    /// Digital extraction must yield more than this many words, otherwise the
    /// document is treated as scanned and the OCR path runs.
    pub min_digital_words: usize,
    pub ocr_lang: String,
    pub ocr_dpi: u32,
    pub tesseract_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "temp_uploads")),
            min_digital_words: env_or("MIN_DIGITAL_WORDS", "50")
                .parse::<usize>()
                .context("MIN_DIGITAL_WORDS must be a non-negative integer")?,
            ocr_lang: env_or("OCR_LANG", "eng"),
            ocr_dpi: env_or("OCR_DPI", "300")
                .parse::<u32>()
                .context("OCR_DPI must be a positive integer")?,
            tesseract_path: env_or("TESSERACT_PATH", "tesseract"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_to_default() {
        assert_eq!(env_or("RESCORE_TEST_UNSET_VAR_XYZ", "fallback"), "fallback");
    }
}
