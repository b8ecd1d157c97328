//! PDF text extraction with OCR fallback.
//!
//! Digital extraction (pdf-extract) runs first; when it errors out or yields
//! too few words the document is treated as scanned and goes through the
//! pdftoppm + tesseract pipeline in `ocr`. The core parsing/scoring code
//! consumes whatever text comes out and never re-validates it.

pub mod ocr;
pub mod preprocess;

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::ocr::{extract_with_ocr, OcrConfig};

/// Which strategy produced the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    Digital,
    Ocr,
}

#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub text: String,
    pub method: ExtractionMethod,
}

/// The extraction backend trait. Implement this to swap strategies without
/// touching handler code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf_path: &Path) -> Result<ExtractionOutcome, AppError>;
}

/// Default extractor: digital text first, OCR for scanned documents.
pub struct PdfTextExtractor {
    ocr: OcrConfig,
    /// Word-count gate: digital output at or below this is considered a
    /// scanned document.
    min_digital_words: usize,
}

impl PdfTextExtractor {
    pub fn new(ocr: OcrConfig, min_digital_words: usize) -> Self {
        Self {
            ocr,
            min_digital_words,
        }
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf_path: &Path) -> Result<ExtractionOutcome, AppError> {
        let path = pdf_path.to_path_buf();
        let digital =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path)).await;

        match digital {
            Ok(Ok(text)) if count_words(&text) > self.min_digital_words => {
                tracing::info!("digital extraction succeeded ({} words)", count_words(&text));
                return Ok(ExtractionOutcome {
                    text,
                    method: ExtractionMethod::Digital,
                });
            }
            Ok(Ok(text)) => tracing::warn!(
                "digital extraction yielded only {} words, falling back to OCR",
                count_words(&text)
            ),
            Ok(Err(e)) => tracing::warn!("digital extraction failed: {e}, falling back to OCR"),
            // pdf-extract can panic on malformed documents; a crashed
            // blocking task is treated the same as an extraction error
            Err(e) => tracing::warn!("digital extraction panicked: {e}, falling back to OCR"),
        }

        let path = pdf_path.to_path_buf();
        let config = self.ocr.clone();
        let text = tokio::task::spawn_blocking(move || extract_with_ocr(&path, &config))
            .await
            .map_err(|e| AppError::Ocr(format!("OCR task crashed: {e}")))?
            .map_err(|e| AppError::Ocr(format!("{e:#}")))?;

        if text.trim().is_empty() {
            return Err(AppError::Extraction(
                "OCR completed but no text was extracted".to_string(),
            ));
        }

        Ok(ExtractionOutcome {
            text,
            method: ExtractionMethod::Ocr,
        })
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n  "), 0);
        assert_eq!(count_words("one two\nthree"), 3);
    }

    #[test]
    fn test_extraction_method_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ExtractionMethod::Digital).unwrap(),
            "\"digital\""
        );
        assert_eq!(
            serde_json::to_string(&ExtractionMethod::Ocr).unwrap(),
            "\"ocr\""
        );
    }

    #[tokio::test]
    async fn test_missing_file_falls_through_to_ocr_error() {
        // Digital extraction fails on a nonexistent path; without OCR tools
        // (or with them, on a missing file) the extractor must return an
        // error rather than panic.
        let extractor = PdfTextExtractor::new(OcrConfig::default(), 50);
        let result = extractor
            .extract(Path::new("/nonexistent/never-here.pdf"))
            .await;
        assert!(result.is_err());
    }
}
