//! OCR pipeline for scanned PDFs.
//!
//! Shells out to `pdftoppm` (poppler-utils) to render pages as PNGs into a
//! temp directory, preprocesses each page image, then runs the `tesseract`
//! CLI per page. Per-page failures are logged and skipped; the pipeline only
//! fails outright when rendering produces nothing or the tools are missing.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context, Result};

use crate::extract::preprocess::prepare_for_ocr;

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language code.
    pub language: String,
    /// Render resolution; higher is slower but more accurate.
    pub dpi: u32,
    /// Retry resolution when rendering at `dpi` fails.
    pub fallback_dpi: u32,
    /// Path to the tesseract binary (relies on PATH by default).
    pub tesseract_path: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            dpi: 300,
            fallback_dpi: 200,
            tesseract_path: "tesseract".to_string(),
        }
    }
}

/// Probes for the external OCR tools.
pub fn is_ocr_available(config: &OcrConfig) -> bool {
    let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
    let tesseract = Command::new(&config.tesseract_path)
        .arg("--version")
        .output()
        .is_ok();

    if !pdftoppm {
        tracing::debug!("pdftoppm not found, install poppler-utils for OCR support");
    }
    if !tesseract {
        tracing::debug!("tesseract not found, install tesseract-ocr for OCR support");
    }

    pdftoppm && tesseract
}

/// Extracts text from a scanned PDF via render → preprocess → OCR per page.
/// Page texts are joined with newlines in page order.
pub fn extract_with_ocr(pdf_path: &Path, config: &OcrConfig) -> Result<String> {
    if !is_ocr_available(config) {
        return Err(anyhow!(
            "OCR requires pdftoppm (poppler-utils) and tesseract to be installed"
        ));
    }

    let temp_dir = tempfile::tempdir().context("failed to create OCR temp directory")?;
    let prefix = temp_dir.path().join("page");

    if let Err(e) = render_pages(pdf_path, &prefix, config.dpi) {
        tracing::warn!(
            "pdftoppm at {} dpi failed ({e}), retrying at {} dpi",
            config.dpi,
            config.fallback_dpi
        );
        render_pages(pdf_path, &prefix, config.fallback_dpi)?;
    }

    let images = list_page_images(temp_dir.path())?;
    if images.is_empty() {
        return Err(anyhow!("pdftoppm produced no page images"));
    }

    tracing::info!("rendered {} pages, starting OCR", images.len());

    let mut pages = Vec::with_capacity(images.len());
    for image_path in &images {
        if let Err(e) = preprocess_in_place(image_path) {
            tracing::warn!(
                "preprocessing failed for {} ({e}), using raw render",
                image_path.display()
            );
        }
        match ocr_page(image_path, config) {
            Ok(text) => pages.push(text),
            Err(e) => tracing::warn!(
                "OCR failed for {} ({e}), skipping page",
                image_path.display()
            ),
        }
    }

    Ok(pages.join("\n"))
}

fn render_pages(pdf_path: &Path, prefix: &Path, dpi: u32) -> Result<()> {
    let output = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(dpi.to_string())
        .arg(pdf_path)
        .arg(prefix)
        .output()
        .context("failed to run pdftoppm")?;

    if !output.status.success() {
        return Err(anyhow!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

/// Rendered page images in page order. pdftoppm zero-pads page numbers, so
/// lexical path order is page order.
fn list_page_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read render dir {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "png").unwrap_or(false))
        .collect();
    images.sort();
    Ok(images)
}

fn preprocess_in_place(image_path: &Path) -> Result<()> {
    let img = image::open(image_path)
        .with_context(|| format!("failed to open {}", image_path.display()))?;
    let processed = prepare_for_ocr(&img);
    processed
        .save(image_path)
        .with_context(|| format!("failed to save {}", image_path.display()))?;
    Ok(())
}

fn ocr_page(image_path: &Path, config: &OcrConfig) -> Result<String> {
    // --psm 6: assume a single uniform block of text, which suits resumes
    let output = Command::new(&config.tesseract_path)
        .arg(image_path)
        .arg("stdout")
        .arg("-l")
        .arg(&config.language)
        .arg("--psm")
        .arg("6")
        .output()
        .with_context(|| format!("failed to run {}", config.tesseract_path))?;

    if !output.status.success() {
        return Err(anyhow!(
            "tesseract exited with {}: {}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.language, "eng");
        assert_eq!(config.dpi, 300);
        assert_eq!(config.fallback_dpi, 200);
        assert_eq!(config.tesseract_path, "tesseract");
    }

    #[test]
    fn test_list_page_images_sorted_png_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-2.png", "page-1.png", "page-3.png", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let images = list_page_images(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["page-1.png", "page-2.png", "page-3.png"]);
    }

    #[test]
    fn test_list_page_images_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_page_images(dir.path()).unwrap().is_empty());
    }
}
