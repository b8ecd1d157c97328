use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ExtractionMethod;
use crate::parser::formatter::format_sections;
use crate::parser::segmenter::segment;
use crate::scoring::accuracy::{score_accuracy, AccuracyReport};
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    /// Segmented and reformatted document text, ready for display or download.
    pub extracted_text: String,
    pub extraction_method: ExtractionMethod,
    /// Suggested filename for the downloadable extracted text.
    pub download_filename: String,
    /// Present only when a ground-truth file was uploaded.
    pub accuracy: Option<AccuracyReport>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub extracted: String,
    pub reference: String,
}

/// POST /api/v1/parse
///
/// Multipart form: `resume` (PDF, required) and `ground_truth` (plain text,
/// optional). Extracts, reformats, persists the artifacts to the scratch
/// dir, and scores against the ground truth when one is supplied.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut ground_truth: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some((filename, data));
            }
            "ground_truth" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read ground truth: {e}"))
                })?;
                ground_truth = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let (filename, data) =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded resume is empty".to_string()));
    }

    let scratch = storage::create_scratch_dir(&state.config.upload_dir)?;
    let pdf_path = storage::save_file(&scratch, &filename, &data)?;

    let outcome = state.extractor.extract(&pdf_path).await?;
    let extracted_text = reformat(&outcome.text);

    let download_filename = storage::extracted_filename(&filename);
    storage::save_file(&scratch, &download_filename, extracted_text.as_bytes())?;

    let accuracy = match &ground_truth {
        Some(truth) => {
            storage::save_file(&scratch, "ground_truth.txt", truth.as_bytes())?;
            Some(score_accuracy(&extracted_text, truth))
        }
        None => None,
    };

    tracing::info!(
        "parsed {} via {:?} ({} chars formatted)",
        filename,
        outcome.method,
        extracted_text.len()
    );

    Ok(Json(ParseResponse {
        extracted_text,
        extraction_method: outcome.method,
        download_filename,
        accuracy,
    }))
}

/// POST /api/v1/score
///
/// Re-scores arbitrary text pairs without re-uploading a document.
pub async fn handle_score(Json(req): Json<ScoreRequest>) -> Json<AccuracyReport> {
    Json(score_accuracy(&req.extracted, &req.reference))
}

/// Segments a raw extraction blob and renders it for presentation.
fn reformat(raw_text: &str) -> String {
    format_sections(&segment(raw_text.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_end_to_end() {
        let raw = "John Doe\n\nContact:\njohn@example.com\n555-123-4567\n\nSkills\nPython\nSQL\n";
        let out = reformat(raw);

        assert!(out.starts_with("John Doe"));
        assert!(out.contains("Email: john@example.com"));
        assert!(out.contains("Phone: 555-123-4567"));
        assert!(out.contains("• Python"));
    }

    #[test]
    fn test_reformat_headerless_blob() {
        let out = reformat("just one line\nand another");
        assert_eq!(out, "just one line\n\nand another");
    }

    #[tokio::test]
    async fn test_handle_score_returns_report() {
        let Json(report) = handle_score(Json(ScoreRequest {
            extracted: "Hello, World.".to_string(),
            reference: "hello world".to_string(),
        }))
        .await;

        assert_eq!(report.accuracy, 100.0);
        assert_eq!(report.distance, 0);
    }

    #[tokio::test]
    async fn test_handle_score_empty_reference() {
        let Json(report) = handle_score(Json(ScoreRequest {
            extracted: "text".to_string(),
            reference: "".to_string(),
        }))
        .await;

        assert_eq!(report.accuracy, 0.0);
    }

    #[test]
    fn test_parse_response_serializes_without_accuracy() {
        let response = ParseResponse {
            extracted_text: "TEXT".to_string(),
            extraction_method: ExtractionMethod::Digital,
            download_filename: "cv_extracted.txt".to_string(),
            accuracy: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["extraction_method"], "digital");
        assert!(json["accuracy"].is_null());
    }
}
