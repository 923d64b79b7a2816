//! Text extraction from PDF bytes.
//!
//! Embedded text is read with lopdf. When a document carries no usable
//! text layer (scanned reports), pages are rendered to PNG with
//! `pdftoppm` and read with `tesseract`. Both binaries are system
//! dependencies; their absence is reported as a dedicated error.

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info, warn};

/// Keywords that real cardiology reports contain; used to score whether an
/// extracted text layer is plausible or just stray glyphs.
const REPORT_KEYWORDS: [&str; 15] = [
    "naam", "pati", "geboort", "leeftijd", "geslacht", "gewicht", "lengte", "bsa", "watt",
    "belasting", "hart", "bloed", "conclusie", "protocol", "ritme",
];

/// Minimum plausibility score before the embedded text layer is trusted
const MIN_TEXT_SCORE: i64 = 500;

/// Error type for PDF ingestion
#[derive(Debug, Error)]
pub enum PdfIngestError {
    /// The PDF itself could not be parsed
    #[error("Kon PDF niet lezen: {0}")]
    Parse(String),

    /// Neither the text layer nor OCR produced text
    #[error(
        "PDF bevat geen doorzoekbare tekst (waarschijnlijk enkel afbeeldingen) en OCR leverde geen resultaat op."
    )]
    NoText,

    /// The OCR toolchain is not installed
    #[error(
        "OCR fallback vereist pdftoppm (poppler-utils) en tesseract als systeeminstallatie: {0}"
    )]
    OcrUnavailable(String),

    /// Rendering or OCR invocation failed
    #[error("OCR verwerking faalde: {0}")]
    Ocr(String),

    /// IO error while staging temporary files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// OCR configuration, overridable through the environment
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Render resolution for page rasterization
    pub dpi: u32,
    /// Tesseract language stack
    pub lang: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            lang: "nld+eng".to_string(),
        }
    }
}

impl OcrConfig {
    /// Read OCR_DPI / OCR_LANG from the environment, keeping defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dpi: std::env::var("OCR_DPI")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.dpi),
            lang: std::env::var("OCR_LANG").unwrap_or(defaults.lang),
        }
    }
}

/// Collapse consecutive whitespace to single spaces for easier regex parsing
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plausibility score for an extracted text layer
fn text_score(text: &str) -> i64 {
    let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count() as i64;
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count() as i64;
    let lowered = text.to_lowercase();
    let keyword_hits: i64 = REPORT_KEYWORDS
        .iter()
        .map(|keyword| lowered.matches(keyword).count() as i64)
        .sum();
    let ascii_ratio = letters as f64 / text.len().max(1) as f64;

    letters * 4 + digits * 2 + (ascii_ratio * 1000.0) as i64 + keyword_hits * 300
}

/// Return concatenated text from a PDF, using OCR when necessary
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, PdfIngestError> {
    let embedded = extract_embedded_text(pdf_bytes)?;
    let normalized = normalize_whitespace(&embedded);
    let score = text_score(&normalized);

    if !normalized.is_empty() && score >= MIN_TEXT_SCORE {
        debug!("Using embedded PDF text layer (score={})", score);
        return Ok(normalized);
    }

    info!(
        "PDF text layer unusable (score={}), falling back to OCR",
        score
    );
    let ocr_text = extract_text_via_ocr(pdf_bytes, &OcrConfig::from_env())?;
    let normalized = normalize_whitespace(&ocr_text);
    if normalized.is_empty() {
        return Err(PdfIngestError::NoText);
    }
    Ok(normalized)
}

/// Extract the embedded text layer with lopdf
fn extract_embedded_text(pdf_bytes: &[u8]) -> Result<String, PdfIngestError> {
    let document =
        lopdf::Document::load_mem(pdf_bytes).map_err(|e| PdfIngestError::Parse(e.to_string()))?;

    let mut pages_text: Vec<String> = Vec::new();
    for (page_number, _) in document.get_pages() {
        // A page without extractable text is not fatal; scanned pages
        // regularly trip the content parser.
        match document.extract_text(&[page_number]) {
            Ok(text) => pages_text.push(text),
            Err(e) => warn!("Could not extract text from page {}: {}", page_number, e),
        }
    }

    Ok(pages_text.join("\n"))
}

/// Return true when both OCR binaries can be invoked
pub fn ocr_available() -> bool {
    let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
    let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

    if !pdftoppm {
        debug!("pdftoppm not found - install poppler-utils for OCR support");
    }
    if !tesseract {
        debug!("tesseract not found - install tesseract-ocr for OCR support");
    }

    pdftoppm && tesseract
}

/// Rasterize the PDF and OCR every page
fn extract_text_via_ocr(pdf_bytes: &[u8], config: &OcrConfig) -> Result<String, PdfIngestError> {
    if !ocr_available() {
        return Err(PdfIngestError::OcrUnavailable(
            "pdftoppm of tesseract niet gevonden in PATH".to_string(),
        ));
    }

    let temp_dir = tempfile::tempdir()?;
    let pdf_path = temp_dir.path().join("input.pdf");
    std::fs::write(&pdf_path, pdf_bytes)?;

    let output_prefix = temp_dir.path().join("page");
    info!("Rendering PDF pages for OCR (dpi={}, lang={})", config.dpi, config.lang);

    let render = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(config.dpi.to_string())
        .arg(&pdf_path)
        .arg(&output_prefix)
        .output()
        .map_err(|e| PdfIngestError::Ocr(format!("pdftoppm kon niet gestart worden: {}", e)))?;

    if !render.status.success() {
        let stderr = String::from_utf8_lossy(&render.stderr);
        return Err(PdfIngestError::Ocr(format!("pdftoppm faalde: {}", stderr)));
    }

    let mut image_paths: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    image_paths.sort();

    if image_paths.is_empty() {
        return Err(PdfIngestError::Ocr("pdftoppm produceerde geen afbeeldingen".to_string()));
    }

    let total_pages = image_paths.len();
    info!("Rendered {} pages, starting OCR", total_pages);

    let mut page_texts: Vec<String> = Vec::new();
    for (index, image_path) in image_paths.iter().enumerate() {
        let text = ocr_single_page(image_path, &config.lang, index + 1)?;
        if !text.trim().is_empty() {
            page_texts.push(text);
        }
    }

    if page_texts.is_empty() {
        return Err(PdfIngestError::NoText);
    }
    Ok(page_texts.join("\n"))
}

/// OCR one rendered page image
fn ocr_single_page(image_path: &Path, lang: &str, page_number: usize) -> Result<String, PdfIngestError> {
    let output = Command::new("tesseract")
        .arg(image_path)
        .arg("stdout")
        .arg("-l")
        .arg(lang)
        .arg("--psm")
        .arg("1") // automatic page segmentation with orientation detection
        .output()
        .map_err(|e| {
            PdfIngestError::Ocr(format!(
                "tesseract kon niet gestart worden voor pagina {}: {}",
                page_number, e
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!("Tesseract warning on page {}: {}", page_number, stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let input = "Naam:   Jan \t Janssens\n\n  Leeftijd :  63  \n";
        assert_eq!(normalize_whitespace(input), "Naam: Jan Janssens\nLeeftijd : 63");
    }

    #[test]
    fn test_text_score_prefers_real_reports() {
        let report = "Naam: Jan Janssens\nLeeftijd: 63 jaar\nConclusie: normale fietsproef tot 200 Watt\nMaximale hartslag 160/min";
        let garbage = "¤¤ \u{fffd}\u{fffd} 12 ·· ‡‡";

        assert!(text_score(report) >= MIN_TEXT_SCORE);
        assert!(text_score(garbage) < MIN_TEXT_SCORE);
    }

    #[test]
    fn test_extract_rejects_invalid_pdf() {
        let result = extract_text(b"not a pdf at all");
        assert!(matches!(result, Err(PdfIngestError::Parse(_))));
    }

    #[test]
    fn test_ocr_config_defaults() {
        let config = OcrConfig::default();
        assert_eq!(config.dpi, 300);
        assert_eq!(config.lang, "nld+eng");
    }
}
