//! PDF ingestion: embedded-text extraction with OCR fallback and the
//! modality parsers that turn report PDFs into structured measurements.

mod extract;
mod patient;

pub mod ecg;
pub mod fietstest;

pub use extract::{extract_text, normalize_whitespace, ocr_available, OcrConfig, PdfIngestError};
pub use patient::{extract_patient_fields, PatientFields};
