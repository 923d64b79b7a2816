//! Parse ECG PDF reports into structured measurements.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::ecg::EcgMeasurements;
use crate::entities::patient::PatientContext;

use super::extract::{extract_text, PdfIngestError};
use super::patient::extract_patient_fields;

/// Parsed ECG document: patient, measurements and non-fatal warnings
#[derive(Debug, Clone)]
pub struct EcgParseOutcome {
    pub patient: PatientContext,
    pub measurements: EcgMeasurements,
    pub warnings: Vec<String>,
}

static RECORDED_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)datum[:\-]\s*(\d{1,2}[-/ ]\d{1,2}[-/ ]\d{2,4})").expect("valid regex")
});
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}[./-]\d{2}[./-]\d{4}\s+\d{2}:\d{2}:\d{2})").expect("valid regex")
});
static RHYTHM_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ritme[:\-]\s*(.+?)\s{2,}").expect("valid regex"));
static RHYTHM_SINUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(sinusritme[^\n]*)").expect("valid regex"));
static DEVICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)toestel[:\-]\s*(.+?)\s{2,}").expect("valid regex"));

static VENT_RATE: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)vent(?:riculaire)?\s+frequentie\s*(?:[:=\-]|is)?\s*(\S+)",
        r"(?i)\bhf\b\s*(?:[:=\-]|is)?\s*(\S+)",
    ])
});
static PR_INTERVAL: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bpr\b(?:\s*interval)?\s*(?:[:=\-]|is)?\s*(\S+)"]));
static QRS_DURATION: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bqrs\b(?:\s*duur)?\s*(?:[:=\-]|is)?\s*(\S+)"]));
static QT_INTERVAL: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bqt\b\s*(?:[:=\-]|is)?\s*(\S+)"]));
static QTC_INTERVAL: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bqtc[a-z]*\b\s*(?:[:=\-]|is)?\s*(\S+)"]));
static P_AXIS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bp[-\s]?(?:axis|as)\b\s*(?:[:=\-]|is)?\s*(\S+)"]));
static QRS_AXIS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bqrs[-\s]?(?:axis|as)\b\s*(?:[:=\-]|is)?\s*(\S+)"]));
static T_AXIS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"(?i)\bt[-\s]?(?:axis|as)\b\s*(?:[:=\-]|is)?\s*(\S+)"]));
static P_DURATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bp\s*-?\s*duur\b\s*(?:[:=\-]|is)?\s*(\S+)",
        r"(?i)\bp-?wave(?:\s*duration)?\b\s*(?:[:=\-]|is)?\s*(\S+)",
    ])
});
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("valid regex"));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().trim().to_string())
}

fn capture_number(patterns: &[Regex], text: &str) -> Option<f64> {
    for pattern in patterns {
        if let Some(raw) = capture(pattern, text) {
            let normalized = raw.replace(',', ".");
            if let Some(matched) = NUMBER.find(&normalized) {
                if let Ok(value) = matched.as_str().parse::<f64>() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Text on the same line after a label, or the next non-empty line
fn line_after_label(text: &str, label: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?i){}\s*[:\-]?\s*([^\n]+)", regex::escape(label)))
        .expect("valid regex");
    if let Some(candidate) = capture(&pattern, text) {
        if !candidate.is_empty() {
            return Some(candidate);
        }
    }

    let lines: Vec<&str> = text.lines().collect();
    let needle = label.to_lowercase();
    for (index, line) in lines.iter().enumerate() {
        if line.to_lowercase().contains(&needle) {
            if let Some(next) = lines.get(index + 1) {
                let candidate = next.trim();
                if !candidate.is_empty() {
                    return Some(candidate.to_string());
                }
            }
        }
    }
    None
}

/// Parse an ECG report from already-extracted text
pub fn parse_ecg_text(text: &str) -> EcgParseOutcome {
    let mut warnings: Vec<String> = Vec::new();

    let patient = extract_patient_fields(text).into_patient();

    let recorded_at = capture(&RECORDED_AT, text)
        .or_else(|| TIMESTAMP.find(text).map(|m| m.as_str().to_string()));

    let rhythm_summary = capture(&RHYTHM_LABEL, text).or_else(|| capture(&RHYTHM_SINUS, text));

    let auto_report_text = line_after_label(text, "Opmerking")
        .or_else(|| line_after_label(text, "Conclusie"))
        .or_else(|| line_after_label(text, "Protocol"));

    let acquisition_device = capture(&DEVICE, text)
        .or_else(|| line_after_label(text, "Apparaat-ID"))
        .and_then(|device| device.split_whitespace().next().map(str::to_string));

    let measurements = EcgMeasurements {
        patient: patient.clone(),
        recorded_at,
        vent_rate: capture_number(&VENT_RATE, text),
        pr_interval_ms: capture_number(&PR_INTERVAL, text),
        qrs_duration_ms: capture_number(&QRS_DURATION, text),
        qt_interval_ms: capture_number(&QT_INTERVAL, text),
        qtc_interval_ms: capture_number(&QTC_INTERVAL, text),
        p_duration_ms: capture_number(&P_DURATION, text),
        p_axis_deg: capture_number(&P_AXIS, text),
        qrs_axis_deg: capture_number(&QRS_AXIS, text),
        t_axis_deg: capture_number(&T_AXIS, text),
        rhythm_summary,
        auto_report_text,
        acquisition_device,
    };

    let mut missing: Vec<&str> = Vec::new();
    if measurements.pr_interval_ms.is_none() {
        missing.push("PR");
    }
    if measurements.qrs_duration_ms.is_none() {
        missing.push("QRS");
    }
    if measurements.qt_interval_ms.is_none() {
        missing.push("QT");
    }
    if !missing.is_empty() {
        warnings.push(format!(
            "Kon niet alle intervalwaarden uitlezen: {}",
            missing.join(", ")
        ));
    }

    EcgParseOutcome {
        patient,
        measurements,
        warnings,
    }
}

/// Parse an ECG report from PDF bytes, extracting text (with OCR fallback) first
pub fn parse_ecg_pdf(pdf_bytes: &[u8]) -> Result<EcgParseOutcome, PdfIngestError> {
    let text = extract_text(pdf_bytes)?;
    Ok(parse_ecg_text(&text))
}
