//! Parse fietsproef PDF reports into structured measurements.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::fietstest::FietstestMeasurements;
use crate::entities::patient::PatientContext;

use super::extract::{extract_text, PdfIngestError};
use super::patient::extract_patient_fields;

/// Parsed fietstest document: patient, measurements and non-fatal warnings
#[derive(Debug, Clone)]
pub struct FietstestParseOutcome {
    pub patient: PatientContext,
    pub measurements: FietstestMeasurements,
    pub warnings: Vec<String>,
}

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d+(?:[\.,]\d+)?").expect("valid regex"));
static TIME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[:.](\d{2})").expect("valid regex"));
static TIME_TOKEN_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}[:.]\d{2}$").expect("valid regex"));

static START_WATT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)start(?:\s*belasting)?(?:\s*watt)?(?:\s*\(w(?:att)?\))?\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)start\s*load\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
    ])
});
static INCREMENT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)opdrij(?:ving|fing|ven)\s*(?:\([^)]*\))?\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)stapgrootte\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
    ])
});
static MAX_WATT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)max(?:imale)?\s*(?:belasting|vermogen|watt)\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)piek\s*watt\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)max[.\s]*belasting[^0-9]*([0-9][0-9\.,]*)\s*w",
    ])
});
static DURATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)duur(?:\s*(?:bij|op))?\s*(?:max(?:imale)?\s*)?(?:belasting|vermogen)?\s*(?:[:=\-]\s*)?([0-9][0-9\.,:]*)",
        r"(?i)tijd\s*aan\s*top\s*(?:[:=\-]\s*)?([0-9][0-9\.,:]*)",
        r"(?i)inspanning\s*([0-9]{1,2}[:.][0-9]{2})",
    ])
});
static MAX_HR: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)max(?:imale)?\s*(?:hartslag|hr|hartfrequentie)\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)piek\s*hr\s*(?:[:=\-]\s*)?([0-9][0-9\.,]*)",
        r"(?i)max[.\s]*hf[^0-9]*([0-9][0-9\.,]*)",
    ])
});

static BP_EVOLUTIE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bloeddruk(?:evolutie)?[:\-]\s*([^\n]+)").expect("valid regex"));
static RITME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ritme[:\-]\s*([^\n]+)").expect("valid regex"));
static EFFORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)inspanning[:\-]\s*([^\n]+)").expect("valid regex"));
static STOP_CRITERIUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)criterium[:\-]\s*([^\n]+)").expect("valid regex"));
static ECG_CHANGES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ecg(?:\s+verloop)?[:\-]\s*([^\n]+)").expect("valid regex"));
static CONCLUSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)conclusie[:\-]\s*([^\n]+)").expect("valid regex"));

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

fn to_float(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    NUMBER
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse "mm:ss" into seconds, falling back to a plain number
fn to_seconds(raw: &str) -> Option<f64> {
    if let Some(captures) = TIME_TOKEN.captures(raw) {
        let minutes: f64 = captures[1].parse().ok()?;
        let seconds: f64 = captures[2].parse().ok()?;
        return Some(minutes * 60.0 + seconds);
    }
    to_float(raw)
}

/// Workload table rows: "(mm:ss) opwarmen/werken ... <watt>"
fn extract_workloads(text: &str) -> Vec<(&'static str, f64)> {
    let mut series: Vec<(&'static str, f64)> = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        let label = if lower.starts_with("opwarmen") {
            "opwarmen"
        } else if lower.starts_with("werken") {
            "werken"
        } else {
            continue;
        };
        let Some(watt) = line_watt_value(line) else { continue };
        if series.contains(&(label, watt)) {
            continue;
        }
        series.push((label, watt));
    }
    series
}

/// The wattage is the first numeric token after the elapsed-time token
fn line_watt_value(line: &str) -> Option<f64> {
    let sanitized = line.replace('-', " ");
    let mut seen_time = false;
    for token in sanitized.split_whitespace() {
        let stripped = token.trim_matches(|c| c == '(' || c == ')');
        if TIME_TOKEN_FULL.is_match(stripped) {
            seen_time = true;
            continue;
        }
        if !seen_time {
            continue;
        }
        let cleaned: String = stripped
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect();
        return to_float(&cleaned);
    }
    None
}

fn first_watt(workloads: &[(&'static str, f64)], prefer: &str) -> Option<f64> {
    workloads
        .iter()
        .find(|(label, _)| *label == prefer)
        .map(|(_, value)| *value)
}

/// Estimate the increment from the first rising step in the work phase
fn estimate_increment(workloads: &[(&'static str, f64)]) -> Option<f64> {
    let work_values: Vec<f64> = workloads
        .iter()
        .filter(|(label, _)| *label == "werken")
        .map(|(_, value)| *value)
        .collect();
    work_values
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .find(|diff| *diff > 0.0)
}

fn find_measure(
    patterns: &[Regex],
    text: &str,
    parser: fn(&str) -> Option<f64>,
) -> Option<f64> {
    patterns
        .iter()
        .filter_map(|pattern| capture(pattern, text))
        .find_map(|raw| parser(&raw))
}

/// Parse a fietstest report from already-extracted text
pub fn parse_fietstest_text(text: &str) -> FietstestParseOutcome {
    let mut warnings: Vec<String> = Vec::new();

    let patient = extract_patient_fields(text).into_patient();
    let workloads = extract_workloads(text);

    let start_watt = find_measure(&START_WATT, text, to_float)
        .or_else(|| first_watt(&workloads, "opwarmen"))
        .or_else(|| first_watt(&workloads, "werken"));
    if start_watt.is_none() {
        warnings.push("Start watt niet gevonden in PDF".to_string());
    }

    let increment_watt =
        find_measure(&INCREMENT, text, to_float).or_else(|| estimate_increment(&workloads));
    if increment_watt.is_none() {
        warnings.push("Opdrijven niet gevonden in PDF".to_string());
    }

    let mut max_watt = find_measure(&MAX_WATT, text, to_float);
    if max_watt.is_none() {
        if workloads.is_empty() {
            warnings.push("Max watt niet gevonden in PDF".to_string());
        } else {
            max_watt = workloads
                .iter()
                .map(|(_, value)| *value)
                .fold(None, |acc: Option<f64>, value| {
                    Some(acc.map_or(value, |max| max.max(value)))
                });
        }
    }

    let duration_at_max = find_measure(&DURATION, text, to_seconds);
    if duration_at_max.is_none() {
        warnings.push("Duur niet gevonden in PDF".to_string());
    }

    let max_hr = find_measure(&MAX_HR, text, to_float);
    if max_hr.is_none() {
        warnings.push("Max HR niet gevonden in PDF".to_string());
    }

    let measurements = FietstestMeasurements {
        patient: patient.clone(),
        start_watt,
        increment_watt,
        max_watt,
        duration_at_max,
        max_hr,
        bp_evolutie: capture(&BP_EVOLUTIE, text),
        ritme: capture(&RITME, text),
        effort_type: capture(&EFFORT, text),
        stop_criterium: capture(&STOP_CRITERIUM, text),
        ecg_changes: capture(&ECG_CHANGES, text),
        conclusion: capture(&CONCLUSION, text),
    };

    FietstestParseOutcome {
        patient,
        measurements,
        warnings,
    }
}

/// Parse a fietstest report from PDF bytes, extracting text (with OCR fallback) first
pub fn parse_fietstest_pdf(pdf_bytes: &[u8]) -> Result<FietstestParseOutcome, PdfIngestError> {
    let text = extract_text(pdf_bytes)?;
    Ok(parse_fietstest_text(&text))
}
