//! Patient metadata extraction shared across the PDF parsers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::patient::{PatientContext, Sex};

use super::extract::normalize_whitespace;

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d+(?:[\.,]\d+)?").expect("valid regex"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}[./-]\d{1,2}[./-]\d{2,4}|\d{4}[./-]\d{2}[./-]\d{2})").expect("valid regex")
});

static NAME_RE: Lazy<Regex> = Lazy::new(|| label_regex("naam"));
static PATIENT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:pati[éeë]?nt[-\s]*(?:id|nr)|patient\s*id|mrn)(?:[:=\-]\s*|\s+)([^\n]+)")
        .expect("valid regex")
});
static VISIT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:order[-\s]*id|bezoek[-\s]*id)(?:[:=\-]\s*|\s+)([^\n]+)").expect("valid regex")
});
static DOB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:geboorte(?:datum|dat)|dob|date\s*of\s*birth)(?:[:=\-]\s*|[.\s]+)([^\n]+)")
        .expect("valid regex")
});
static AGE_RE: Lazy<Regex> = Lazy::new(|| label_regex("leeftijd"));
static BSA_RE: Lazy<Regex> = Lazy::new(|| label_regex(r"\bBSA\b"));
static WEIGHT_RE: Lazy<Regex> = Lazy::new(|| label_regex("(?:gewicht|weight)"));
static LENGTH_RE: Lazy<Regex> = Lazy::new(|| label_regex("(?:lengte|length|height)"));
static SEX_RE: Lazy<Regex> = Lazy::new(|| label_regex("(?:geslacht|sex|gender)"));

/// OCR engines regularly misread digits in labeled values; map the usual
/// suspects back before parsing.
fn fix_ocr_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            'O' | 'o' | 'D' => '0',
            'I' | 'l' | '|' => '1',
            'S' | 's' => '5',
            'B' => '8',
            'T' => '7',
            other => other,
        })
        .collect()
}

fn label_regex(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){}(?:[:=\-]\s*|[.\s]+)([^\n]+)", label)).expect("valid regex")
}

/// Loose container for patient details discovered inside a PDF
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientFields {
    pub sex: Sex,
    pub patient_id: Option<String>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub leeftijd: Option<f64>,
    pub bsa: Option<f64>,
    pub weight: Option<f64>,
    pub length: Option<f64>,
}

impl PatientFields {
    /// Convert to the shared patient context
    pub fn into_patient(self) -> PatientContext {
        PatientContext {
            sex: self.sex,
            patient_id: self.patient_id,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            leeftijd: self.leeftijd,
            bsa: self.bsa,
            weight: self.weight,
            length: self.length,
        }
    }
}

/// Return best-effort patient fields parsed from raw PDF text
pub fn extract_patient_fields(raw_text: &str) -> PatientFields {
    let text = normalize_whitespace(raw_text);

    let full_name = clean_name(capture(&NAME_RE, &text));
    let patient_id = first_token(capture(&PATIENT_ID_RE, &text))
        .or_else(|| first_token(capture(&VISIT_ID_RE, &text)));
    let date_of_birth = extract_date(capture(&DOB_RE, &text));
    let leeftijd = extract_numeric(capture(&AGE_RE, &text));
    let bsa = extract_numeric(capture(&BSA_RE, &text));
    let weight = extract_numeric(capture(&WEIGHT_RE, &text));
    let length = normalize_length(capture(&LENGTH_RE, &text));
    let sex = normalize_sex(capture(&SEX_RE, &text));

    PatientFields {
        sex,
        patient_id,
        full_name,
        date_of_birth,
        leeftijd,
        bsa,
        weight,
        length,
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().trim().to_string())
}

fn extract_numeric(raw: Option<String>) -> Option<f64> {
    let raw = raw?;
    let cleaned = fix_ocr_digits(&raw).replace(',', ".");
    let matched = NUMERIC.find(&cleaned)?;
    matched.as_str().parse::<f64>().ok()
}

fn normalize_length(raw: Option<String>) -> Option<f64> {
    let lowered = raw.as_deref().map(str::to_lowercase);
    let value = extract_numeric(raw)?;
    // Values reported in meters get normalized to centimeters.
    if lowered.is_some_and(|text| text.contains('m')) && value < 3.0 {
        return Some(value * 100.0);
    }
    Some(value)
}

fn extract_date(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    DATE.find(&raw).map(|m| m.as_str().to_string())
}

fn normalize_sex(raw: Option<String>) -> Sex {
    let Some(raw) = raw else { return Sex::Man };
    let token = raw.trim().to_lowercase();
    if token.starts_with('v') || token.starts_with('f') {
        Sex::Vrouw
    } else {
        Sex::Man
    }
}

/// Names run into the next label on the same line; stop at the first
/// token containing a digit.
fn clean_name(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let mut tokens: Vec<&str> = Vec::new();
    for token in raw.split_whitespace() {
        if token.chars().any(|c| c.is_ascii_digit()) {
            break;
        }
        tokens.push(token);
    }
    if tokens.is_empty() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(trimmed.to_string());
    }
    Some(tokens.join(" "))
}

fn first_token(raw: Option<String>) -> Option<String> {
    raw?.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Naam: Jan Janssens 123456
Patiënt-ID: 987654
Geboortedatum: 12-05-1960
Geslacht: Man
Leeftijd: 63
Lengte: 1.78 m
Gewicht: 82 kg
BSA: 2.01 m²";

    #[test]
    fn test_extract_full_patient() {
        let fields = extract_patient_fields(SAMPLE);

        assert_eq!(fields.full_name.as_deref(), Some("Jan Janssens"));
        assert_eq!(fields.patient_id.as_deref(), Some("987654"));
        assert_eq!(fields.date_of_birth.as_deref(), Some("12-05-1960"));
        assert_eq!(fields.sex, Sex::Man);
        assert_eq!(fields.leeftijd, Some(63.0));
        assert_eq!(fields.length, Some(178.0)); // meters converted to cm
        assert_eq!(fields.weight, Some(82.0));
        assert_eq!(fields.bsa, Some(2.01));
    }

    #[test]
    fn test_sex_normalization() {
        let fields = extract_patient_fields("Geslacht: Vrouw");
        assert_eq!(fields.sex, Sex::Vrouw);

        let fields = extract_patient_fields("Sex: female");
        assert_eq!(fields.sex, Sex::Vrouw);

        let fields = extract_patient_fields("Gender: male");
        assert_eq!(fields.sex, Sex::Man);

        // Default when absent
        let fields = extract_patient_fields("Naam: Jan");
        assert_eq!(fields.sex, Sex::Man);
    }

    #[test]
    fn test_ocr_digit_fixups() {
        // "8O" with a misread zero, "6S" with a misread five
        let fields = extract_patient_fields("Gewicht: 8O kg\nLeeftijd: 6S");
        assert_eq!(fields.weight, Some(80.0));
        assert_eq!(fields.leeftijd, Some(65.0));
    }

    #[test]
    fn test_decimal_comma() {
        let fields = extract_patient_fields("BSA: 1,93");
        assert_eq!(fields.bsa, Some(1.93));
    }

    #[test]
    fn test_patient_id_fallback_to_visit_id() {
        let fields = extract_patient_fields("Bezoek-ID: A1234 extra");
        assert_eq!(fields.patient_id.as_deref(), Some("A1234"));
    }

    #[test]
    fn test_length_in_cm_untouched() {
        let fields = extract_patient_fields("Lengte: 178 cm");
        assert_eq!(fields.length, Some(178.0));
    }

    #[test]
    fn test_empty_text() {
        let fields = extract_patient_fields("");
        assert_eq!(fields, PatientFields::default());
    }
}
