//! Consult letter (brief) composition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::patient::PatientContext;

/// Clinical examination findings for the letter
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClinicalExam {
    /// Pulse (bpm)
    pub pols: Option<f64>,

    /// Systolic blood pressure (mmHg)
    pub systolic_bp: Option<f64>,

    /// Diastolic blood pressure (mmHg)
    pub diastolic_bp: Option<f64>,

    /// Cardiac auscultation findings
    pub auscultation: Option<String>,
}

/// One investigation section (ECG, echo, ...) included in the letter
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InvestigationSection {
    /// Section label; matched case-insensitively to decide placement
    pub label: String,

    /// Date the investigation was performed, for the section header
    pub performed_on: Option<String>,

    /// Report text for the section
    pub text: String,
}

/// All sections needed to compose the consult letter
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BriefLetterInput {
    /// Patient context
    pub patient: PatientContext,

    /// Consultation date; "vandaag" when absent
    pub consult_date: Option<NaiveDate>,

    /// Medical history section
    pub voorgeschiedenis: Option<String>,

    /// Anamnesis section
    pub anamnese: Option<String>,

    /// Home medication section
    pub thuismedicatie: Option<String>,

    /// Clinical examination findings
    pub clinical_exam: ClinicalExam,

    /// Investigation sections in any order; the letter fixes the order
    pub investigations: Vec<InvestigationSection>,

    /// Discussion section
    pub bespreking: Option<String>,

    /// Closing signature line
    pub signature: Option<String>,
}

const SECTION_RULE: &str = "-------------------------";

fn fmt_block(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

fn find_section<'a>(
    investigations: &'a [InvestigationSection],
    label_substrings: &[&str],
) -> Option<&'a InvestigationSection> {
    investigations.iter().find(|section| {
        let label = section.label.to_lowercase();
        label_substrings
            .iter()
            .any(|substring| label.contains(&substring.to_lowercase()))
    })
}

fn push_investigation(
    lines: &mut Vec<String>,
    section: Option<&InvestigationSection>,
    base_label: &str,
) {
    let Some(section) = section else { return };
    let label = match section.performed_on.as_deref() {
        Some(performed) => format!("{} ({})", base_label, performed),
        None => base_label.to_string(),
    };
    lines.push(label);
    lines.push(SECTION_RULE.to_string());
    lines.push(if section.text.is_empty() {
        "-".to_string()
    } else {
        section.text.clone()
    });
    lines.push(String::new());
}

/// Compose the full consult letter using the provided sections
pub fn compose_brief_letter(input: &BriefLetterInput) -> String {
    let date_txt = input
        .consult_date
        .map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| "vandaag".to_string());

    let mut lines: Vec<String> = Vec::new();
    lines.push("Geachte collega".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Wij zagen uw patiënt op de raadpleging cardiologie op {}.",
        date_txt
    ));
    lines.push(String::new());

    lines.push("Voorgeschiedenis".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(fmt_block(input.voorgeschiedenis.as_deref()));
    lines.push(String::new());

    lines.push("Anamnese".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(fmt_block(input.anamnese.as_deref()));
    lines.push(String::new());

    lines.push("Huidige Medicatie".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(fmt_block(input.thuismedicatie.as_deref()));
    lines.push(String::new());

    lines.push("Klinisch onderzoek".to_string());
    lines.push(SECTION_RULE.to_string());
    let mut exam_lines: Vec<String> = vec!["Algemene inspectie: normale indruk".to_string()];
    if let Some(pols) = input.clinical_exam.pols {
        exam_lines.push(format!("Pols {}/min.", pols.round() as i64));
    }
    if let (Some(systolic), Some(diastolic)) =
        (input.clinical_exam.systolic_bp, input.clinical_exam.diastolic_bp)
    {
        exam_lines.push(format!(
            "Bloeddruk {}/{} mmHg.",
            systolic.round() as i64,
            diastolic.round() as i64
        ));
    }
    if let Some(auscultation) = input.clinical_exam.auscultation.as_deref() {
        let trimmed = auscultation.trim();
        if !trimmed.is_empty() {
            exam_lines.push(format!("Hartauscultatie: {}", trimmed));
        }
    }
    lines.extend(exam_lines);
    lines.push(String::new());

    // Investigations in the preferred reading order
    push_investigation(
        &mut lines,
        find_section(&input.investigations, &["ecg", "elektrocardiogram"]),
        "Elektrocardiogram in rust",
    );
    push_investigation(
        &mut lines,
        find_section(&input.investigations, &["fietstest", "cyclo", "ergometrie"]),
        "Cyclo-ergometrie",
    );
    push_investigation(
        &mut lines,
        find_section(
            &input.investigations,
            &["echo", "transthoracale", "transthoracische"],
        ),
        "Transthoracale Echocardiografie",
    );
    push_investigation(
        &mut lines,
        find_section(&input.investigations, &["cied", "device", "pacemaker"]),
        "Device controle",
    );
    push_investigation(
        &mut lines,
        find_section(&input.investigations, &["holter"]),
        "Holter",
    );

    lines.push("Bespreking".to_string());
    lines.push(SECTION_RULE.to_string());
    lines.push(fmt_block(input.bespreking.as_deref()));
    lines.push(String::new());
    lines.push("Met collegiale hoogachting,".to_string());
    lines.push(
        input
            .signature
            .clone()
            .unwrap_or_else(|| "Dienst Cardiologie".to_string()),
    );

    format!("{}\n", lines.join("\n").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> BriefLetterInput {
        BriefLetterInput {
            consult_date: NaiveDate::from_ymd_opt(2024, 3, 12),
            voorgeschiedenis: Some("Arteriële hypertensie".to_string()),
            anamnese: Some("Geen klachten".to_string()),
            thuismedicatie: Some("Bisoprolol 5mg 1x/d".to_string()),
            clinical_exam: ClinicalExam {
                pols: Some(68.0),
                systolic_bp: Some(132.0),
                diastolic_bp: Some(84.0),
                auscultation: Some("zuivere harttonen".to_string()),
            },
            investigations: vec![
                InvestigationSection {
                    label: "echo".to_string(),
                    performed_on: Some("12-03-2024".to_string()),
                    text: "LV: Normotroof.".to_string(),
                },
                InvestigationSection {
                    label: "ECG".to_string(),
                    performed_on: None,
                    text: "Sinusritme, 68 bpm.".to_string(),
                },
            ],
            bespreking: Some("Stabiele cardiale toestand.".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_letter_structure() {
        let letter = compose_brief_letter(&test_input());

        assert!(letter.starts_with("Geachte collega"));
        assert!(letter.contains("op de raadpleging cardiologie op 12-03-2024."));
        assert!(letter.contains("Voorgeschiedenis\n-------------------------\nArteriële hypertensie"));
        assert!(letter.contains("Huidige Medicatie"));
        assert!(letter.contains("Algemene inspectie: normale indruk"));
        assert!(letter.contains("Pols 68/min."));
        assert!(letter.contains("Bloeddruk 132/84 mmHg."));
        assert!(letter.contains("Hartauscultatie: zuivere harttonen"));
        assert!(letter.ends_with("Met collegiale hoogachting,\nDienst Cardiologie\n"));
    }

    #[test]
    fn test_letter_investigation_order() {
        let letter = compose_brief_letter(&test_input());
        // ECG comes before the echo section regardless of input order
        let ecg_pos = letter.find("Elektrocardiogram in rust").unwrap();
        let echo_pos = letter.find("Transthoracale Echocardiografie (12-03-2024)").unwrap();
        assert!(ecg_pos < echo_pos);
    }

    #[test]
    fn test_letter_defaults() {
        let input = BriefLetterInput::default();
        let letter = compose_brief_letter(&input);

        assert!(letter.contains("op de raadpleging cardiologie op vandaag."));
        assert!(letter.contains("Voorgeschiedenis\n-------------------------\n-"));
        assert!(!letter.contains("Elektrocardiogram in rust"));
        assert!(!letter.contains("Holter"));
    }

    #[test]
    fn test_letter_section_matching_is_case_insensitive() {
        let mut input = test_input();
        input.investigations.push(InvestigationSection {
            label: "Fietstest".to_string(),
            performed_on: None,
            text: "Normale fietsproef.".to_string(),
        });

        let letter = compose_brief_letter(&input);
        assert!(letter.contains("Cyclo-ergometrie\n-------------------------\nNormale fietsproef."));
    }
}
