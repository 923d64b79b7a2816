use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::cied::CiedReportInput;
use super::echo::EchoMeasurements;
use super::ecg::EcgMeasurements;
use super::fietstest::FietstestMeasurements;
use super::patient::PatientContext;

/// Bundle of measurement contexts that can be stored or shared.
///
/// This is the payload the front-end downloads as JSON and posts to the
/// studies endpoint; `report_texts` maps a section key ("echo", "ecg", ...)
/// to the generated report so the consult letter can pick up prior studies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StudySnapshot {
    /// Patient context shared by the bundled studies
    pub patient: Option<PatientContext>,

    /// Echo measurements, when captured
    pub echo: Option<EchoMeasurements>,

    /// Bicycle stress test measurements, when captured
    pub fietstest: Option<FietstestMeasurements>,

    /// Device follow-up input, when captured
    pub cied: Option<CiedReportInput>,

    /// ECG measurements, when captured
    pub ecg: Option<EcgMeasurements>,

    /// Generated report texts keyed by section
    pub report_texts: BTreeMap<String, String>,
}

impl StudySnapshot {
    /// True when nothing was captured
    pub fn is_empty(&self) -> bool {
        self.patient.is_none()
            && self.echo.is_none()
            && self.fietstest.is_none()
            && self.cied.is_none()
            && self.ecg.is_none()
            && self.report_texts.is_empty()
    }

    /// Patient context for storage: the snapshot-level patient, falling
    /// back to whichever bundled study carries one.
    pub fn effective_patient(&self) -> Option<&PatientContext> {
        self.patient
            .as_ref()
            .or(self.echo.as_ref().map(|e| &e.patient))
            .or(self.fietstest.as_ref().map(|f| &f.patient))
            .or(self.ecg.as_ref().map(|e| &e.patient))
            .or(self.cied.as_ref().and_then(|c| c.patient.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::Sex;

    #[test]
    fn test_empty_snapshot() {
        assert!(StudySnapshot::default().is_empty());
    }

    #[test]
    fn test_effective_patient_falls_back_to_study() {
        let mut snapshot = StudySnapshot::default();
        assert!(snapshot.effective_patient().is_none());

        let mut echo = EchoMeasurements::default();
        echo.patient.sex = Sex::Vrouw;
        echo.patient.patient_id = Some("P-1".to_string());
        snapshot.echo = Some(echo);

        let patient = snapshot.effective_patient().unwrap();
        assert_eq!(patient.patient_id.as_deref(), Some("P-1"));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut snapshot = StudySnapshot::default();
        snapshot
            .report_texts
            .insert("echo".to_string(), "LV: Normotroof.".to_string());

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StudySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.report_texts.get("echo").unwrap(), "LV: Normotroof.");
    }
}
