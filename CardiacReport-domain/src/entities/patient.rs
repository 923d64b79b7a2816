use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Patient sex, serialized with the Dutch labels used throughout the
/// reports and the stored snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    #[default]
    Man,
    Vrouw,
}

impl Sex {
    /// True for male patients; several formulas take sex as a 0/1 term.
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Man)
    }
}

/// Basic patient info that multiple modules depend on
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct PatientContext {
    /// Patient sex
    pub sex: Sex,

    /// Hospital patient identifier
    pub patient_id: Option<String>,

    /// Full patient name
    pub full_name: Option<String>,

    /// Date of birth as found in the source document
    pub date_of_birth: Option<String>,

    /// Age in years
    #[validate(range(min = 0.0, max = 120.0, message = "Leeftijd buiten bereik"))]
    pub leeftijd: Option<f64>,

    /// Body surface area in m²
    #[validate(range(min = 0.2, max = 3.5, message = "BSA buiten bereik"))]
    pub bsa: Option<f64>,

    /// Weight in kg
    #[validate(range(min = 1.0, max = 500.0, message = "Gewicht buiten bereik"))]
    pub weight: Option<f64>,

    /// Length in cm
    #[validate(range(min = 30.0, max = 260.0, message = "Lengte buiten bereik"))]
    pub length: Option<f64>,
}

impl PatientContext {
    /// BSA when it is present and usable as a divisor
    pub fn usable_bsa(&self) -> Option<f64> {
        self.bsa.filter(|bsa| *bsa > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_with_dutch_labels() {
        assert_eq!(serde_json::to_string(&Sex::Man).unwrap(), "\"Man\"");
        assert_eq!(serde_json::to_string(&Sex::Vrouw).unwrap(), "\"Vrouw\"");
    }

    #[test]
    fn test_patient_deserializes_from_partial_payload() {
        let patient: PatientContext =
            serde_json::from_str(r#"{"sex":"Vrouw","leeftijd":63.0}"#).unwrap();
        assert_eq!(patient.sex, Sex::Vrouw);
        assert_eq!(patient.leeftijd, Some(63.0));
        assert!(patient.bsa.is_none());
    }

    #[test]
    fn test_usable_bsa_rejects_zero() {
        let patient = PatientContext {
            bsa: Some(0.0),
            ..Default::default()
        };
        assert!(patient.usable_bsa().is_none());
    }

    #[test]
    fn test_validation_bounds() {
        let patient = PatientContext {
            leeftijd: Some(63.0),
            bsa: Some(1.9),
            ..Default::default()
        };
        assert!(patient.validate().is_ok());

        let patient = PatientContext {
            leeftijd: Some(300.0),
            ..Default::default()
        };
        assert!(patient.validate().is_err());
    }
}
