use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientContext;

/// Structured input for bicycle stress test interpretation
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FietstestMeasurements {
    /// Patient context
    pub patient: PatientContext,

    /// Initial workload (W)
    pub start_watt: Option<f64>,

    /// Workload increment per minute (W)
    pub increment_watt: Option<f64>,

    /// Maximum workload reached (W)
    pub max_watt: Option<f64>,

    /// Time sustained at maximum workload (seconds)
    pub duration_at_max: Option<f64>,

    /// Maximum heart rate (bpm)
    pub max_hr: Option<f64>,

    /// Blood pressure evolution description
    pub bp_evolutie: Option<String>,

    /// Rhythm description
    pub ritme: Option<String>,

    /// Effort type description (maximale/submaximale inspanning)
    pub effort_type: Option<String>,

    /// Reason the test was stopped
    pub stop_criterium: Option<String>,

    /// ECG changes during exercise or recovery
    pub ecg_changes: Option<String>,

    /// Overall conclusion
    pub conclusion: Option<String>,
}

/// Derived values for the bicycle stress test
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FietstestMetrics {
    /// Tanaka-predicted maximum heart rate (bpm)
    pub predicted_max_hr: Option<i64>,

    /// Achieved percentage of the predicted maximum heart rate
    pub pct_hr: Option<f64>,

    /// Estimated VO₂ from the achieved wattage (ml·kg⁻¹·min⁻¹)
    pub vo2_observed: Option<f64>,

    /// Percentage of the sex/age p50 reference VO₂
    pub vo2_percentile_pct: Option<f64>,

    /// Percentile band label (e.g. "25-75%")
    pub vo2_band: Option<String>,

    /// Capacity description for the band
    pub vo2_band_text: Option<String>,

    /// Predicted wattage back-solved from the p50 reference VO₂
    pub wpred: Option<f64>,

    /// Achieved percentage of the predicted wattage
    pub wpred_pct: Option<f64>,

    /// Summary lines for display
    pub summary_lines: Vec<String>,
}
