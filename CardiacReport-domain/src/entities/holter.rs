use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientContext;

/// Structured input for Holter monitoring interpretation
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HolterMeasurements {
    /// Patient context
    pub patient: PatientContext,

    /// Recording date as found in the source
    pub recording_date: Option<String>,

    /// Recording duration in hours
    pub recording_duration_hours: Option<i64>,

    /// Average heart rate (bpm)
    pub avg_hr: Option<i64>,

    /// Minimum heart rate (bpm)
    pub min_hr: Option<i64>,

    /// Maximum heart rate (bpm)
    pub max_hr: Option<i64>,

    /// Atrial fibrillation burden (% of recording time)
    pub afib_percentage: Option<f64>,

    /// Number of pauses
    pub pauses_count: Option<i64>,

    /// Longest pause (ms)
    pub longest_pause_ms: Option<i64>,

    /// Ventricular extrasystole count
    pub ves_count: Option<i64>,

    /// Supraventricular extrasystole count
    pub sves_count: Option<i64>,

    /// AV block type, when present
    pub av_block_type: Option<String>,

    /// Free-text additional findings
    pub other_findings: Option<String>,
}

/// Derived metrics and summary for Holter monitoring
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HolterMetrics {
    /// Minimum rate below 40 bpm
    pub brady_flag: bool,

    /// Maximum rate above 120 bpm
    pub tachy_flag: bool,

    /// Any atrial fibrillation burden recorded
    pub afib_detected: bool,

    /// Longest pause exceeds 2000 ms
    pub significant_pauses: bool,

    /// More than 1000 VES
    pub frequent_ves: bool,

    /// More than 1000 SVES
    pub frequent_sves: bool,

    /// AV block reported
    pub av_block_detected: bool,

    /// Summary lines for display
    pub summary_lines: Vec<String>,
}
