use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientContext;

/// Structured input extracted from an ECG PDF or manual entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EcgMeasurements {
    /// Patient context
    pub patient: PatientContext,

    /// When the ECG was recorded, as found in the source
    pub recorded_at: Option<String>,

    /// Ventricular rate (bpm)
    pub vent_rate: Option<f64>,

    /// PR interval (ms)
    pub pr_interval_ms: Option<f64>,

    /// QRS duration (ms)
    pub qrs_duration_ms: Option<f64>,

    /// QT interval (ms)
    pub qt_interval_ms: Option<f64>,

    /// Pre-corrected QTc as reported by the device (ms)
    pub qtc_interval_ms: Option<f64>,

    /// P-wave duration (ms)
    pub p_duration_ms: Option<f64>,

    /// P axis (degrees)
    pub p_axis_deg: Option<f64>,

    /// QRS axis (degrees)
    pub qrs_axis_deg: Option<f64>,

    /// T axis (degrees)
    pub t_axis_deg: Option<f64>,

    /// Rhythm description
    pub rhythm_summary: Option<String>,

    /// Automatic interpretation text from the device
    pub auto_report_text: Option<String>,

    /// Acquisition device identifier
    pub acquisition_device: Option<String>,
}

/// Derived ECG metrics for display
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EcgMetrics {
    /// QTc by Bazett (ms)
    pub qtcb_ms: Option<f64>,

    /// QTc by Fridericia (ms)
    pub qtcf_ms: Option<f64>,

    /// Rate above 100 bpm
    pub tachy_flag: bool,

    /// Rate below 50 bpm
    pub brady_flag: bool,

    /// Axis deviation label when the QRS axis is out of range
    pub axis_deviation: Option<String>,

    /// Summary lines for display
    pub summary_lines: Vec<String>,
}
