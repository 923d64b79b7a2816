use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientContext;

/// Snapshot of per-lead measurements during a CIED follow-up.
///
/// Values are kept as free text: programmers report ranges and annotated
/// values ("0.5 @ 0.4", "<0.375") that should reach the report verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LeadMeasurements {
    /// Sensing amplitude (mV)
    pub sensing: Option<String>,

    /// Lead impedance (Ω)
    pub impedance: Option<String>,

    /// Capture threshold voltage (V)
    pub threshold_v: Option<String>,

    /// Capture threshold pulse width (ms)
    pub threshold_ms: Option<String>,

    /// Pacing polarity
    pub polarity: Option<String>,

    /// Measurements were stable during follow-up
    pub stable: Option<bool>,

    /// Lead position
    pub location: Option<String>,
}

impl Default for LeadMeasurements {
    fn default() -> Self {
        Self {
            sensing: None,
            impedance: None,
            threshold_v: None,
            threshold_ms: None,
            polarity: None,
            stable: Some(true),
            location: None,
        }
    }
}

impl LeadMeasurements {
    /// True when any measured value is present
    pub fn has_values(&self) -> bool {
        [
            &self.sensing,
            &self.threshold_v,
            &self.threshold_ms,
            &self.impedance,
        ]
        .iter()
        .any(|field| field.as_deref().map(str::trim).is_some_and(|s| !s.is_empty()))
    }
}

/// Structured payload for device follow-up reporting
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CiedReportInput {
    /// Patient context
    pub patient: Option<PatientContext>,

    /// Device type (pacemaker, ICD, CRT-P, CRT-D, ILR)
    pub device_type: Option<String>,

    /// Device brand and model
    pub device_brand: Option<String>,

    /// Programming mode (DDD, VVI, ...)
    pub programming_mode: Option<String>,

    /// Lower rate limit (bpm)
    pub lower_rate: Option<i64>,

    /// Upper tracking rate (bpm)
    pub upper_tracking: Option<i64>,

    /// Implant indication
    pub indication_text: Option<String>,

    /// Right atrial lead present
    pub lead_ra: bool,

    /// Right ventricular lead present
    pub lead_rv: bool,

    /// Left ventricular lead present
    pub lead_lv: bool,

    /// Other leads, free text
    pub other_leads: Option<String>,

    /// Sensing values within range
    pub sensing_ok: bool,

    /// Pacing thresholds within range
    pub pacing_ok: bool,

    /// Impedances within range
    pub impedance_ok: bool,

    /// EGM episode readout
    pub egm_events: Option<String>,

    /// Atrial pacing percentage, free text
    pub atrial_pacing_pct: Option<String>,

    /// Ventricular pacing percentage, free text
    pub ventricular_pacing_pct: Option<String>,

    /// LV pacing percentage, free text
    pub lv_pacing_pct: Option<String>,

    /// Settings were changed during this follow-up
    pub settings_changed: bool,

    /// Patient is pacing-dependent
    pub patient_dependent: bool,

    /// Battery status text
    pub battery_status: Option<String>,

    /// Rate-adaptive sensed AV delay suggestion at peak UTR (ms)
    pub suggested_sensed_av: Option<i64>,

    /// Rate-adaptive paced AV delay suggestion at peak UTR (ms)
    pub suggested_paced_av: Option<i64>,

    /// Programmed sensed AV delay, free text (ms)
    pub sensed_av_delay: Option<String>,

    /// Programmed paced AV delay, free text (ms)
    pub paced_av_delay: Option<String>,

    /// Atrial lead measurements
    pub atrial_fields: LeadMeasurements,

    /// Ventricular lead measurements
    pub vent_fields: LeadMeasurements,

    /// LV lead measurements
    pub lv_fields: LeadMeasurements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_has_values() {
        let mut lead = LeadMeasurements::default();
        assert!(!lead.has_values());

        lead.sensing = Some("  ".to_string());
        assert!(!lead.has_values());

        lead.impedance = Some("520".to_string());
        assert!(lead.has_values());
    }

    #[test]
    fn test_default_lead_is_stable() {
        let lead = LeadMeasurements::default();
        assert_eq!(lead.stable, Some(true));
    }
}
