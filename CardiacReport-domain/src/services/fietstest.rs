//! Fietstest (bicycle stress test) metrics and report builder.

use crate::calculations::{get_vo2_reference_values, vo2_percentile_and_label};
use crate::entities::fietstest::{FietstestMeasurements, FietstestMetrics};

use super::fmt_num;

/// Tanaka-derived predicted maximum heart rate
pub fn calculate_predicted_max_hr(age: Option<f64>) -> Option<i64> {
    age.map(|age| (208.0 - 0.7 * age).round() as i64)
}

/// Convert achieved wattage to estimated VO₂ (ml·kg⁻¹·min⁻¹)
pub fn calculate_vo2_from_watts(max_watt: Option<f64>, weight: Option<f64>) -> Option<f64> {
    let max_watt = max_watt.filter(|w| *w > 0.0)?;
    let weight = weight.filter(|w| *w > 0.0)?;
    let work_rate = max_watt * 6.12; // kg·m·min⁻¹
    let vo2 = 1.8 * work_rate / weight + 7.0;
    Some((vo2 * 10.0).round() / 10.0)
}

/// Return derived values and summary lines for the fietsproef
pub fn compute_fietstest_metrics(params: &FietstestMeasurements) -> FietstestMetrics {
    let sex = params.patient.sex;
    let age = params.patient.leeftijd;
    let weight = params.patient.weight;

    let predicted_max_hr = calculate_predicted_max_hr(age);
    let pct_hr = match (predicted_max_hr, params.max_hr) {
        (Some(predicted), Some(max_hr)) if predicted > 0 && max_hr > 0.0 => {
            Some((max_hr / predicted as f64 * 1000.0).round() / 10.0)
        }
        _ => None,
    };

    let vo2_observed = calculate_vo2_from_watts(params.max_watt, weight);

    let (vo2_percentile_pct, vo2_band, vo2_band_text) = match (vo2_observed, age) {
        (Some(vo2), Some(age)) => {
            let (pct, band, text) = vo2_percentile_and_label(sex, age, vo2);
            (Some(pct), Some(band.to_string()), Some(text.to_string()))
        }
        _ => (None, None, None),
    };

    // Back-solve the predicted wattage from the p50 reference VO₂
    let (wpred, wpred_pct) = match (age, weight) {
        (Some(age), Some(weight)) if weight > 0.0 => {
            let p50 = get_vo2_reference_values(sex, age).p50;
            let work_rate_pred = weight * (p50 - 7.0) / 1.8;
            if work_rate_pred > 0.0 {
                let wpred = (work_rate_pred / 6.12 * 10.0).round() / 10.0;
                let wpred_pct = params
                    .max_watt
                    .filter(|w| *w > 0.0 && wpred > 0.0)
                    .map(|max_watt| (max_watt / wpred * 1000.0).round() / 10.0);
                (Some(wpred), wpred_pct)
            } else {
                (None, None)
            }
        }
        _ => (None, None),
    };

    let mut summary_lines: Vec<String> = Vec::new();
    if let Some(predicted) = predicted_max_hr {
        if let (Some(pct), Some(max_hr)) = (pct_hr, params.max_hr) {
            summary_lines.push(format!(
                "Max HR: {} bpm ({}% of predicted {} bpm)",
                fmt_num(max_hr),
                pct,
                predicted
            ));
        } else if let Some(max_hr) = params.max_hr {
            summary_lines.push(format!(
                "Max HR: {} bpm (predicted {} bpm)",
                fmt_num(max_hr),
                predicted
            ));
        }
    }
    if let Some(vo2) = vo2_observed {
        match (vo2_percentile_pct, vo2_band.as_deref(), vo2_band_text.as_deref()) {
            (Some(pct), Some(band), Some(text)) => summary_lines.push(format!(
                "Observed VO2: {} ml·kg⁻¹·min⁻¹ — {}% vs 50e ({}: {})",
                vo2, pct, band, text
            )),
            _ => summary_lines.push(format!("Observed VO2: {} ml·kg⁻¹·min⁻¹", vo2)),
        }
    }
    if let Some(wpred) = wpred {
        match (wpred_pct, params.max_watt) {
            (Some(pct), Some(max_watt)) => summary_lines.push(format!(
                "Wattage: {} W ({}% of predicted {} W)",
                fmt_num(max_watt),
                pct,
                wpred
            )),
            _ => summary_lines.push(format!("Predicted wattage: {} W", wpred)),
        }
    }

    FietstestMetrics {
        predicted_max_hr,
        pct_hr,
        vo2_observed,
        vo2_percentile_pct,
        vo2_band,
        vo2_band_text,
        wpred,
        wpred_pct,
        summary_lines,
    }
}

/// Create the textual report for the bicycle stress test
pub fn generate_fietstest_report(
    params: &FietstestMeasurements,
    metrics: &FietstestMetrics,
) -> String {
    let start_watt = params.start_watt.unwrap_or(0.0);
    let increment_watt = params.increment_watt.unwrap_or(0.0);
    let max_watt = params.max_watt.unwrap_or(0.0);
    let duration_at_max = params.duration_at_max.unwrap_or(0.0);
    let max_hr = params.max_hr.unwrap_or(0.0);

    let max_watt_text = if max_watt > 0.0 {
        format!(
            "Maximale belasting tot {} Watt gedurende {} seconden.",
            fmt_num(max_watt),
            fmt_num(duration_at_max)
        )
    } else {
        "Maximale belasting niet bereikt of niet gerapporteerd.".to_string()
    };

    let pct_text = match (metrics.predicted_max_hr, metrics.pct_hr) {
        (Some(_), Some(pct)) if max_hr > 0.0 => format!(" ({}% predicted)", pct),
        _ => String::new(),
    };

    let vo2_value = metrics
        .vo2_observed
        .or_else(|| calculate_vo2_from_watts(params.max_watt, params.patient.weight));

    let mut report: Vec<String> = Vec::new();
    report.push(format!(
        "Start aan {} W. Opdrijven van de belasting met {} W om de minuut.",
        fmt_num(start_watt),
        fmt_num(increment_watt)
    ));
    report.push(max_watt_text);
    report.push(format!(
        "Maximale hartslag bedraagt {}/min{}",
        fmt_num(max_hr),
        pct_text
    ));
    report.push(format!(
        "{}. {}.",
        params.bp_evolutie.as_deref().unwrap_or(""),
        params.ritme.as_deref().unwrap_or("")
    ));
    report.push(format!(
        "{}. Het criterium voor staken betreft {}.",
        params.effort_type.as_deref().unwrap_or(""),
        params.stop_criterium.as_deref().unwrap_or("")
    ));
    report.push(String::new());
    report.push(format!(
        "Het ECG vertoont {} tijdens inspanning of recuperatie.",
        params.ecg_changes.as_deref().unwrap_or("")
    ));
    report.push(String::new());
    report.push(format!(
        "Conclusie: {}.",
        params.conclusion.as_deref().unwrap_or("")
    ));

    if let Some(vo2) = vo2_value {
        let vo2_line = match (
            metrics.vo2_percentile_pct,
            metrics.vo2_band.as_deref(),
            metrics.vo2_band_text.as_deref(),
        ) {
            (Some(pct), Some(band), Some(text)) => format!(
                "VO2: {} ml·kg⁻¹·min⁻¹ ({}% predicted) — Percentiel: {} ({})",
                vo2, pct, band, text
            ),
            _ => format!("VO2 (ml·kg⁻¹·min⁻¹): {}", vo2),
        };
        report.insert(3, vo2_line);
    }

    report.join("\n")
}

/// Return a compact fietsproef summary for the consult letter
pub fn summarize_fietstest_for_brief(
    params: &FietstestMeasurements,
    metrics: &FietstestMetrics,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(max_watt) = params.max_watt.filter(|w| *w > 0.0) {
        parts.push(format!("Max belasting {:.0} W", max_watt));
    }
    if let Some(max_hr) = params.max_hr.filter(|hr| *hr > 0.0) {
        match metrics.pct_hr {
            Some(pct) => parts.push(format!("HF {:.0} bpm ({:.0}% voorspeld)", max_hr, pct)),
            None => parts.push(format!("HF {:.0} bpm", max_hr)),
        }
    }
    if let Some(vo2) = metrics.vo2_observed {
        match metrics.vo2_percentile_pct {
            Some(pct) => parts.push(format!(
                "VO₂ {:.1} ml·kg⁻¹·min⁻¹ ({:.0}% vs p50)",
                vo2, pct
            )),
            None => parts.push(format!("VO₂ {:.1} ml·kg⁻¹·min⁻¹", vo2)),
        }
    }
    if let Some(conclusion) = params.conclusion.as_deref() {
        let trimmed = conclusion.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    if parts.is_empty() {
        "Geen fietsproefgegevens beschikbaar.".to_string()
    } else {
        parts.join("; ")
    }
}
