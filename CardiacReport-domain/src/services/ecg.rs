//! ECG metrics calculation and reporting helpers.

use crate::calculations::{qtc_bazett, qtc_fridericia};
use crate::entities::ecg::{EcgMeasurements, EcgMetrics};

/// Derive convenience metrics from captured ECG measurements
pub fn compute_ecg_metrics(measurements: &EcgMeasurements) -> EcgMetrics {
    // Compute QTc by Bazett and Fridericia when raw QT and rate are
    // available; otherwise fall back to the device-reported QTc.
    let (qtcb, qtcf) = match (measurements.qt_interval_ms, measurements.vent_rate) {
        (Some(qt), Some(rate)) => (qtc_bazett(qt, rate), qtc_fridericia(qt, rate)),
        _ => {
            let reported = measurements.qtc_interval_ms.map(|v| (v * 10.0).round() / 10.0);
            (reported, reported)
        }
    };

    let tachy_flag = measurements.vent_rate.is_some_and(|rate| rate > 100.0);
    let brady_flag = measurements.vent_rate.is_some_and(|rate| rate < 50.0);

    let axis_deviation = measurements.qrs_axis_deg.map(|axis| {
        if axis < -30.0 {
            "Linkerasdeviatie".to_string()
        } else if axis > 90.0 {
            "Rechterasdeviatie".to_string()
        } else {
            "Normale QRS-as".to_string()
        }
    });

    let mut summary: Vec<String> = Vec::new();
    if let Some(rhythm) = measurements.rhythm_summary.as_deref() {
        summary.push(format!("Ritme: {}", rhythm));
    }
    if let Some(rate) = measurements.vent_rate {
        summary.push(format!("Frequentie: {:.0} bpm", rate));
    }
    if let Some(pr) = measurements.pr_interval_ms {
        summary.push(format!("PR {:.0} ms", pr));
    }
    if let Some(p_duration) = measurements.p_duration_ms {
        summary.push(format!("P duur {:.0} ms", p_duration));
    }
    if let Some(qrs) = measurements.qrs_duration_ms {
        summary.push(format!("QRS {:.0} ms", qrs));
    }
    if let Some(qt) = measurements.qt_interval_ms {
        summary.push(format!("QT {:.0} ms{}", qt, qtc_suffix(qtcb, qtcf)));
    }
    if let Some(axis) = axis_deviation.as_deref() {
        summary.push(axis.to_string());
    }

    EcgMetrics {
        qtcb_ms: qtcb,
        qtcf_ms: qtcf,
        tachy_flag,
        brady_flag,
        axis_deviation,
        summary_lines: summary,
    }
}

/// QTc annotation appended to the QT value
fn qtc_suffix(qtcb: Option<f64>, qtcf: Option<f64>) -> String {
    match (qtcb, qtcf) {
        (Some(b), Some(f)) => format!(" (QTcB {:.0} ms; QTcF {:.0} ms)", b, f),
        (Some(b), None) => format!(" (QTcB {:.0} ms)", b),
        (None, Some(f)) => format!(" (QTcF {:.0} ms)", f),
        (None, None) => String::new(),
    }
}

/// Generate a textual ECG report based on captured measurements
pub fn generate_ecg_report(measurements: &EcgMeasurements, metrics: &EcgMetrics) -> String {
    let mut lines: Vec<String> = Vec::new();

    match measurements.recorded_at.as_deref() {
        Some(recorded_at) => lines.push(format!("ECG geregistreerd op {}.", recorded_at)),
        // Default succinct text for routine normal ECGs
        None => lines.push("Normaal sinusaal ritme.".to_string()),
    }

    if let Some(rhythm) = measurements.rhythm_summary.as_deref() {
        lines.push(format!("Ritme: {}.", rhythm));
    }

    let mut interval_parts: Vec<String> = Vec::new();
    if let Some(rate) = measurements.vent_rate {
        interval_parts.push(format!("Frequentie {:.0} bpm", rate));
    }
    if let Some(pr) = measurements.pr_interval_ms {
        interval_parts.push(format!("PR {:.0} ms", pr));
    }
    if let Some(qrs) = measurements.qrs_duration_ms {
        interval_parts.push(format!("QRS {:.0} ms", qrs));
    }
    if let Some(qt) = measurements.qt_interval_ms {
        interval_parts.push(format!(
            "QT {:.0} ms{}",
            qt,
            qtc_suffix(metrics.qtcb_ms, metrics.qtcf_ms)
        ));
    }
    if !interval_parts.is_empty() {
        lines.push(format!("{}.", interval_parts.join(", ")));
    }

    // Only the P and QRS axes appear in the text; the T axis stays internal.
    let mut axis_parts: Vec<String> = Vec::new();
    if let Some(p_axis) = measurements.p_axis_deg {
        axis_parts.push(format!("P-as {:.0}°", p_axis));
    }
    if let Some(qrs_axis) = measurements.qrs_axis_deg {
        axis_parts.push(format!("QRS-as {:.0}°", qrs_axis));
    }
    if !axis_parts.is_empty() {
        lines.push(format!("{}.", axis_parts.join(", ")));
    }

    if let Some(axis_deviation) = metrics.axis_deviation.as_deref() {
        let already_mentioned = lines
            .last()
            .is_some_and(|line| line.contains(axis_deviation));
        if !already_mentioned {
            lines.push(format!("{}.", axis_deviation));
        }
    }

    if let Some(auto_text) = measurements.auto_report_text.as_deref() {
        lines.push(String::new());
        lines.push("Automatische protocolering:".to_string());
        lines.push(auto_text.trim().to_string());
    }

    if metrics.tachy_flag {
        lines.push("Frequentie in tachycard bereik (>100 bpm).".to_string());
    }
    if metrics.brady_flag {
        lines.push("Frequentie in bradycard bereik (<50 bpm).".to_string());
    }

    lines.join("\n")
}

/// Return a short ECG summary for inclusion in the consult brief
pub fn summarize_ecg_for_brief(measurements: &EcgMeasurements, metrics: &EcgMetrics) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(rhythm) = measurements.rhythm_summary.as_deref() {
        parts.push(rhythm.trim().to_string());
    }
    if let Some(rate) = measurements.vent_rate {
        parts.push(format!("HF {:.0} bpm", rate));
    }
    if let Some(qrs) = measurements.qrs_duration_ms {
        parts.push(format!("QRS {:.0} ms", qrs));
    }
    if let Some(p_duration) = measurements.p_duration_ms {
        parts.push(format!("P duur {:.0} ms", p_duration));
    }
    match (metrics.qtcb_ms, metrics.qtcf_ms) {
        (Some(b), Some(f)) => {
            parts.push(format!("QTcB {:.0} ms", b));
            parts.push(format!("QTcF {:.0} ms", f));
        }
        (None, Some(f)) => parts.push(format!("QTcF {:.0} ms", f)),
        (Some(b), None) => parts.push(format!("QTcB {:.0} ms", b)),
        (None, None) => {
            if let Some(qt) = measurements.qt_interval_ms {
                parts.push(format!("QT {:.0} ms", qt));
            }
        }
    }
    if let Some(axis) = metrics.axis_deviation.as_deref() {
        parts.push(axis.to_string());
    }

    let text = parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");

    let prefix = match measurements.recorded_at.as_deref() {
        Some(recorded_at) => format!("ECG dd. {}: ", recorded_at),
        None if !text.is_empty() => "ECG: ".to_string(),
        None => String::new(),
    };

    let summary = format!("{}{}", prefix, text).trim().to_string();
    if summary.is_empty() {
        "Geen ECG-gegevens beschikbaar.".to_string()
    } else {
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_measurements() -> EcgMeasurements {
        EcgMeasurements {
            recorded_at: Some("12-03-2024".to_string()),
            vent_rate: Some(72.0),
            pr_interval_ms: Some(160.0),
            qrs_duration_ms: Some(92.0),
            qt_interval_ms: Some(400.0),
            p_axis_deg: Some(45.0),
            qrs_axis_deg: Some(30.0),
            rhythm_summary: Some("Sinusritme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_qtc_both_formulas() {
        let metrics = compute_ecg_metrics(&test_measurements());
        // At 72 bpm both corrections exceed the raw QT, Bazett more so
        let qtcb = metrics.qtcb_ms.unwrap();
        let qtcf = metrics.qtcf_ms.unwrap();
        assert!(qtcb > qtcf);
        assert!(qtcf > 400.0);
        assert!(!metrics.tachy_flag);
        assert!(!metrics.brady_flag);
        assert_eq!(metrics.axis_deviation.as_deref(), Some("Normale QRS-as"));
    }

    #[test]
    fn test_metrics_fall_back_to_reported_qtc() {
        let measurements = EcgMeasurements {
            qtc_interval_ms: Some(430.0),
            ..Default::default()
        };
        let metrics = compute_ecg_metrics(&measurements);
        assert_eq!(metrics.qtcb_ms, Some(430.0));
        assert_eq!(metrics.qtcf_ms, Some(430.0));
    }

    #[test]
    fn test_metrics_rate_flags() {
        let mut measurements = test_measurements();
        measurements.vent_rate = Some(110.0);
        assert!(compute_ecg_metrics(&measurements).tachy_flag);

        measurements.vent_rate = Some(45.0);
        let metrics = compute_ecg_metrics(&measurements);
        assert!(metrics.brady_flag);
        assert!(!metrics.tachy_flag);
    }

    #[test]
    fn test_metrics_axis_deviation() {
        let mut measurements = test_measurements();
        measurements.qrs_axis_deg = Some(-45.0);
        assert_eq!(
            compute_ecg_metrics(&measurements).axis_deviation.as_deref(),
            Some("Linkerasdeviatie")
        );

        measurements.qrs_axis_deg = Some(100.0);
        assert_eq!(
            compute_ecg_metrics(&measurements).axis_deviation.as_deref(),
            Some("Rechterasdeviatie")
        );
    }

    #[test]
    fn test_report_structure() {
        let measurements = test_measurements();
        let metrics = compute_ecg_metrics(&measurements);
        let report = generate_ecg_report(&measurements, &metrics);

        assert!(report.starts_with("ECG geregistreerd op 12-03-2024."));
        assert!(report.contains("Ritme: Sinusritme."));
        assert!(report.contains("Frequentie 72 bpm, PR 160 ms, QRS 92 ms, QT 400 ms"));
        assert!(report.contains("QTcB"));
        assert!(report.contains("P-as 45°, QRS-as 30°."));
        assert!(report.contains("Normale QRS-as."));
    }

    #[test]
    fn test_report_default_header() {
        let measurements = EcgMeasurements::default();
        let metrics = compute_ecg_metrics(&measurements);
        let report = generate_ecg_report(&measurements, &metrics);
        assert!(report.starts_with("Normaal sinusaal ritme."));
    }

    #[test]
    fn test_report_includes_auto_protocol() {
        let mut measurements = test_measurements();
        measurements.auto_report_text = Some("Normaal ECG\n".to_string());
        let metrics = compute_ecg_metrics(&measurements);
        let report = generate_ecg_report(&measurements, &metrics);

        assert!(report.contains("Automatische protocolering:\nNormaal ECG"));
    }

    #[test]
    fn test_brief_summary() {
        let measurements = test_measurements();
        let metrics = compute_ecg_metrics(&measurements);
        let summary = summarize_ecg_for_brief(&measurements, &metrics);

        assert!(summary.starts_with("ECG dd. 12-03-2024: Sinusritme; HF 72 bpm"));
        assert!(summary.contains("QTcB"));
        assert!(summary.contains("QTcF"));
    }

    #[test]
    fn test_brief_summary_empty() {
        let measurements = EcgMeasurements::default();
        let metrics = compute_ecg_metrics(&measurements);
        assert_eq!(
            summarize_ecg_for_brief(&measurements, &metrics),
            "Geen ECG-gegevens beschikbaar."
        );
    }
}
