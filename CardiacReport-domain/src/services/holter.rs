//! Holter monitoring metrics and report builder.

use crate::entities::holter::{HolterMeasurements, HolterMetrics};

use super::fmt_num;

/// Derive convenience metrics from captured Holter measurements
pub fn compute_holter_metrics(measurements: &HolterMeasurements) -> HolterMetrics {
    let mut summary: Vec<String> = Vec::new();

    if let Some(duration) = measurements.recording_duration_hours {
        summary.push(format!("Registratieduur: {} uur", duration));
    }

    if let Some(avg_hr) = measurements.avg_hr {
        summary.push(format!("Gemiddelde hartfrequentie: {} bpm", avg_hr));
    }

    let brady_flag = measurements.min_hr.is_some_and(|hr| hr < 40);
    if let Some(min_hr) = measurements.min_hr {
        let mut text = format!("Minimale hartfrequentie: {} bpm", min_hr);
        if brady_flag {
            text.push_str(" (bradycardie)");
        }
        summary.push(text);
    }

    let tachy_flag = measurements.max_hr.is_some_and(|hr| hr > 120);
    if let Some(max_hr) = measurements.max_hr {
        let mut text = format!("Maximale hartfrequentie: {} bpm", max_hr);
        if tachy_flag {
            text.push_str(" (tachycardie)");
        }
        summary.push(text);
    }

    let afib_detected = measurements.afib_percentage.is_some_and(|pct| pct > 0.0);
    if afib_detected {
        if let Some(pct) = measurements.afib_percentage {
            summary.push(format!("Atriumfibrilleren: {}% van de tijd", fmt_num(pct)));
        }
    }

    let has_pauses = measurements.pauses_count.is_some_and(|count| count > 0);
    let significant_pauses =
        has_pauses && measurements.longest_pause_ms.is_some_and(|ms| ms > 2000);
    if has_pauses {
        let count = measurements.pauses_count.unwrap_or(0);
        let mut text = format!("Pauzes: {}", count);
        if let Some(longest) = measurements.longest_pause_ms {
            text.push_str(&format!(" (langste: {} ms)", longest));
        }
        if significant_pauses {
            text.push_str(" - significant");
        }
        summary.push(text);
    }

    let frequent_ves = measurements.ves_count.is_some_and(|count| count > 1000);
    if let Some(ves) = measurements.ves_count {
        let mut text = format!("VES: {}", ves);
        if frequent_ves {
            text.push_str(" (frequent)");
        }
        summary.push(text);
    }

    let frequent_sves = measurements.sves_count.is_some_and(|count| count > 1000);
    if let Some(sves) = measurements.sves_count {
        let mut text = format!("SVES: {}", sves);
        if frequent_sves {
            text.push_str(" (frequent)");
        }
        summary.push(text);
    }

    let av_block_detected = measurements
        .av_block_type
        .as_deref()
        .is_some_and(|block| !block.trim().is_empty());
    if av_block_detected {
        if let Some(block) = measurements.av_block_type.as_deref() {
            summary.push(format!("AV-blok: {}", block));
        }
    }

    HolterMetrics {
        brady_flag,
        tachy_flag,
        afib_detected,
        significant_pauses,
        frequent_ves,
        frequent_sves,
        av_block_detected,
        summary_lines: summary,
    }
}

/// Generate a textual Holter monitoring report
pub fn generate_holter_report(
    measurements: &HolterMeasurements,
    metrics: &HolterMetrics,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    match measurements.recording_date.as_deref() {
        Some(date) => lines.push(format!("Holter-monitoring geregistreerd op {}.", date)),
        None => lines.push("Holter-monitoring registratie.".to_string()),
    }

    if let Some(duration) = measurements.recording_duration_hours {
        lines.push(format!("Registratieduur: {} uur.", duration));
    }

    let mut hr_parts: Vec<String> = Vec::new();
    if let Some(avg_hr) = measurements.avg_hr {
        hr_parts.push(format!("gemiddelde hartfrequentie {} bpm", avg_hr));
    }
    if let Some(min_hr) = measurements.min_hr {
        hr_parts.push(format!("minimum {} bpm", min_hr));
    }
    if let Some(max_hr) = measurements.max_hr {
        hr_parts.push(format!("maximum {} bpm", max_hr));
    }
    if !hr_parts.is_empty() {
        lines.push(format!("Hartfrequentie: {}.", hr_parts.join(", ")));
    }

    if metrics.brady_flag {
        lines.push("Er werd bradycardie vastgesteld.".to_string());
    }
    if metrics.tachy_flag {
        lines.push("Er werden episoden van tachycardie waargenomen.".to_string());
    }

    let mut rhythm_findings: Vec<String> = Vec::new();

    if metrics.afib_detected {
        if let Some(pct) = measurements.afib_percentage {
            let finding = if pct >= 50.0 {
                format!(
                    "Er werd permanent atriumfibrilleren vastgesteld ({}% van de tijd).",
                    fmt_num(pct)
                )
            } else if pct >= 10.0 {
                format!(
                    "Er werden frequente episoden van atriumfibrilleren waargenomen ({}% van de tijd).",
                    fmt_num(pct)
                )
            } else {
                format!(
                    "Er werden incidentele episoden van atriumfibrilleren waargenomen ({}% van de tijd).",
                    fmt_num(pct)
                )
            };
            rhythm_findings.push(finding);
        }
    }

    if let Some(count) = measurements.pauses_count.filter(|count| *count > 0) {
        let mut pause_text = format!("{} pauze(s)", count);
        if let Some(longest) = measurements.longest_pause_ms {
            pause_text.push_str(&format!(" met een maximale duur van {} ms", longest));
        }
        if metrics.significant_pauses {
            rhythm_findings.push(format!(
                "Er werden significante pauzes geregistreerd: {}.",
                pause_text
            ));
        } else {
            rhythm_findings.push(format!("Er werden {} geregistreerd.", pause_text));
        }
    }

    let mut ectopy_parts: Vec<String> = Vec::new();
    if let Some(ves) = measurements.ves_count.filter(|count| *count > 0) {
        if metrics.frequent_ves {
            ectopy_parts.push(format!("frequente ventriculaire extrasystolen (VES: {})", ves));
        } else {
            ectopy_parts.push(format!("ventriculaire extrasystolen (VES: {})", ves));
        }
    }
    if let Some(sves) = measurements.sves_count.filter(|count| *count > 0) {
        if metrics.frequent_sves {
            ectopy_parts.push(format!(
                "frequente supraventriculaire extrasystolen (SVES: {})",
                sves
            ));
        } else {
            ectopy_parts.push(format!("supraventriculaire extrasystolen (SVES: {})", sves));
        }
    }
    if !ectopy_parts.is_empty() {
        rhythm_findings.push(format!("Er werden {} waargenomen.", ectopy_parts.join(" en ")));
    }

    if metrics.av_block_detected {
        if let Some(block) = measurements.av_block_type.as_deref() {
            rhythm_findings.push(format!("Er werd {} vastgesteld.", block));
        }
    }

    if rhythm_findings.is_empty() {
        rhythm_findings.push("Geen significante ritmestoornissen waargenomen.".to_string());
    }
    lines.extend(rhythm_findings);

    if let Some(other) = measurements.other_findings.as_deref() {
        let trimmed = other.trim();
        if !trimmed.is_empty() {
            lines.push(format!("Overige bevindingen: {}.", trimmed));
        }
    }

    lines.push("\nConclusie:".to_string());
    let mut conclusions: Vec<String> = Vec::new();

    if metrics.afib_detected {
        conclusions.push("- Atriumfibrilleren gedocumenteerd".to_string());
    }
    if metrics.brady_flag {
        conclusions.push("- Bradycardie".to_string());
    }
    if metrics.tachy_flag {
        conclusions.push("- Tachycardie".to_string());
    }
    if metrics.significant_pauses {
        conclusions.push("- Significante pauzes".to_string());
    }
    if metrics.frequent_ves {
        conclusions.push("- Frequente ventriculaire extrasystolen".to_string());
    }
    if metrics.frequent_sves {
        conclusions.push("- Frequente supraventriculaire extrasystolen".to_string());
    }
    if metrics.av_block_detected {
        if let Some(block) = measurements.av_block_type.as_deref() {
            conclusions.push(format!("- {}", block));
        }
    }

    if conclusions.is_empty() {
        conclusions.push("- Geen afwijkingen geregistreerd tijdens Holter-monitoring".to_string());
    }
    lines.extend(conclusions);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_measurements() -> HolterMeasurements {
        HolterMeasurements {
            recording_date: Some("01-02-2024".to_string()),
            recording_duration_hours: Some(24),
            avg_hr: Some(74),
            min_hr: Some(48),
            max_hr: Some(132),
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_rate_flags() {
        let metrics = compute_holter_metrics(&test_measurements());
        assert!(!metrics.brady_flag); // 48 is not < 40
        assert!(metrics.tachy_flag); // 132 > 120

        let mut measurements = test_measurements();
        measurements.min_hr = Some(36);
        assert!(compute_holter_metrics(&measurements).brady_flag);
    }

    #[test]
    fn test_metrics_afib_and_pauses() {
        let mut measurements = test_measurements();
        measurements.afib_percentage = Some(12.0);
        measurements.pauses_count = Some(3);
        measurements.longest_pause_ms = Some(2400);

        let metrics = compute_holter_metrics(&measurements);
        assert!(metrics.afib_detected);
        assert!(metrics.significant_pauses);
    }

    #[test]
    fn test_metrics_ectopy_thresholds() {
        let mut measurements = test_measurements();
        measurements.ves_count = Some(1500);
        measurements.sves_count = Some(200);

        let metrics = compute_holter_metrics(&measurements);
        assert!(metrics.frequent_ves);
        assert!(!metrics.frequent_sves);
    }

    #[test]
    fn test_report_afib_burden_narrative() {
        let mut measurements = test_measurements();
        let metrics = |m: &HolterMeasurements| compute_holter_metrics(m);

        measurements.afib_percentage = Some(60.0);
        let report = generate_holter_report(&measurements, &metrics(&measurements));
        assert!(report.contains("permanent atriumfibrilleren"));

        measurements.afib_percentage = Some(15.0);
        let report = generate_holter_report(&measurements, &metrics(&measurements));
        assert!(report.contains("frequente episoden van atriumfibrilleren"));

        measurements.afib_percentage = Some(2.0);
        let report = generate_holter_report(&measurements, &metrics(&measurements));
        assert!(report.contains("incidentele episoden van atriumfibrilleren"));
        assert!(report.contains("(2% van de tijd)"));
    }

    #[test]
    fn test_report_no_findings_fallback() {
        let measurements = HolterMeasurements {
            recording_duration_hours: Some(24),
            avg_hr: Some(70),
            min_hr: Some(55),
            max_hr: Some(110),
            ..Default::default()
        };
        let metrics = compute_holter_metrics(&measurements);
        let report = generate_holter_report(&measurements, &metrics);

        assert!(report.contains("Geen significante ritmestoornissen waargenomen."));
        assert!(report.contains("- Geen afwijkingen geregistreerd tijdens Holter-monitoring"));
    }

    #[test]
    fn test_report_structure_with_findings() {
        let mut measurements = test_measurements();
        measurements.afib_percentage = Some(5.0);
        measurements.ves_count = Some(1200);
        measurements.av_block_type = Some("AV-blok type Mobitz I".to_string());

        let metrics = compute_holter_metrics(&measurements);
        let report = generate_holter_report(&measurements, &metrics);

        assert!(report.starts_with("Holter-monitoring geregistreerd op 01-02-2024."));
        assert!(report.contains("Hartfrequentie: gemiddelde hartfrequentie 74 bpm, minimum 48 bpm, maximum 132 bpm."));
        assert!(report.contains("frequente ventriculaire extrasystolen (VES: 1200)"));
        assert!(report.contains("Er werd AV-blok type Mobitz I vastgesteld."));
        assert!(report.contains("- Atriumfibrilleren gedocumenteerd"));
        assert!(report.contains("- AV-blok type Mobitz I"));
    }
}
