//! CIED follow-up report builder.

use crate::entities::cied::{CiedReportInput, LeadMeasurements};

/// Join items the way a Dutch sentence lists them ("a, b en c")
fn join_nl(items: &[String]) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    match items.len() {
        0 => String::new(),
        1 => items[0].to_string(),
        2 => format!("{} en {}", items[0], items[1]),
        _ => format!("{} en {}", items[..items.len() - 1].join(", "), items[items.len() - 1]),
    }
}

/// Parse a percentage or integer from free text ("98", "98.4 %")
fn parse_int(value: Option<&str>) -> Option<i64> {
    let txt = value?.trim().trim_end_matches('%').trim();
    if txt.is_empty() {
        return None;
    }
    txt.parse::<f64>().ok().map(|v| v as i64)
}

/// Trimmed text with the programmer's "n.v.t." placeholder as default
fn clean_str(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(txt) if !txt.is_empty() => txt.to_string(),
        _ => "n.v.t.".to_string(),
    }
}

fn optional_str(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Measurement line for one lead
fn lead_line(label: &str, fields: &LeadMeasurements) -> String {
    let sensing = clean_str(fields.sensing.as_deref());
    let threshold_v = clean_str(fields.threshold_v.as_deref());
    let threshold_ms = clean_str(fields.threshold_ms.as_deref());
    let impedance = clean_str(fields.impedance.as_deref());
    let polarity = fields.polarity.as_deref().unwrap_or("n.v.t.");
    let stability = if fields.stable == Some(false) {
        "onstabiel"
    } else {
        "stabiel"
    };
    let location_txt = optional_str(fields.location.as_deref())
        .map(|location| format!(" Locatie: {}.", location))
        .unwrap_or_default();

    format!(
        "{}: sensing {} mV, drempel {} V @ {} ms ({}), impedantie {} Ω, {}.{}",
        label, sensing, threshold_v, threshold_ms, polarity, impedance, stability, location_txt
    )
}

/// Return the textual report for a CIED follow-up
pub fn generate_cied_report(ctx: &CiedReportInput) -> String {
    let device_type = ctx.device_type.as_deref().unwrap_or("apparaat");
    let device_brand = ctx.device_brand.as_deref().unwrap_or("");

    let prog_str = match (ctx.programming_mode.as_deref(), ctx.lower_rate, ctx.upper_tracking) {
        (Some(mode), Some(lower), Some(upper)) if !mode.is_empty() => {
            format!("{}-{}/{}", mode, lower, upper)
        }
        _ => String::new(),
    };

    let mut first_sentence = format!("Correcte werking van {} ({})", device_type, device_brand);
    if !prog_str.is_empty() {
        first_sentence.push_str(&format!(" modus {}", prog_str));
    }
    match ctx.indication_text.as_deref().filter(|s| !s.is_empty()) {
        Some(indication) => first_sentence.push_str(&format!(" ter behandeling van {}.", indication)),
        None => first_sentence.push('.'),
    }

    let mut meet_lines: Vec<String> = Vec::new();

    if ctx.lead_ra && ctx.atrial_fields.has_values() {
        meet_lines.push(lead_line("Atrium", &ctx.atrial_fields));
    }
    if ctx.lead_rv && ctx.vent_fields.has_values() {
        meet_lines.push(lead_line("Ventrikel", &ctx.vent_fields));
    }
    if ctx.lead_lv && ctx.lv_fields.has_values() {
        meet_lines.push(lead_line("LV", &ctx.lv_fields));
    }

    let mut pacing_parts: Vec<String> = Vec::new();
    if let Some(ap) = parse_int(ctx.atrial_pacing_pct.as_deref()) {
        pacing_parts.push(format!("Atrium {}%", ap));
    }
    if let Some(vp) = parse_int(ctx.ventricular_pacing_pct.as_deref()) {
        pacing_parts.push(format!("Ventrikel {}%", vp));
    }
    if let Some(lp) = parse_int(ctx.lv_pacing_pct.as_deref()) {
        pacing_parts.push(format!("LV {}%", lp));
    }
    if !pacing_parts.is_empty() {
        meet_lines.push(format!("Pacing percentages: {}.", pacing_parts.join(", ")));
    }

    if let Some(sensed) = parse_int(ctx.sensed_av_delay.as_deref()) {
        match ctx.suggested_sensed_av {
            Some(suggested) => meet_lines.push(format!(
                "Sensed AV delay: {} ms (Rate-adaptive AV delay at peak UTR: {} ms).",
                sensed, suggested
            )),
            None => meet_lines.push(format!("Sensed AV delay: {} ms.", sensed)),
        }
    }
    if let Some(paced) = parse_int(ctx.paced_av_delay.as_deref()) {
        match ctx.suggested_paced_av {
            Some(suggested) => meet_lines.push(format!(
                "Paced AV delay: {} ms (Rate-adaptive AV delay at peak UTR: {} ms).",
                paced, suggested
            )),
            None => meet_lines.push(format!("Paced AV delay: {} ms.", paced)),
        }
    }

    let mut conclusion_parts: Vec<String> = Vec::new();
    conclusion_parts.push(first_sentence);

    let sp_parts = vec![
        if ctx.sensing_ok { "sensing".to_string() } else { "sensing: afwijkend".to_string() },
        if ctx.pacing_ok { "pacing".to_string() } else { "pacing: afwijkend".to_string() },
        if ctx.impedance_ok {
            "impedantie".to_string()
        } else {
            "impedantie: afwijkend".to_string()
        },
    ];
    conclusion_parts.push(format!("Goede en stabiele waardes voor {}.", join_nl(&sp_parts)));

    match ctx.egm_events.as_deref().filter(|e| !e.is_empty() && *e != "Geen events") {
        Some(events) => conclusion_parts.push(format!("De EGM uitlezing toont: {}.", events)),
        None => conclusion_parts.push("De EGM uitlezing toont geen events.".to_string()),
    }

    if ctx.settings_changed {
        conclusion_parts.push("Instellingen gewijzigd tijdens follow-up.".to_string());
    } else {
        conclusion_parts.push("Instellingen ongewijzigd.".to_string());
    }

    if ctx.patient_dependent {
        conclusion_parts.push("Patiënt is pacemakerafhankelijk.".to_string());
    } else {
        conclusion_parts.push("Patiënt is niet afhankelijk.".to_string());
    }

    let battery_txt = ctx
        .battery_status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Batterijstatus niet gerapporteerd");
    conclusion_parts.push(format!("Batterij: {}.", battery_txt));

    let mut final_parts: Vec<String> = Vec::new();
    if !meet_lines.is_empty() {
        final_parts.push("Meetwaarden:".to_string());
        final_parts.extend(meet_lines);
        final_parts.push(String::new());
    }
    final_parts.push("Conclusie:".to_string());
    final_parts.extend(conclusion_parts);

    final_parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> CiedReportInput {
        CiedReportInput {
            device_type: Some("DDD pacemaker".to_string()),
            device_brand: Some("Medtronic Azure".to_string()),
            programming_mode: Some("DDD".to_string()),
            lower_rate: Some(60),
            upper_tracking: Some(130),
            indication_text: Some("sick sinus syndroom".to_string()),
            lead_ra: true,
            lead_rv: true,
            sensing_ok: true,
            pacing_ok: true,
            impedance_ok: true,
            atrial_fields: LeadMeasurements {
                sensing: Some("3.2".to_string()),
                impedance: Some("520".to_string()),
                threshold_v: Some("0.75".to_string()),
                threshold_ms: Some("0.4".to_string()),
                polarity: Some("bipolair".to_string()),
                ..Default::default()
            },
            vent_fields: LeadMeasurements {
                sensing: Some("11.0".to_string()),
                impedance: Some("480".to_string()),
                threshold_v: Some("0.5".to_string()),
                threshold_ms: Some("0.4".to_string()),
                polarity: Some("bipolair".to_string()),
                ..Default::default()
            },
            atrial_pacing_pct: Some("12".to_string()),
            ventricular_pacing_pct: Some("3".to_string()),
            battery_status: Some("ERI over 8 jaar".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_join_nl() {
        assert_eq!(join_nl(&[]), "");
        assert_eq!(join_nl(&["sensing".to_string()]), "sensing");
        assert_eq!(
            join_nl(&["sensing".to_string(), "pacing".to_string()]),
            "sensing en pacing"
        );
        assert_eq!(
            join_nl(&[
                "sensing".to_string(),
                "pacing".to_string(),
                "impedantie".to_string()
            ]),
            "sensing, pacing en impedantie"
        );
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Some("98")), Some(98));
        assert_eq!(parse_int(Some("98.4 %")), Some(98));
        assert_eq!(parse_int(Some("")), None);
        assert_eq!(parse_int(None), None);
    }

    #[test]
    fn test_report_header_and_leads() {
        let report = generate_cied_report(&test_input());

        assert!(report.contains(
            "Correcte werking van DDD pacemaker (Medtronic Azure) modus DDD-60/130 ter behandeling van sick sinus syndroom."
        ));
        assert!(report.contains(
            "Atrium: sensing 3.2 mV, drempel 0.75 V @ 0.4 ms (bipolair), impedantie 520 Ω, stabiel."
        ));
        assert!(report.contains("Ventrikel: sensing 11.0 mV"));
        assert!(report.contains("Pacing percentages: Atrium 12%, Ventrikel 3%."));
    }

    #[test]
    fn test_report_conclusion_defaults() {
        let report = generate_cied_report(&test_input());

        assert!(report.contains("Goede en stabiele waardes voor sensing, pacing en impedantie."));
        assert!(report.contains("De EGM uitlezing toont geen events."));
        assert!(report.contains("Instellingen ongewijzigd."));
        assert!(report.contains("Patiënt is niet afhankelijk."));
        assert!(report.contains("Batterij: ERI over 8 jaar."));
    }

    #[test]
    fn test_report_flags_abnormal_values() {
        let mut input = test_input();
        input.sensing_ok = false;
        input.settings_changed = true;
        input.patient_dependent = true;
        input.egm_events = Some("1 AT/AF episode".to_string());

        let report = generate_cied_report(&input);
        assert!(report.contains("sensing: afwijkend, pacing en impedantie"));
        assert!(report.contains("De EGM uitlezing toont: 1 AT/AF episode."));
        assert!(report.contains("Instellingen gewijzigd tijdens follow-up."));
        assert!(report.contains("Patiënt is pacemakerafhankelijk."));
    }

    #[test]
    fn test_report_skips_leads_without_values() {
        let mut input = test_input();
        input.lead_lv = true; // present but without measurements

        let report = generate_cied_report(&input);
        assert!(!report.contains("LV: sensing"));
    }

    #[test]
    fn test_report_without_measurements_has_no_meetwaarden_block() {
        let input = CiedReportInput {
            device_type: Some("ILR".to_string()),
            device_brand: Some("Reveal LINQ".to_string()),
            ..Default::default()
        };
        let report = generate_cied_report(&input);
        assert!(!report.contains("Meetwaarden:"));
        assert!(report.starts_with("Conclusie:"));
        assert!(report.contains("Batterijstatus niet gerapporteerd"));
    }

    #[test]
    fn test_av_delay_lines() {
        let mut input = test_input();
        input.sensed_av_delay = Some("150".to_string());
        input.suggested_sensed_av = Some(120);
        input.paced_av_delay = Some("180".to_string());

        let report = generate_cied_report(&input);
        assert!(report.contains(
            "Sensed AV delay: 150 ms (Rate-adaptive AV delay at peak UTR: 120 ms)."
        ));
        assert!(report.contains("Paced AV delay: 180 ms."));
    }
}
