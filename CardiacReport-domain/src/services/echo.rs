//! Echo report builder and guideline-driven recommendation engine.

use crate::calculations::{
    aortic_stenosis_grade, low_flow_low_gradient, regurgitation_severity, AortaSegment,
};
use crate::entities::echo::EchoMeasurements;

use super::fmt_num;

/// Index a value against BSA with two decimals (valve areas, SVi)
fn indexed2(value: Option<f64>, bsa: Option<f64>) -> Option<f64> {
    match (value, bsa) {
        (Some(v), Some(bsa)) if bsa > 0.0 => Some((v / bsa * 100.0).round() / 100.0),
        _ => None,
    }
}

/// Index a value against BSA with one decimal (diameters, volumes)
fn indexed1(value: Option<f64>, bsa: Option<f64>) -> Option<f64> {
    match (value, bsa) {
        (Some(v), Some(bsa)) if bsa > 0.0 => Some((v / bsa * 10.0).round() / 10.0),
        _ => None,
    }
}

/// Stenosis label for the report: the clinician's choice, or the automatic
/// grading from the quantitative measurements.
fn ak_stenose_label(ctx: &EchoMeasurements) -> String {
    if let Some(label) = ctx.ak_stenose.as_deref().filter(|s| !s.trim().is_empty()) {
        return label.to_string();
    }
    let ava_idx = indexed2(ctx.ava, ctx.bsa());
    aortic_stenosis_grade(ctx.ak_vmax, ctx.ak_mean, ctx.ava, ava_idx).to_string()
}

/// Generate the narrative echo report from collected measurements
pub fn generate_echo_report(ctx: &EchoMeasurements) -> String {
    let bsa = ctx.bsa();
    let mut report: Vec<String> = Vec::new();

    // Left ventricle
    let mut lv_parts: Vec<String> = Vec::new();

    let hypertrophy_label = ctx
        .lv_hypertrofie_choice
        .as_deref()
        .or(ctx.lv_hypertrofie_auto.as_deref());
    if let Some(label) = hypertrophy_label {
        lv_parts.push(label.to_string());
    }

    let mut meas: Vec<String> = Vec::new();
    if let Some(ivsd) = ctx.ivsd {
        meas.push(format!("IVSd {} mm", fmt_num(ivsd)));
    }
    if let Some(lvpw) = ctx.lvpw {
        meas.push(format!("LVPWd {} mm", fmt_num(lvpw)));
    }
    if let Some(mass_index) = ctx.mass_index {
        meas.push(format!("LVMI {} g/m²", fmt_num(mass_index)));
    }
    if let Some(rwt) = ctx.rwt {
        meas.push(format!("RWT {}", fmt_num(rwt)));
    }
    if !meas.is_empty() {
        lv_parts.push(format!("({})", meas.join(", ")));
    }

    let dil_label = ctx
        .lv_dilatatie_choice
        .as_deref()
        .or(ctx.lv_dilatatie_auto.as_deref());
    if let Some(label) = dil_label {
        if let Some(lvidd) = ctx.lvidd {
            lv_parts.push(format!("{} (LVIDd {} mm)", label, fmt_num(lvidd)));
        } else {
            lv_parts.push(label.to_string());
        }
    }

    let mut syst_txt = ctx.systolic_option.clone().unwrap_or_default();
    if let Some(lvef) = ctx.lvef {
        syst_txt = format!("{} (LVEF {}%)", syst_txt, fmt_num(lvef));
    }
    if !syst_txt.is_empty() {
        lv_parts.push(format!("met {}", syst_txt));
    }

    report.push(format!("LV: {}.", lv_parts.join(", ")));

    // Diastolic function
    let mut diastolic_line = ctx.lv_diastolische_functie.clone().unwrap_or_default();
    let mut extras: Vec<String> = Vec::new();
    if let Some(ea) = ctx.ea {
        extras.push(format!("E/A {:.1}", ea));
    }
    if let Some(ee) = ctx.ee {
        extras.push(format!("E/e' {:.1}", ee));
    }
    if !extras.is_empty() {
        diastolic_line = format!("{} ({})", diastolic_line, extras.join(", "));
    }
    report.push(format!("{}.", diastolic_line));

    // Left atrium
    let la_label = ctx
        .la_choice
        .as_deref()
        .or(ctx.la_suggested.as_deref())
        .unwrap_or("Niet gedilateerd");
    if let Some(lavi) = ctx.lavi {
        report.push(format!("LA: {}. (LAVI {} mL/m²).", la_label, fmt_num(lavi)));
    } else {
        report.push(format!("LA: {}.", la_label));
    }

    // Aorta
    let segments = [
        (AortaSegment::Annulus, ctx.aoa),
        (AortaSegment::SinusValsalva, ctx.aosv),
        (AortaSegment::SinotubularJunction, ctx.aostj),
        (AortaSegment::Ascending, ctx.ascao),
    ];

    let mut ao_items: Vec<String> = Vec::new();
    let mut ao_abnormals: Vec<String> = Vec::new();
    for (segment, value) in segments {
        let Some(value) = value else { continue };
        match indexed1(Some(value), bsa) {
            Some(idx) => {
                ao_items.push(format!(
                    "{} {} mm, {:.1} mm/m²",
                    segment.label(),
                    value.round() as i64,
                    idx
                ));
                if idx > segment.indexed_cutoff() {
                    ao_abnormals.push(format!(
                        "{} ({}) is gedilateerd ({} mm, {:.1} mm/m²).",
                        segment.full_name(),
                        segment.label(),
                        value.round() as i64,
                        idx
                    ));
                }
            }
            None => ao_items.push(format!("{} {} mm", segment.label(), value.round() as i64)),
        }
    }

    if !ao_items.is_empty() {
        let overall = if ao_abnormals.is_empty() {
            "Aorta niet gedilateerd"
        } else {
            "Aorta gedilateerd"
        };
        report.push(format!("AO: {} ({}).", overall, ao_items.join(", ")));
        report.extend(ao_abnormals);
    }

    report.push(String::new());

    // Right heart
    let mut rv_label = ctx.rv_hypertrofie.clone().unwrap_or_default();
    let mut detail_parts: Vec<String> = Vec::new();
    if let Some(rvfwd) = ctx.rvfwd {
        detail_parts.push(format!("RVFWd {}mm", rvfwd.round() as i64));
    }
    if let Some(rvbd) = ctx.rvbd {
        detail_parts.push(format!("RVBDd {}mm", rvbd.round() as i64));
    }
    if let Some(rvmd) = ctx.rvmd {
        detail_parts.push(format!("RVMDd {}mm", rvmd.round() as i64));
    }
    if !detail_parts.is_empty() {
        rv_label = format!("{} ({})", rv_label, detail_parts.join("; "));
    }

    let rv_dilatatie = ctx.rv_dilatatie.as_deref().unwrap_or("");
    let rv_functie = ctx.rv_functie.as_deref().unwrap_or("");
    let pasp_text = ctx.pasp_text.as_deref().unwrap_or("");
    if let Some(tapse) = ctx.tapse {
        report.push(format!(
            "RV: {}, {} met {} (TAPSE {} mm). {}",
            rv_label,
            rv_dilatatie,
            rv_functie,
            fmt_num(tapse),
            pasp_text
        ));
    } else {
        report.push(format!(
            "RV: {}, {} met {}. {}",
            rv_label, rv_dilatatie, rv_functie, pasp_text
        ));
    }

    let ra_dilatatie = ctx.ra_dilatatie.as_deref().unwrap_or("");
    if let Some(ravi) = ctx.ravi {
        report.push(format!("RA: {}. (RAVI {} mL/m²).", ra_dilatatie, fmt_num(ravi)));
    } else {
        report.push(format!("RA: {}.", ra_dilatatie));
    }

    report.push(String::new());

    // Aortic valve
    let mut ak_meas_parts: Vec<String> = Vec::new();
    if let Some(vmax) = ctx.ak_vmax {
        ak_meas_parts.push(format!("Vmax {:.2} m/s", vmax));
    }
    if let Some(mean) = ctx.ak_mean {
        ak_meas_parts.push(format!("MeanG {} mmHg", mean.round() as i64));
    }
    let ava_idx = indexed2(ctx.ava, bsa);
    if let Some(ava) = ctx.ava {
        match ava_idx {
            Some(idx) => ak_meas_parts.push(format!("AVA {:.2} cm², {:.2} cm²/m²", ava, idx)),
            None => ak_meas_parts.push(format!("AVA {:.2} cm²", ava)),
        }
    }
    let svi = indexed1(ctx.sv, bsa);
    if let Some(sv) = ctx.sv {
        match svi {
            Some(svi) => {
                ak_meas_parts.push(format!("SV {} mL, SVi {:.1} mL/m²", sv.round() as i64, svi))
            }
            None => ak_meas_parts.push(format!("SV {} mL", sv.round() as i64)),
        }
    }

    let lflg_note = if low_flow_low_gradient(ctx.ava, ava_idx, ctx.ak_mean, svi) {
        " (low-flow low-gradient patroon: AVA <1.0 cm² of indexed <0.6 cm²/m² met mean <40 mmHg en SVi <=35 mL/m²)"
    } else {
        ""
    };

    let mut ak_line = format!(
        "AK: {}. {}. {}{}",
        ctx.ak_morfologie.as_deref().unwrap_or(""),
        ctx.ak_calcificatie.as_deref().unwrap_or(""),
        ak_stenose_label(ctx),
        lflg_note
    );
    if !ak_meas_parts.is_empty() {
        ak_line.push_str(&format!(" ({})", ak_meas_parts.join(", ")));
    }
    ak_line.push_str(&format!(". {}.", ctx.ak_regurgitatie.as_deref().unwrap_or("")));
    report.push(ak_line);

    // Mitral valve
    let mut mk_meas_parts: Vec<String> = Vec::new();
    if let Some(eroa) = ctx.mk_eroa {
        mk_meas_parts.push(format!("EROA {:.2} cm²", eroa));
    }
    if let Some(regvol) = ctx.mk_regvol {
        mk_meas_parts.push(format!("RegVol {} mL", regvol.round() as i64));
    }
    if let Some(rf) = ctx.mk_rf {
        mk_meas_parts.push(format!("RF {:.0}%", rf));
    }
    let mut mk_line = format!(
        "MK: Normale morfologie. {}.",
        ctx.mk_regurgitatie.as_deref().unwrap_or("")
    );
    if !mk_meas_parts.is_empty() {
        mk_line.pop();
        mk_line.push_str(&format!(" ({}).", mk_meas_parts.join(", ")));
    }
    report.push(mk_line);

    // Tricuspid valve
    let mut tk_meas_parts: Vec<String> = Vec::new();
    if let Some(eroa) = ctx.tk_eroa {
        tk_meas_parts.push(format!("EROA {:.2} cm²", eroa));
    }
    if let Some(regvol) = ctx.tk_regvol {
        tk_meas_parts.push(format!("RegVol {} mL", regvol.round() as i64));
    }
    if let Some(rf) = ctx.tk_rf {
        tk_meas_parts.push(format!("RF {:.0}%", rf));
    }
    if let Some(vcw) = ctx.tk_vcw {
        tk_meas_parts.push(format!("VCW {:.2} cm", vcw));
    }
    let mut tk_line = format!(
        "TK: Normale morfologie. {}.",
        ctx.tk_regurgitatie.as_deref().unwrap_or("")
    );
    if !tk_meas_parts.is_empty() {
        tk_line.pop();
        tk_line.push_str(&format!(" ({}).", tk_meas_parts.join(", ")));
    }
    report.push(tk_line);

    // Pulmonary valve
    let mut pk_meas_parts: Vec<String> = Vec::new();
    if let Some(eroa) = ctx.pk_eroa {
        pk_meas_parts.push(format!("EROA {:.2} cm²", eroa));
    }
    if let Some(regvol) = ctx.pk_regvol {
        pk_meas_parts.push(format!("RegVol {} mL", regvol.round() as i64));
    }
    if let Some(rf) = ctx.pk_rf {
        pk_meas_parts.push(format!("RF {:.0}%", rf));
    }
    if let Some(dt) = ctx.pk_dt_regjet {
        pk_meas_parts.push(format!("DT {} ms", dt.round() as i64));
    }
    if let Some(pht) = ctx.pk_pht_regjet {
        pk_meas_parts.push(format!("PHT {} ms", pht.round() as i64));
    }
    if let Some(pr_index) = ctx.pk_pr_index {
        pk_meas_parts.push(format!("PR-index {:.2}", pr_index));
    }

    let pk_regurgitatie = ctx.pk_regurgitatie.as_deref().unwrap_or("");
    if pk_meas_parts.is_empty() {
        report.push(format!("PK: Normale morfologie. {}.", pk_regurgitatie));
    } else {
        report.push(format!(
            "PK: Normale morfologie. {} ({}).",
            pk_regurgitatie,
            pk_meas_parts.join(", ")
        ));
    }

    report.push("Pericardium is normaal zonder effusie.".to_string());
    report.push("Endocardium geen tekens van infectie.".to_string());
    report.push(format!(
        "IVC is {} {}. CVD bedraagt {} mmHg.",
        ctx.ivc_dilatatie.as_deref().unwrap_or(""),
        ctx.ivc_variatie.as_deref().unwrap_or(""),
        ctx.cvd.as_deref().unwrap_or("")
    ));

    report.join("\n")
}

/// Return guideline-driven recommendations for the current study
pub fn generate_guideline_recommendations(ctx: &EchoMeasurements) -> Vec<String> {
    let bsa = ctx.bsa();
    let mut recs: Vec<String> = Vec::new();

    let lvef_val = ctx.lvef;
    let lvids_v = ctx.lvids;
    let lvesdi_v = indexed1(lvids_v, bsa);
    let lavi_v = indexed1(ctx.la_volume, bsa);
    let pasp_v = ctx.pasp_raw;

    let ak_vmax = ctx.ak_vmax;
    let ak_mean_g = ctx.ak_mean;
    let ak_ava_v = ctx.ava;
    let ak_ava_idx_v = indexed2(ak_ava_v, bsa);
    let svi_v = indexed1(ctx.sv, bsa);

    let mk_sev = regurgitation_severity(ctx.mk_eroa, ctx.mk_regvol, ctx.mk_rf);
    let mk_label = ctx.mk_regurgitatie.as_deref().unwrap_or("");
    let severe_mr = mk_label.contains("Ernstige mitralis regurgitatie") || mk_sev == 3;

    let ak_stenose = ctx.ak_stenose.as_deref().unwrap_or("");
    let severe_as = ak_stenose.contains("Ernstige stenose")
        || ak_vmax.is_some_and(|v| v >= 4.0)
        || ak_mean_g.is_some_and(|g| g >= 40.0)
        || ak_ava_v.is_some_and(|a| a < 1.0)
        || ak_ava_idx_v.is_some_and(|a| a < 0.6);

    let lflg = low_flow_low_gradient(ak_ava_v, ak_ava_idx_v, ak_mean_g, svi_v);

    if severe_mr {
        recs.push("Ernstige primaire mitralisregurgitatie vastgesteld.".to_string());
        if ctx.mr_symptomatic {
            recs.push(
                "Mitralisklepchirurgie is aangewezen bij ernstige primaire MR met symptomen (I-B)."
                    .to_string(),
            );
        }
        if lvef_val.is_some_and(|v| v <= 60.0) {
            recs.push("Chirurgie aangewezen: LVEF ≤60% (I-B).".to_string());
        }
        if lvids_v.is_some_and(|v| v > 40.0) {
            recs.push("Chirurgie aangewezen: LVESD >40 mm (I-B).".to_string());
        }
        if lvesdi_v.is_some_and(|v| v >= 20.0) {
            recs.push("Chirurgie aangewezen: LVESDi ≥20 mm/m² (I-B).".to_string());
        }
        if pasp_v.is_some_and(|v| v > 50.0) {
            recs.push("Pulmonale hypertensie met sPAP >50 mmHg (IIa-B).".to_string());
        }
        if lavi_v.is_some_and(|v| v > 60.0) {
            recs.push("LA dilatatie (LAVI >60 mL/m²) (IIa-B).".to_string());
        }
        if ctx.af_present {
            recs.push("Voorkamerfibrillatie bij ernstige MR (IIa-B).".to_string());
        }
        recs.push("Chirurgisch klepherstel heeft de voorkeur (I-B).".to_string());
        recs.push("Minimaal invasieve klepchirurgie kan overwogen worden (IIb).".to_string());
        if ctx.mr_symptomatic {
            recs.push(
                "TEER kan worden overwogen bij symptomatische ernstige MR met hoog chirurgisch risico en geschikte anatomie."
                    .to_string(),
            );
        }
    }

    if severe_as {
        recs.push("Ernstige aortaklepstenose vastgesteld.".to_string());
        if ctx.as_symptomatic {
            recs.push("Interventie aangewezen bij symptomatische ernstige AS (I-B).".to_string());
        }
        if lflg {
            recs.push("Low-flow low-gradient patroon met ernstig stenoseprofiel.".to_string());
        }
        if let Some(lvef) = lvef_val {
            if lvef < 50.0 {
                recs.push(
                    "Interventie aangewezen bij LVEF <50% zonder andere oorzaak (I-B).".to_string(),
                );
            } else if lvef < 55.0 {
                recs.push(
                    "Interventie te overwegen bij LVEF <55% zonder andere oorzaak (IIa).".to_string(),
                );
            }
        }
        if ctx.as_sbp_drop {
            recs.push("Bloeddrukdaling >20 mmHg bij inspanning (IIa).".to_string());
        }
        if ak_mean_g.is_some_and(|g| g > 60.0) {
            recs.push("Zeer ernstige AS: mean gradiënt >60 mmHg (IIa).".to_string());
        }
        if ak_vmax.is_some_and(|v| v > 5.0) {
            recs.push("Zeer ernstige AS: Vmax >5.0 m/s (IIa).".to_string());
        }
        if let Some(calc) = ctx.as_calc_score {
            let threshold = if ctx.patient.sex.is_male() { 2000.0 } else { 1200.0 };
            if calc > threshold {
                recs.push("Ernstige calcificatie ondersteunt interventie (IIa).".to_string());
            }
        }
        if ctx.as_vmax_progression.is_some_and(|p| p > 0.3) {
            recs.push("Vmax-progressie >0.3 m/s/jaar (IIa).".to_string());
        }
        if ctx.as_bnp_elevated {
            recs.push("Verhoogde BNP/NT-proBNP ondersteunt interventie (IIa).".to_string());
        }

        if let Some(age) = ctx.patient.leeftijd {
            if age as i64 >= 70 {
                recs.push("TAVI aanbevolen bij geschikte anatomie (I-A).".to_string());
            } else {
                recs.push(
                    "SAVR aanbevolen bij leeftijd <70 jaar en laag operatierisico (I-B). TAVI kan worden overwogen afhankelijk van anatomie/risico (IIa/IIb)."
                        .to_string(),
                );
            }
        }
    }

    // Aorta surveillance ladder, driven by the widest measured segment
    let ao_values: Vec<f64> = [ctx.aoa, ctx.aosv, ctx.aostj, ctx.ascao]
        .into_iter()
        .flatten()
        .collect();
    if !ao_values.is_empty() {
        let max_ao = ao_values.iter().cloned().fold(f64::MIN, f64::max);
        let max_ao_idx = bsa.map(|bsa| {
            ao_values
                .iter()
                .map(|v| (v / bsa * 10.0).round() / 10.0)
                .fold(f64::MIN, f64::max)
        });
        let bicuspid = ctx
            .ak_morfologie
            .as_deref()
            .is_some_and(|m| m.to_lowercase().contains("bicus"));

        if max_ao >= 55.0 {
            recs.push("Aorta ascendens ≥55 mm: chirurgie aanbevolen (I-B).".to_string());
        } else if max_ao >= 50.0 {
            if bicuspid || ctx.patient.sex.is_male() {
                recs.push(
                    "Aorta ascendens ≥50 mm: overweeg chirurgie (IIa), zeker bij bicuspide anatomie of man."
                        .to_string(),
                );
            } else {
                recs.push("Aorta ascendens ≥50 mm: overweeg chirurgie (IIa).".to_string());
            }
        }
        if max_ao >= 45.0 && (ak_stenose.contains("Ernstige stenose") || severe_as) {
            recs.push(
                "Bij indicatie voor klepchirurgie en AscAo ≥45 mm: gelijktijdige aortachirurgie overwegen (IIa)."
                    .to_string(),
            );
        }
        if (45.0..50.0).contains(&max_ao) {
            recs.push("AscAo 45-49 mm: controle CT/MRI/echo om de 6-12 maanden.".to_string());
        } else if (40.0..45.0).contains(&max_ao) {
            recs.push("AscAo 40-44 mm: controle beeldvorming jaarlijks.".to_string());
        } else if max_ao_idx.is_some_and(|idx| idx > 17.0) && max_ao < 40.0 {
            recs.push(
                "AscAo index >17 mm/m²: overweeg jaarlijkse opvolging ondanks absolute <40 mm."
                    .to_string(),
            );
        } else if max_ao >= 37.0 {
            recs.push("AscAo 37-39 mm: herbeoordeling binnen 2-3 jaar indien stabiel.".to_string());
        }
        if (30.0..40.0).contains(&max_ao) {
            recs.push("Aorta 30-40 mm: TTE elke 3 jaar.".to_string());
        }
        if (40.0..=44.0).contains(&max_ao) {
            recs.push(
                "Aorta 40-44 mm: baseline CT/MR aorta + TTE controle in 1 jaar; bij groei >3 mm/jaar bevestigen met CT/MR en daarna elke 6 maanden TTE; bij groei <3 mm/jaar TTE elke 2 jaar."
                    .to_string(),
            );
        }
        if (45.0..=49.0).contains(&max_ao) {
            recs.push("Aorta 45-49 mm: baseline CT/MR aorta en TTE elke 6 maanden.".to_string());
        }
        if (50.0..=52.0).contains(&max_ao) {
            recs.push(
                "Aorta 50-52 mm: baseline CT/MR aorta; bij hoog-risico kenmerken (familiale aorta-event, ongecontroleerde hypertensie, leeftijd <50 j) kan chirurgie overwogen worden (IIb); anders elke 6 maanden nieuwe beeldvorming; bij groei >3 mm/jaar chirurgie overwegen."
                    .to_string(),
            );
        }
        if (50.0..=54.0).contains(&max_ao) {
            recs.push(
                "Aorta 50-54 mm: baseline CT/MR aorta; bij wortel-fenotype en bicuspide klep chirurgie (I); bij wortel-fenotype en tricuspide klep chirurgie te overwegen (IIb)."
                    .to_string(),
            );
        }
        if max_ao > 55.0 {
            recs.push("Aorta >55 mm: chirurgie (I).".to_string());
        }
        recs.push(
            "Bij aorta-aneurysma of thoracale dissectie met HTAD-risicofactoren genetische testing aangewezen (<60 j, geen klassieke risicofactoren, familiaal plots overlijden, andere aneurysmata, familiale TAD, syndromale kenmerken Marfan/Loeys-Dietz/Ehlers-Danlos)."
                .to_string(),
        );
    }

    recs
}

/// Return a compact echo summary suitable for the brief letter
pub fn summarize_echo_for_brief(ctx: &EchoMeasurements) -> String {
    let bsa = ctx.bsa();
    let mut parts: Vec<String> = Vec::new();

    let mut systolic_parts: Vec<String> = Vec::new();
    if let Some(option) = ctx.systolic_option.as_deref() {
        systolic_parts.push(option.to_string());
    }
    if let Some(lvef) = ctx.lvef {
        systolic_parts.push(format!("LVEF {:.0}%", lvef));
    }
    if !systolic_parts.is_empty() {
        parts.push(systolic_parts.join(" "));
    }

    if let Some(label) = ctx.lv_dilatatie_choice.as_deref() {
        parts.push(format!("LV: {}.", label));
    }
    if let Some(label) = ctx.la_choice.as_deref().or(ctx.la_suggested.as_deref()) {
        parts.push(format!("LA: {}.", label));
    }

    match ctx.ak_stenose.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(label) => parts.push(format!("AK: {}.", label)),
        None => {
            let ava_idx = indexed2(ctx.ava, bsa);
            let auto = aortic_stenosis_grade(ctx.ak_vmax, ctx.ak_mean, ctx.ava, ava_idx);
            parts.push(format!("AK: {}.", auto));
        }
    }
    if let Some(label) = ctx.mk_regurgitatie.as_deref() {
        parts.push(format!("MK: {}.", label));
    }
    if let Some(label) = ctx.tk_regurgitatie.as_deref() {
        parts.push(format!("TK: {}.", label));
    }
    if let Some(label) = ctx.pk_regurgitatie.as_deref() {
        parts.push(format!("PK: {}.", label));
    }

    if let Some(pasp) = ctx.pasp_text.as_deref() {
        parts.push(pasp.trim().to_string());
    }

    let text = parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        "Geen echogegevens beschikbaar.".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::{PatientContext, Sex};

    fn base_echo() -> EchoMeasurements {
        EchoMeasurements {
            patient: PatientContext {
                sex: Sex::Man,
                leeftijd: Some(65.0),
                bsa: Some(2.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_report_contains_lv_measurements() {
        let mut echo = base_echo();
        echo.lv_hypertrofie_choice = Some("Normotroof".to_string());
        echo.ivsd = Some(11.0);
        echo.lvpw = Some(10.0);
        echo.systolic_option = Some("goede globale en regionale systolische functie".to_string());
        echo.lvef = Some(60.0);

        let report = generate_echo_report(&echo);
        assert!(report.starts_with("LV: Normotroof, (IVSd 11 mm, LVPWd 10 mm)"));
        assert!(report.contains("met goede globale en regionale systolische functie (LVEF 60%)"));
        assert!(report.contains("Pericardium is normaal zonder effusie."));
    }

    #[test]
    fn test_report_la_defaults_to_not_dilated() {
        let echo = base_echo();
        let report = generate_echo_report(&echo);
        assert!(report.contains("LA: Niet gedilateerd."));
    }

    #[test]
    fn test_report_flags_dilated_aorta_segment() {
        let mut echo = base_echo();
        // 42 mm at BSA 2.0 -> 21 mm/m², above the AscAo cut-off of 17
        echo.ascao = Some(42.0);

        let report = generate_echo_report(&echo);
        assert!(report.contains("AO: Aorta gedilateerd (AscAo 42 mm, 21.0 mm/m²)."));
        assert!(report.contains("Aorta ascendens (AscAo) is gedilateerd (42 mm, 21.0 mm/m²)."));
    }

    #[test]
    fn test_report_aorta_normal_when_indexed_below_cutoff() {
        let mut echo = base_echo();
        echo.ascao = Some(30.0);

        let report = generate_echo_report(&echo);
        assert!(report.contains("AO: Aorta niet gedilateerd (AscAo 30 mm, 15.0 mm/m²)."));
    }

    #[test]
    fn test_report_auto_grades_aortic_stenosis() {
        let mut echo = base_echo();
        echo.ak_vmax = Some(4.2);
        echo.ak_mean = Some(45.0);

        let report = generate_echo_report(&echo);
        assert!(report.contains("Ernstige stenose"));
        assert!(report.contains("Vmax 4.20 m/s, MeanG 45 mmHg"));
    }

    #[test]
    fn test_report_notes_low_flow_low_gradient() {
        let mut echo = base_echo();
        echo.ava = Some(0.9);
        echo.ak_mean = Some(30.0);
        echo.sv = Some(60.0); // SVi 30 at BSA 2.0

        let report = generate_echo_report(&echo);
        assert!(report.contains("low-flow low-gradient patroon"));
    }

    #[test]
    fn test_report_includes_valve_quantities() {
        let mut echo = base_echo();
        echo.mk_regurgitatie = Some("Milde mitralis regurgitatie".to_string());
        echo.mk_eroa = Some(0.15);
        echo.tk_vcw = Some(0.4);
        echo.pk_dt_regjet = Some(180.0);

        let report = generate_echo_report(&echo);
        assert!(report.contains("MK: Normale morfologie. Milde mitralis regurgitatie (EROA 0.15 cm²)."));
        assert!(report.contains("VCW 0.40 cm"));
        assert!(report.contains("DT 180 ms"));
    }

    #[test]
    fn test_recommendations_severe_mr() {
        let mut echo = base_echo();
        echo.mk_eroa = Some(0.45);
        echo.mr_symptomatic = true;
        echo.lvef = Some(55.0);

        let recs = generate_guideline_recommendations(&echo);
        assert!(recs.iter().any(|r| r.contains("Ernstige primaire mitralisregurgitatie")));
        assert!(recs.iter().any(|r| r.contains("met symptomen (I-B)")));
        assert!(recs.iter().any(|r| r.contains("LVEF ≤60%")));
        assert!(recs.iter().any(|r| r.contains("TEER")));
    }

    #[test]
    fn test_recommendations_severe_as_age_split() {
        let mut echo = base_echo();
        echo.ak_vmax = Some(4.5);
        echo.patient.leeftijd = Some(75.0);

        let recs = generate_guideline_recommendations(&echo);
        assert!(recs.iter().any(|r| r.contains("Ernstige aortaklepstenose")));
        assert!(recs.iter().any(|r| r.contains("TAVI aanbevolen")));

        echo.patient.leeftijd = Some(60.0);
        let recs = generate_guideline_recommendations(&echo);
        assert!(recs.iter().any(|r| r.contains("SAVR aanbevolen")));
    }

    #[test]
    fn test_recommendations_aorta_surveillance() {
        let mut echo = base_echo();
        echo.ascao = Some(46.0);

        let recs = generate_guideline_recommendations(&echo);
        assert!(recs.iter().any(|r| r.contains("AscAo 45-49 mm")));
        assert!(recs.iter().any(|r| r.contains("Aorta 45-49 mm")));
        assert!(recs.iter().any(|r| r.contains("HTAD-risicofactoren")));
    }

    #[test]
    fn test_recommendations_empty_without_findings() {
        let echo = base_echo();
        let recs = generate_guideline_recommendations(&echo);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_brief_summary_fallback() {
        let echo = base_echo();
        let summary = summarize_echo_for_brief(&echo);
        // Even an empty study gets the automatic AK grading line
        assert_eq!(summary, "AK: Geen stenose.");
    }

    #[test]
    fn test_brief_summary_composition() {
        let mut echo = base_echo();
        echo.systolic_option = Some("goede globale en regionale systolische functie".to_string());
        echo.lvef = Some(62.0);
        echo.mk_regurgitatie = Some("Milde mitralis regurgitatie".to_string());

        let summary = summarize_echo_for_brief(&echo);
        assert!(summary.contains("LVEF 62%"));
        assert!(summary.contains("MK: Milde mitralis regurgitatie."));
    }
}
