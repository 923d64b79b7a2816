//! Clinical calculations and classifications used across the cardiac report services.
//!
//! Thresholds follow the ASE/ESC reference values the reports are written
//! against; labels are the Dutch phrases that appear verbatim in the
//! generated text.

use crate::entities::patient::Sex;

/// Round to the given number of decimals
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Mosteller formula for body surface area (m²)
pub fn bsa_mosteller(length_cm: f64, weight_kg: f64) -> f64 {
    ((length_cm * weight_kg) / 3600.0).sqrt()
}

/// Classify septal thickness into hypertrophy grades
pub fn classify_ivsd(ivsd_mm: f64, sex: Sex) -> &'static str {
    match sex {
        Sex::Man => {
            if ivsd_mm <= 10.0 {
                "Normotroof"
            } else if ivsd_mm <= 13.0 {
                "Mild concentrisch hypertroof"
            } else if ivsd_mm <= 16.0 {
                "Matig concentrisch hypertroof"
            } else {
                "Ernstig concentrisch hypertroof"
            }
        }
        Sex::Vrouw => {
            if ivsd_mm <= 9.0 {
                "Normotroof"
            } else if ivsd_mm <= 12.0 {
                "Mild concentrisch hypertroof"
            } else if ivsd_mm <= 15.0 {
                "Matig concentrisch hypertroof"
            } else {
                "Ernstig concentrisch hypertroof"
            }
        }
    }
}

/// Classify left atrial volume index (mL/m²)
pub fn classify_lavi(lavi_ml_m2: f64) -> &'static str {
    if lavi_ml_m2 <= 34.0 {
        "Niet gedilateerd"
    } else if lavi_ml_m2 <= 41.0 {
        "Mild gedilateerd"
    } else if lavi_ml_m2 <= 48.0 {
        "Matig gedilateerd"
    } else {
        "Ernstig gedilateerd"
    }
}

/// Classify ejection fraction into severity grades
pub fn classify_lvef(lvef_pct: f64, sex: Sex) -> &'static str {
    if lvef_pct < 30.0 {
        return "Ernstig";
    }
    if lvef_pct <= 40.0 {
        return "Matig";
    }
    let normal_lower = match sex {
        Sex::Man => 52.0,
        Sex::Vrouw => 54.0,
    };
    if lvef_pct < normal_lower {
        "Mild"
    } else {
        "Normaal"
    }
}

/// Map an LVEF grade to the systolic-function phrase used in the report
pub fn lvef_to_systolic_option(lvef_class: &str) -> &'static str {
    match lvef_class {
        "Mild" => "mild verminderde globale systolische functie",
        "Matig" => "matig verminderde globale systolische functie",
        "Ernstig" => "ernstig verminderde globale systolische functie",
        _ => "goede globale en regionale systolische functie",
    }
}

/// Devereux LV mass (g) from wall thicknesses and cavity diameter in mm
pub fn compute_lv_mass_g(ivsd_mm: f64, lvidd_mm: f64, lvpwd_mm: f64) -> f64 {
    let ivs = ivsd_mm / 10.0;
    let lvidd = lvidd_mm / 10.0;
    let lvpw = lvpwd_mm / 10.0;
    let lv_mass = 0.8 * (1.04 * ((ivs + lvidd + lvpw).powi(3) - lvidd.powi(3))) + 0.6;
    round_to(lv_mass, 1)
}

/// Relative wall thickness
pub fn compute_rwt(lvpwd_mm: f64, lvidd_mm: f64) -> f64 {
    if lvidd_mm == 0.0 {
        return 0.0;
    }
    round_to((2.0 * lvpwd_mm) / lvidd_mm, 3)
}

/// LV mass index (g/m²) with its severity grade
pub fn lv_mass_index_severity(lv_mass_g: f64, bsa_m2: f64, sex: Sex) -> (f64, &'static str) {
    let mass_index = round_to(lv_mass_g / bsa_m2.max(0.1), 1);
    let severity = match sex {
        Sex::Man => {
            if mass_index < 115.0 {
                "Normaal"
            } else if mass_index <= 131.0 {
                "Mild"
            } else if mass_index <= 148.0 {
                "Matig"
            } else {
                "Ernstig"
            }
        }
        Sex::Vrouw => {
            if mass_index < 95.0 {
                "Normaal"
            } else if mass_index <= 108.0 {
                "Mild"
            } else if mass_index <= 121.0 {
                "Matig"
            } else {
                "Ernstig"
            }
        }
    };
    (mass_index, severity)
}

/// Combine mass-index severity and RWT into the LV geometry label
pub fn determine_lv_geometry(severity_key: &str, rwt: f64) -> String {
    if severity_key != "Normaal" {
        if rwt > 0.42 {
            return format!("{} concentrisch hypertroof", severity_key);
        }
        if rwt < 0.32 {
            return format!("{} eccentrisch hypertroof", severity_key);
        }
        return format!("{} gemengd hypertroof", severity_key);
    }
    if rwt > 0.42 {
        "Concentrische remodeling".to_string()
    } else if rwt < 0.32 {
        "Eccentrische remodeling".to_string()
    } else {
        "Normotroof".to_string()
    }
}

/// Classify LVIDd using indexed thresholds when BSA is available.
///
/// With a usable BSA the diameter is judged as mm/m²; otherwise the
/// absolute-mm bands are used as fallback.
pub fn classify_lvidd(lvidd_mm: f64, sex: Sex, bsa_m2: Option<f64>) -> &'static str {
    let lvidd_idx = bsa_m2
        .filter(|bsa| *bsa > 0.0)
        .map(|bsa| round_to(lvidd_mm / bsa, 1));

    if let Some(idx) = lvidd_idx {
        return match sex {
            Sex::Man => {
                if idx < 31.0 {
                    "niet gedilateerd"
                } else if idx <= 34.0 {
                    "mild gedilateerd"
                } else if idx <= 36.0 {
                    "matig gedilateerd"
                } else {
                    "ernstig gedilateerd"
                }
            }
            Sex::Vrouw => {
                if idx < 32.0 {
                    "niet gedilateerd"
                } else if idx <= 35.0 {
                    "mild gedilateerd"
                } else if idx <= 37.0 {
                    "matig gedilateerd"
                } else {
                    "ernstig gedilateerd"
                }
            }
        };
    }

    match sex {
        Sex::Man => {
            if lvidd_mm < 58.0 {
                "niet gedilateerd"
            } else if lvidd_mm <= 63.0 {
                "mild gedilateerd"
            } else if lvidd_mm <= 68.0 {
                "matig gedilateerd"
            } else {
                "ernstig gedilateerd"
            }
        }
        Sex::Vrouw => {
            if lvidd_mm < 52.0 {
                "niet gedilateerd"
            } else if lvidd_mm <= 56.0 {
                "mild gedilateerd"
            } else if lvidd_mm <= 61.0 {
                "matig gedilateerd"
            } else {
                "ernstig gedilateerd"
            }
        }
    }
}

/// LVIDs severity (0 normal .. 3 severe) from mm and/or indexed mm/m²
pub fn classify_lvids(lvids_mm: Option<f64>, lvids_idx: Option<f64>, sex: Sex) -> u8 {
    let (mm, idx) = (lvids_mm, lvids_idx);
    if mm.is_none() && idx.is_none() {
        return 0;
    }

    let above = |v: Option<f64>, t: f64| v.is_some_and(|x| x > t);
    let between = |v: Option<f64>, lo: f64, hi: f64| v.is_some_and(|x| x >= lo && x <= hi);

    match sex {
        Sex::Man => {
            if above(mm, 45.0) || above(idx, 25.0) {
                3
            } else if between(mm, 44.1, 45.0) || between(idx, 24.0, 25.0) {
                2
            } else if between(mm, 41.0, 44.0) || idx.is_some_and(|x| (22.0..24.0).contains(&x)) {
                1
            } else {
                0
            }
        }
        Sex::Vrouw => {
            if above(mm, 41.0) || above(idx, 26.0) {
                3
            } else if between(mm, 39.1, 41.0) || between(idx, 24.0, 26.0) {
                2
            } else if between(mm, 36.0, 39.0) || idx.is_some_and(|x| (22.0..24.0).contains(&x)) {
                1
            } else {
                0
            }
        }
    }
}

/// Display label for an LVIDs severity
pub fn lvids_severity_label(severity: u8) -> &'static str {
    match severity {
        1 => "Mild vergroot",
        2 => "Matig vergroot",
        3 => "Ernstig vergroot",
        _ => "Normaal",
    }
}

/// Teichholz ejection fraction estimate from LV diameters in mm
pub fn teichholz_ef(lvidd_mm: f64, lvids_mm: f64) -> Option<f64> {
    if lvidd_mm <= 0.0 {
        return None;
    }
    let lvidd_cm = lvidd_mm / 10.0;
    let lvids_cm = lvids_mm / 10.0;
    let edv = (7.0 / (2.4 + lvidd_cm)) * lvidd_cm.powi(3);
    let esv = (7.0 / (2.4 + lvids_cm)) * lvids_cm.powi(3);
    if edv <= 0.0 {
        return None;
    }
    Some(round_to((edv - esv) / edv * 100.0, 1))
}

/// Classify TAPSE (mm) into RV longitudinal function grades
pub fn classify_tapse(tapse_mm: f64) -> &'static str {
    if tapse_mm > 17.0 {
        "goede longitudinale systolische functie"
    } else if tapse_mm >= 13.0 {
        "mild verminderde longitudinale systolische functie"
    } else if tapse_mm >= 11.0 {
        "matig verminderde longitudinale systolische functie"
    } else {
        "ernstig verminderde longitudinale systolische functie"
    }
}

/// VO₂ reference percentiles (ml·kg⁻¹·min⁻¹) for one sex/age bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vo2Reference {
    pub p95: f64,
    pub p75: f64,
    pub p50: f64,
    pub p25: f64,
    pub p5: f64,
}

// FRIEND registry cycle-ergometer reference values per age decade.
const VO2_REF_MAN: [(u32, Vo2Reference); 6] = [
    (20, Vo2Reference { p95: 54.0, p75: 48.0, p50: 43.0, p25: 38.0, p5: 33.0 }),
    (30, Vo2Reference { p95: 50.0, p75: 44.0, p50: 40.0, p25: 35.0, p5: 30.0 }),
    (40, Vo2Reference { p95: 47.0, p75: 41.0, p50: 36.0, p25: 32.0, p5: 28.0 }),
    (50, Vo2Reference { p95: 43.0, p75: 38.0, p50: 33.0, p25: 29.0, p5: 25.0 }),
    (60, Vo2Reference { p95: 38.0, p75: 34.0, p50: 30.0, p25: 26.0, p5: 22.0 }),
    (70, Vo2Reference { p95: 34.0, p75: 30.0, p50: 26.0, p25: 23.0, p5: 20.0 }),
];

const VO2_REF_VROUW: [(u32, Vo2Reference); 6] = [
    (20, Vo2Reference { p95: 43.0, p75: 38.0, p50: 34.0, p25: 30.0, p5: 26.0 }),
    (30, Vo2Reference { p95: 40.0, p75: 36.0, p50: 32.0, p25: 28.0, p5: 24.0 }),
    (40, Vo2Reference { p95: 36.0, p75: 32.0, p50: 29.0, p25: 26.0, p5: 22.0 }),
    (50, Vo2Reference { p95: 33.0, p75: 30.0, p50: 27.0, p25: 24.0, p5: 20.0 }),
    (60, Vo2Reference { p95: 30.0, p75: 27.0, p50: 24.0, p25: 21.0, p5: 18.0 }),
    (70, Vo2Reference { p95: 27.0, p75: 25.0, p50: 22.0, p25: 19.0, p5: 17.0 }),
];

fn vo2_age_bucket(age: f64) -> u32 {
    let a = age as i64;
    if a < 30 {
        20
    } else if a < 40 {
        30
    } else if a < 50 {
        40
    } else if a < 60 {
        50
    } else if a < 70 {
        60
    } else {
        70
    }
}

/// Return the reference percentiles for the provided sex/age bucket
pub fn get_vo2_reference_values(sex: Sex, age: f64) -> Vo2Reference {
    let bucket = vo2_age_bucket(age);
    let table = match sex {
        Sex::Man => &VO2_REF_MAN,
        Sex::Vrouw => &VO2_REF_VROUW,
    };
    table
        .iter()
        .find(|(b, _)| *b == bucket)
        .map(|(_, reference)| *reference)
        .unwrap_or(table[table.len() - 1].1)
}

/// Percentage of the p50 reference, percentile band and capacity label
pub fn vo2_percentile_and_label(
    sex: Sex,
    age: f64,
    vo2_mlkg: f64,
) -> (f64, &'static str, &'static str) {
    let reference = get_vo2_reference_values(sex, age);
    let percent_vs50 = round_to(vo2_mlkg / reference.p50 * 100.0, 1);

    let (band, band_text) = if vo2_mlkg >= reference.p95 {
        (">=95%", "Uitstekende inspanningscapaciteit")
    } else if vo2_mlkg >= reference.p75 {
        ("75-95%", "Bovengemiddelde inspanningscapaciteit")
    } else if vo2_mlkg >= reference.p25 {
        ("25-75%", "Normale inspanningscapaciteit")
    } else if vo2_mlkg >= reference.p5 {
        ("5-25%", "Ondergemiddelde inspanningscapaciteit")
    } else {
        ("<5%", "Slechte inspanningscapaciteit")
    };

    (percent_vs50, band, band_text)
}

/// Coarse mitral/tricuspid regurgitation severity (0 none .. 3 severe)
/// from quantitative measurements; the most severe criterion wins.
pub fn regurgitation_severity(
    eroa: Option<f64>,
    regurgitant_volume: Option<f64>,
    regurgitant_fraction: Option<f64>,
) -> u8 {
    let mut severity = 0u8;

    if let Some(eroa) = eroa {
        severity = severity.max(if eroa >= 0.4 {
            3
        } else if eroa >= 0.2 {
            2
        } else {
            1
        });
    }
    if let Some(volume) = regurgitant_volume {
        severity = severity.max(if volume >= 60.0 {
            3
        } else if volume >= 30.0 {
            2
        } else {
            1
        });
    }
    if let Some(fraction) = regurgitant_fraction {
        severity = severity.max(if fraction > 50.0 {
            3
        } else if fraction >= 30.0 {
            2
        } else {
            1
        });
    }

    severity
}

/// Automatic aortic stenosis grading from jet velocity, mean gradient,
/// valve area and indexed valve area.
pub fn aortic_stenosis_grade(
    vmax: Option<f64>,
    mean_gradient: Option<f64>,
    ava: Option<f64>,
    ava_indexed: Option<f64>,
) -> &'static str {
    let above = |v: Option<f64>, t: f64| v.is_some_and(|x| x > t);
    let at_least = |v: Option<f64>, t: f64| v.is_some_and(|x| x >= t);
    let below = |v: Option<f64>, t: f64| v.is_some_and(|x| x < t);
    let at_most = |v: Option<f64>, t: f64| v.is_some_and(|x| x <= t);

    if above(vmax, 5.0) || above(mean_gradient, 60.0) {
        "Zeer ernstige stenose"
    } else if at_least(vmax, 4.0)
        || at_least(mean_gradient, 40.0)
        || below(ava, 1.0)
        || below(ava_indexed, 0.6)
    {
        "Ernstige stenose"
    } else if at_least(vmax, 3.0)
        || at_least(mean_gradient, 20.0)
        || at_most(ava, 1.5)
        || at_most(ava_indexed, 0.85)
    {
        "Matige stenose"
    } else if at_least(vmax, 2.5) || at_least(mean_gradient, 10.0) || at_most(ava, 2.0) {
        "Milde stenose"
    } else {
        "Geen stenose"
    }
}

/// Low-flow low-gradient pattern: severe-range valve area with a mean
/// gradient below 40 mmHg and an indexed stroke volume of 35 mL/m² or less.
pub fn low_flow_low_gradient(
    ava: Option<f64>,
    ava_indexed: Option<f64>,
    mean_gradient: Option<f64>,
    svi: Option<f64>,
) -> bool {
    let area_severe =
        ava.is_some_and(|x| x < 1.0) || ava_indexed.is_some_and(|x| x < 0.6);
    area_severe
        && mean_gradient.is_some_and(|g| g < 40.0)
        && svi.is_some_and(|s| s <= 35.0)
}

/// Aortic segments with published predicted-diameter regressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AortaSegment {
    Annulus,
    SinusValsalva,
    SinotubularJunction,
    Ascending,
}

impl AortaSegment {
    /// Short label used in the report ("AoA", "AoSV", ...)
    pub fn label(&self) -> &'static str {
        match self {
            AortaSegment::Annulus => "AoA",
            AortaSegment::SinusValsalva => "AoSV",
            AortaSegment::SinotubularJunction => "AoSTJ",
            AortaSegment::Ascending => "AscAo",
        }
    }

    /// Full Dutch name used in the dilatation sentences
    pub fn full_name(&self) -> &'static str {
        match self {
            AortaSegment::Annulus => "Aorta annulus",
            AortaSegment::SinusValsalva => "Aorta sinus valsalva",
            AortaSegment::SinotubularJunction => "Aorta sinotubulaire junctie",
            AortaSegment::Ascending => "Aorta ascendens",
        }
    }

    /// Indexed dilatation cut-off (mm/m²)
    pub fn indexed_cutoff(&self) -> f64 {
        match self {
            AortaSegment::Annulus => 14.0,
            AortaSegment::SinusValsalva => 20.0,
            AortaSegment::SinotubularJunction => 16.0,
            AortaSegment::Ascending => 17.0,
        }
    }
}

/// Predicted (lower, higher) diameter range in mm for a segment, from
/// age (years), sex, height (cm) and weight (kg).
pub fn aorta_predicted_range(
    segment: AortaSegment,
    age: f64,
    sex: Sex,
    height_cm: f64,
    weight_kg: f64,
) -> (f64, f64) {
    let male = if sex.is_male() { 1.0 } else { 0.0 };
    let (h, w) = (height_cm, weight_kg);

    let (lower, higher) = match segment {
        AortaSegment::Annulus => (
            10.828 + age * 0.001 + male * 0.871 + h * 0.013 + w * 0.020,
            14.970 + age * 0.020 + male * 1.278 + h * 0.037 + w * 0.034,
        ),
        AortaSegment::SinusValsalva => (
            3.483 + age * 0.086 + male * 1.731 + h * 0.062 + w * 0.036,
            12.129 + age * 0.125 + male * 2.589 + h * 0.113 + w * 0.065,
        ),
        AortaSegment::SinotubularJunction => (
            0.600 + age * 0.061 + male * 0.707 + h * 0.056 + w * 0.026,
            8.562 + age * 0.097 + male * 1.499 + h * 0.103 + w * 0.054,
        ),
        AortaSegment::Ascending => (
            8.189 + age * 0.041 + male * 0.655 + h * -0.007 + w * 0.040,
            21.214 + age * 0.101 + male * 1.961 + h * 0.069 + w * 0.087,
        ),
    };

    (round_to(lower, 2), round_to(higher, 2))
}

/// QTc by Bazett (ms) from the raw QT (ms) and ventricular rate (bpm)
pub fn qtc_bazett(qt_ms: f64, vent_rate: f64) -> Option<f64> {
    if vent_rate <= 0.0 {
        return None;
    }
    let rr = 60.0 / vent_rate;
    Some(round_to(qt_ms / rr.sqrt(), 1))
}

/// QTc by Fridericia (ms) from the raw QT (ms) and ventricular rate (bpm)
pub fn qtc_fridericia(qt_ms: f64, vent_rate: f64) -> Option<f64> {
    if vent_rate <= 0.0 {
        return None;
    }
    let rr = 60.0 / vent_rate;
    Some(round_to(qt_ms / rr.cbrt(), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bsa_mosteller() {
        let bsa = bsa_mosteller(180.0, 80.0);
        assert!((bsa - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_classify_ivsd_sex_specific() {
        assert_eq!(classify_ivsd(10.0, Sex::Man), "Normotroof");
        assert_eq!(classify_ivsd(10.0, Sex::Vrouw), "Mild concentrisch hypertroof");
        assert_eq!(classify_ivsd(17.0, Sex::Man), "Ernstig concentrisch hypertroof");
        assert_eq!(classify_ivsd(14.0, Sex::Vrouw), "Matig concentrisch hypertroof");
    }

    #[test]
    fn test_classify_lavi() {
        assert_eq!(classify_lavi(30.0), "Niet gedilateerd");
        assert_eq!(classify_lavi(38.0), "Mild gedilateerd");
        assert_eq!(classify_lavi(45.0), "Matig gedilateerd");
        assert_eq!(classify_lavi(55.0), "Ernstig gedilateerd");
    }

    #[test]
    fn test_classify_lvef() {
        assert_eq!(classify_lvef(60.0, Sex::Man), "Normaal");
        assert_eq!(classify_lvef(53.0, Sex::Man), "Normaal");
        assert_eq!(classify_lvef(53.0, Sex::Vrouw), "Mild");
        assert_eq!(classify_lvef(35.0, Sex::Man), "Matig");
        assert_eq!(classify_lvef(25.0, Sex::Vrouw), "Ernstig");
    }

    #[test]
    fn test_lv_mass_and_geometry() {
        let mass = compute_lv_mass_g(12.0, 50.0, 11.0);
        assert!(mass > 0.0);

        let (index, severity) = lv_mass_index_severity(250.0, 2.0, Sex::Man);
        assert_eq!(index, 125.0);
        assert_eq!(severity, "Mild");

        assert_eq!(determine_lv_geometry("Mild", 0.50), "Mild concentrisch hypertroof");
        assert_eq!(determine_lv_geometry("Mild", 0.30), "Mild eccentrisch hypertroof");
        assert_eq!(determine_lv_geometry("Normaal", 0.50), "Concentrische remodeling");
        assert_eq!(determine_lv_geometry("Normaal", 0.38), "Normotroof");
    }

    #[test]
    fn test_compute_rwt_handles_zero_diameter() {
        assert_eq!(compute_rwt(10.0, 0.0), 0.0);
        assert_eq!(compute_rwt(10.0, 50.0), 0.4);
    }

    #[test]
    fn test_classify_lvidd_prefers_indexed() {
        // 60 mm at BSA 2.0 -> 30 mm/m², below the male indexed cut-off
        assert_eq!(classify_lvidd(60.0, Sex::Man, Some(2.0)), "niet gedilateerd");
        // Without BSA the absolute threshold applies
        assert_eq!(classify_lvidd(60.0, Sex::Man, None), "mild gedilateerd");
        assert_eq!(classify_lvidd(70.0, Sex::Vrouw, None), "ernstig gedilateerd");
    }

    #[test]
    fn test_classify_lvids() {
        assert_eq!(classify_lvids(None, None, Sex::Man), 0);
        assert_eq!(classify_lvids(Some(42.0), None, Sex::Man), 1);
        assert_eq!(classify_lvids(Some(46.0), None, Sex::Man), 3);
        assert_eq!(classify_lvids(None, Some(25.0), Sex::Vrouw), 2);
        assert_eq!(lvids_severity_label(3), "Ernstig vergroot");
    }

    #[test]
    fn test_teichholz_ef() {
        let ef = teichholz_ef(50.0, 30.0).unwrap();
        assert!(ef > 50.0 && ef < 80.0);
        assert!(teichholz_ef(0.0, 30.0).is_none());
    }

    #[test]
    fn test_classify_tapse() {
        assert_eq!(classify_tapse(20.0), "goede longitudinale systolische functie");
        assert_eq!(classify_tapse(15.0), "mild verminderde longitudinale systolische functie");
        assert_eq!(classify_tapse(12.0), "matig verminderde longitudinale systolische functie");
        assert_eq!(classify_tapse(9.0), "ernstig verminderde longitudinale systolische functie");
    }

    #[test]
    fn test_vo2_reference_bucketing() {
        let young = get_vo2_reference_values(Sex::Man, 25.0);
        assert_eq!(young.p50, 43.0);
        let old = get_vo2_reference_values(Sex::Man, 82.0);
        assert_eq!(old.p50, 26.0);
        let female = get_vo2_reference_values(Sex::Vrouw, 45.0);
        assert_eq!(female.p50, 29.0);
    }

    #[test]
    fn test_vo2_percentile_bands() {
        let (pct, band, text) = vo2_percentile_and_label(Sex::Man, 55.0, 33.0);
        assert_eq!(pct, 100.0);
        assert_eq!(band, "25-75%");
        assert_eq!(text, "Normale inspanningscapaciteit");

        let (_, band, _) = vo2_percentile_and_label(Sex::Man, 55.0, 44.0);
        assert_eq!(band, ">=95%");

        let (_, band, text) = vo2_percentile_and_label(Sex::Vrouw, 65.0, 15.0);
        assert_eq!(band, "<5%");
        assert_eq!(text, "Slechte inspanningscapaciteit");
    }

    #[test]
    fn test_regurgitation_severity() {
        assert_eq!(regurgitation_severity(None, None, None), 0);
        assert_eq!(regurgitation_severity(Some(0.1), None, None), 1);
        assert_eq!(regurgitation_severity(Some(0.3), None, None), 2);
        assert_eq!(regurgitation_severity(Some(0.5), None, None), 3);
        // The most severe criterion wins
        assert_eq!(regurgitation_severity(Some(0.1), Some(70.0), None), 3);
        assert_eq!(regurgitation_severity(None, None, Some(40.0)), 2);
    }

    #[test]
    fn test_aortic_stenosis_grade() {
        assert_eq!(aortic_stenosis_grade(None, None, None, None), "Geen stenose");
        assert_eq!(aortic_stenosis_grade(Some(5.2), None, None, None), "Zeer ernstige stenose");
        assert_eq!(aortic_stenosis_grade(Some(4.1), None, None, None), "Ernstige stenose");
        assert_eq!(aortic_stenosis_grade(None, Some(25.0), None, None), "Matige stenose");
        assert_eq!(aortic_stenosis_grade(Some(2.6), None, None, None), "Milde stenose");
        assert_eq!(aortic_stenosis_grade(None, None, Some(0.8), None), "Ernstige stenose");
        assert_eq!(aortic_stenosis_grade(None, None, None, Some(0.5)), "Ernstige stenose");
    }

    #[test]
    fn test_low_flow_low_gradient() {
        assert!(low_flow_low_gradient(Some(0.9), None, Some(30.0), Some(30.0)));
        // Mean gradient in the severe range is not LFLG
        assert!(!low_flow_low_gradient(Some(0.9), None, Some(45.0), Some(30.0)));
        // Preserved stroke volume is not LFLG
        assert!(!low_flow_low_gradient(Some(0.9), None, Some(30.0), Some(40.0)));
        assert!(!low_flow_low_gradient(None, None, Some(30.0), Some(30.0)));
    }

    #[test]
    fn test_aorta_predicted_range() {
        let (lower, higher) =
            aorta_predicted_range(AortaSegment::Ascending, 60.0, Sex::Man, 175.0, 80.0);
        assert!(lower < higher);
        assert!(higher > 30.0 && higher < 45.0);

        let (female_lower, _) =
            aorta_predicted_range(AortaSegment::Ascending, 60.0, Sex::Vrouw, 175.0, 80.0);
        assert!(female_lower < lower);
    }

    #[test]
    fn test_aorta_segment_cutoffs() {
        assert_eq!(AortaSegment::Annulus.indexed_cutoff(), 14.0);
        assert_eq!(AortaSegment::SinusValsalva.indexed_cutoff(), 20.0);
        assert_eq!(AortaSegment::SinotubularJunction.indexed_cutoff(), 16.0);
        assert_eq!(AortaSegment::Ascending.indexed_cutoff(), 17.0);
    }

    #[test]
    fn test_qtc_formulas() {
        // At 60 bpm RR = 1 s, so QTc equals QT for both formulas
        assert_eq!(qtc_bazett(400.0, 60.0), Some(400.0));
        assert_eq!(qtc_fridericia(400.0, 60.0), Some(400.0));

        // Faster rates correct upward, Bazett more aggressively
        let bazett = qtc_bazett(360.0, 90.0).unwrap();
        let fridericia = qtc_fridericia(360.0, 90.0).unwrap();
        assert!(bazett > fridericia);
        assert!(fridericia > 360.0);

        assert!(qtc_bazett(400.0, 0.0).is_none());
    }
}
