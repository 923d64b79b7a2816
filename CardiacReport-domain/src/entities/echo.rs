use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patient::PatientContext;

/// Structured payload for the echo interpretation engine.
///
/// Every measurement is optional; the report builder skips what was not
/// measured instead of inventing defaults. Labels come in pairs where the
/// UI can override an automatically suggested classification
/// (`*_choice` wins over `*_auto`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EchoMeasurements {
    /// Patient context
    pub patient: PatientContext,

    // Left ventricle
    /// Hypertrophy label chosen by the clinician
    pub lv_hypertrofie_choice: Option<String>,
    /// Hypertrophy label suggested from the wall measurements
    pub lv_hypertrofie_auto: Option<String>,
    /// Interventricular septum thickness, diastole (mm)
    pub ivsd: Option<f64>,
    /// Posterior wall thickness, diastole (mm)
    pub lvpw: Option<f64>,
    /// LV internal diameter, diastole (mm)
    pub lvidd: Option<f64>,
    /// LV internal diameter, systole (mm)
    pub lvids: Option<f64>,
    /// LV mass index (g/m²)
    pub mass_index: Option<f64>,
    /// Relative wall thickness
    pub rwt: Option<f64>,
    /// Dilatation label chosen by the clinician
    pub lv_dilatatie_choice: Option<String>,
    /// Dilatation label suggested from LVIDd
    pub lv_dilatatie_auto: Option<String>,
    /// Systolic function description
    pub systolic_option: Option<String>,
    /// Ejection fraction (%)
    pub lvef: Option<f64>,
    /// Diastolic function description
    pub lv_diastolische_functie: Option<String>,
    /// E/A ratio
    pub ea: Option<f64>,
    /// E/e' ratio
    pub ee: Option<f64>,

    // Left atrium
    /// LA label chosen by the clinician
    pub la_choice: Option<String>,
    /// LA label suggested from LAVI
    pub la_suggested: Option<String>,
    /// LA volume (mL)
    pub la_volume: Option<f64>,
    /// LA volume index (mL/m²)
    pub lavi: Option<f64>,

    // Right heart
    /// RV hypertrophy label
    pub rv_hypertrofie: Option<String>,
    /// RV free wall thickness, diastole (mm)
    pub rvfwd: Option<f64>,
    /// RV basal diameter, diastole (mm)
    pub rvbd: Option<f64>,
    /// RV mid diameter, diastole (mm)
    pub rvmd: Option<f64>,
    /// Tricuspid annular plane systolic excursion (mm)
    pub tapse: Option<f64>,
    /// RV dilatation label
    pub rv_dilatatie: Option<String>,
    /// RV function label
    pub rv_functie: Option<String>,
    /// PASP sentence for the report
    pub pasp_text: Option<String>,
    /// Raw PASP value (mmHg), used by the guideline engine
    pub pasp_raw: Option<f64>,
    /// RA volume index (mL/m²)
    pub ravi: Option<f64>,
    /// RA dilatation label
    pub ra_dilatatie: Option<String>,

    // Aorta (mm per segment)
    /// Aortic annulus
    pub aoa: Option<f64>,
    /// Sinus of Valsalva
    pub aosv: Option<f64>,
    /// Sinotubular junction
    pub aostj: Option<f64>,
    /// Ascending aorta
    pub ascao: Option<f64>,

    // Aortic valve
    /// Morphology label (tricuspide/bicuspide/...)
    pub ak_morfologie: Option<String>,
    /// Calcification label
    pub ak_calcificatie: Option<String>,
    /// Stenosis label; auto-graded from the measurements when empty
    pub ak_stenose: Option<String>,
    /// Regurgitation label
    pub ak_regurgitatie: Option<String>,
    /// Peak jet velocity (m/s)
    pub ak_vmax: Option<f64>,
    /// Mean gradient (mmHg)
    pub ak_mean: Option<f64>,
    /// Aortic valve area (cm²)
    pub ava: Option<f64>,
    /// Stroke volume (mL)
    pub sv: Option<f64>,

    // Mitral valve
    pub mk_regurgitatie: Option<String>,
    /// Effective regurgitant orifice area (cm²)
    pub mk_eroa: Option<f64>,
    /// Regurgitant volume (mL)
    pub mk_regvol: Option<f64>,
    /// Regurgitant fraction (%)
    pub mk_rf: Option<f64>,

    // Tricuspid valve
    pub tk_regurgitatie: Option<String>,
    pub tk_eroa: Option<f64>,
    pub tk_regvol: Option<f64>,
    pub tk_rf: Option<f64>,
    /// Vena contracta width (cm)
    pub tk_vcw: Option<f64>,

    // Pulmonary valve
    pub pk_regurgitatie: Option<String>,
    pub pk_eroa: Option<f64>,
    pub pk_regvol: Option<f64>,
    pub pk_rf: Option<f64>,
    /// Deceleration time of the regurgitant jet (ms)
    pub pk_dt_regjet: Option<f64>,
    /// Pressure half time of the regurgitant jet (ms)
    pub pk_pht_regjet: Option<f64>,
    /// PR index
    pub pk_pr_index: Option<f64>,

    // Inferior vena cava
    pub ivc_dilatatie: Option<String>,
    pub ivc_variatie: Option<String>,
    /// Estimated central venous pressure (mmHg), free text
    pub cvd: Option<String>,

    // Context flags for the guideline engine
    /// Patient is symptomatic for mitral regurgitation
    pub mr_symptomatic: bool,
    /// Atrial fibrillation is present
    pub af_present: bool,
    /// Patient is symptomatic for aortic stenosis
    pub as_symptomatic: bool,
    /// Systolic blood pressure drops >20 mmHg during exercise
    pub as_sbp_drop: bool,
    /// Aortic valve calcium score (Agatston)
    pub as_calc_score: Option<f64>,
    /// Vmax progression per year (m/s)
    pub as_vmax_progression: Option<f64>,
    /// BNP / NT-proBNP is elevated
    pub as_bnp_elevated: bool,
}

impl EchoMeasurements {
    /// BSA forwarded from the patient context
    pub fn bsa(&self) -> Option<f64> {
        self.patient.usable_bsa()
    }

    /// Index a measurement against BSA, rounded to one decimal
    pub fn indexed(&self, value: Option<f64>) -> Option<f64> {
        match (value, self.bsa()) {
            (Some(v), Some(bsa)) => Some((v / bsa * 10.0).round() / 10.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_requires_bsa() {
        let mut echo = EchoMeasurements::default();
        echo.aoa = Some(30.0);
        assert!(echo.indexed(echo.aoa).is_none());

        echo.patient.bsa = Some(2.0);
        assert_eq!(echo.indexed(echo.aoa), Some(15.0));
    }

    #[test]
    fn test_deserializes_from_sparse_payload() {
        let echo: EchoMeasurements = serde_json::from_str(
            r#"{"patient":{"sex":"Man","bsa":1.9},"lvef":55.0,"ak_vmax":2.1}"#,
        )
        .unwrap();
        assert_eq!(echo.lvef, Some(55.0));
        assert_eq!(echo.ak_vmax, Some(2.1));
        assert!(!echo.as_symptomatic);
        assert!(echo.ivsd.is_none());
    }
}
