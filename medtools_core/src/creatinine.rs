//! Creatinine clearance estimate (Cockcroft-Gault, 1976).
//!
//! ```text
//! clearance = (140 - age) * weight * k / (72 * serum_creatinine)
//! k = 0.85 for women, 1.0 for men
//! ```
//!
//! The formula is evaluated as written. Age and creatinine bounds are
//! enforced at the form boundary, not here.

use crate::bands::{Band, BandTable};
use crate::{CkdStage, CreatinineInput, CreatinineResult, Guidance, RenalGuidance, Severity, Sex};

/// Correction factor applied for female patients
pub const FEMALE_FACTOR: f64 = 0.85;

pub const REFERENCES: &[&str] = &[
    "Cockcroft DW, Gault MH. Prediction of creatinine clearance from serum creatinine. Nephron. 1976",
    "KDIGO 2023 Clinical Practice Guideline for the Evaluation and Management of CKD",
    "HAS - Management of chronic kidney disease (2024)",
];

static STAGE_TABLE: BandTable<CkdStage> = BandTable::new(
    &[
        Band { below: 15.0, value: CkdStage::EndStage },
        Band { below: 30.0, value: CkdStage::Severe },
        Band { below: 60.0, value: CkdStage::Moderate },
        Band { below: 90.0, value: CkdStage::Mild },
    ],
    CkdStage::Normal,
);

static GUIDANCE_TABLE: BandTable<RenalGuidance> = BandTable::new(
    &[
        Band { below: 30.0, value: RenalGuidance::UrgentCare },
        Band { below: 60.0, value: RenalGuidance::SpecialistReferral },
    ],
    RenalGuidance::RoutineMonitoring,
);

pub fn stage_table() -> &'static BandTable<CkdStage> {
    &STAGE_TABLE
}

pub fn guidance_table() -> &'static BandTable<RenalGuidance> {
    &GUIDANCE_TABLE
}

/// CKD stage for a clearance in mL/min
pub fn stage_for_clearance(clearance_ml_min: f64) -> CkdStage {
    STAGE_TABLE.classify(clearance_ml_min)
}

/// Management grouping for a clearance in mL/min
pub fn guidance_for_clearance(clearance_ml_min: f64) -> RenalGuidance {
    GUIDANCE_TABLE.classify(clearance_ml_min)
}

/// Raw Cockcroft-Gault estimate in mL/min
pub fn cockcroft_gault(input: &CreatinineInput) -> f64 {
    let sex_factor = match input.sex {
        Sex::Female => FEMALE_FACTOR,
        Sex::Male => 1.0,
    };
    ((140.0 - f64::from(input.age_years)) * input.weight_kg * sex_factor)
        / (72.0 * input.serum_creatinine)
}

/// Estimate creatinine clearance and stage it
pub fn compute_creatinine_clearance(input: &CreatinineInput) -> CreatinineResult {
    let clearance_ml_min = cockcroft_gault(input);
    let stage = stage_for_clearance(clearance_ml_min);
    let guidance = guidance_for_clearance(clearance_ml_min);

    tracing::debug!(
        "Clearance {:.2} mL/min (age {}, {}, {} kg, {} mg/dL) -> {:?}",
        clearance_ml_min,
        input.age_years,
        input.sex,
        input.weight_kg,
        input.serum_creatinine,
        stage
    );

    CreatinineResult {
        clearance_ml_min,
        stage,
        guidance,
    }
}

/// Interpretation label for a stage
pub fn stage_label(stage: CkdStage) -> &'static str {
    match stage {
        CkdStage::Normal => "Normal renal function",
        CkdStage::Mild => "Mild renal impairment (stage 2)",
        CkdStage::Moderate => "Moderate renal impairment (stage 3)",
        CkdStage::Severe => "Severe renal impairment (stage 4)",
        CkdStage::EndStage => "End-stage renal failure (stage 5)",
    }
}

/// Recommendations for a management grouping
pub fn recommendations(guidance: RenalGuidance) -> &'static [&'static str] {
    match guidance {
        RenalGuidance::RoutineMonitoring => &[
            "Annual monitoring",
            "Avoid nephrotoxic drugs",
            "Maintain adequate hydration",
        ],
        RenalGuidance::SpecialistReferral => &[
            "Nephrology consultation",
            "Adjust drug dosages",
            "Etiological work-up",
        ],
        RenalGuidance::UrgentCare => &[
            "Urgent care",
            "Prepare for dialysis",
            "Specialist follow-up",
        ],
    }
}

pub fn guidance(result: &CreatinineResult) -> Guidance {
    let severity = match result.stage {
        CkdStage::Normal => Severity::Success,
        CkdStage::Mild => Severity::Warning,
        _ => Severity::Error,
    };

    Guidance {
        headline: stage_label(result.stage).into(),
        severity,
        lines: recommendations(result.guidance)
            .iter()
            .map(|line| line.to_string())
            .collect(),
    }
}
