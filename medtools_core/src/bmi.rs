//! Body Mass Index calculator.
//!
//! BMI = weight / height², classified with the WHO adult bands:
//! - < 18.5 underweight
//! - [18.5, 25) normal
//! - [25, 30) overweight
//! - >= 30 obese, split into classes I [30, 35), II [35, 40) and III (>= 40)

use crate::bands::{Band, BandTable};
use crate::{
    BmiCategory, BmiInput, BmiResult, Error, Guidance, ObesityClass, Result, Severity,
    WeightAdjustment,
};

/// Lower edge of the healthy BMI range
pub const HEALTHY_BMI_MIN: f64 = 18.5;
/// BMI used to derive the healthy maximum weight
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Source for the classification
pub const REFERENCES: &[&str] =
    &["WHO - Obesity and overweight fact sheet: https://www.who.int/news-room/fact-sheets/detail/obesity-and-overweight"];

/// Category plus obesity class, as stored in the BMI band table
pub type BmiBand = (BmiCategory, Option<ObesityClass>);

static BMI_TABLE: BandTable<BmiBand> = BandTable::new(
    &[
        Band { below: 18.5, value: (BmiCategory::Underweight, None) },
        Band { below: 25.0, value: (BmiCategory::Normal, None) },
        Band { below: 30.0, value: (BmiCategory::Overweight, None) },
        Band { below: 35.0, value: (BmiCategory::Obese, Some(ObesityClass::I)) },
        Band { below: 40.0, value: (BmiCategory::Obese, Some(ObesityClass::II)) },
    ],
    (BmiCategory::Obese, Some(ObesityClass::III)),
);

/// Ordered classification table (exposed for inspection and tests)
pub fn bmi_table() -> &'static BandTable<BmiBand> {
    &BMI_TABLE
}

/// Map a BMI value onto its category and, for obesity, its class
pub fn classify_bmi(bmi: f64) -> (BmiCategory, Option<ObesityClass>) {
    BMI_TABLE.classify(bmi)
}

/// Compute BMI, healthy weight range and category
///
/// Fails with `Error::InvalidInput` when the height is not a positive number.
/// Other domain bounds are the caller's responsibility.
pub fn compute_bmi(input: &BmiInput) -> Result<BmiResult> {
    if !(input.height_m.is_finite() && input.height_m > 0.0) {
        tracing::debug!("Rejecting BMI input with height {}", input.height_m);
        return Err(Error::InvalidInput(format!(
            "height must be greater than 0 (got {})",
            input.height_m
        )));
    }

    let height_sq = input.height_m * input.height_m;
    let bmi = input.weight_kg / height_sq;
    let healthy_weight_min = HEALTHY_BMI_MIN * height_sq;
    let healthy_weight_max = HEALTHY_BMI_MAX * height_sq;

    let (category, obesity_class) = classify_bmi(bmi);

    let adjustment = match category {
        BmiCategory::Underweight => WeightAdjustment::Gain(healthy_weight_min - input.weight_kg),
        BmiCategory::Normal => WeightAdjustment::InRange,
        BmiCategory::Overweight | BmiCategory::Obese => {
            WeightAdjustment::Lose(input.weight_kg - healthy_weight_max)
        }
    };

    tracing::debug!(
        "BMI {:.2} for {} kg / {} m -> {:?} {:?}",
        bmi,
        input.weight_kg,
        input.height_m,
        category,
        obesity_class
    );

    Ok(BmiResult {
        bmi,
        healthy_weight_min,
        healthy_weight_max,
        category,
        obesity_class,
        adjustment,
    })
}

/// Headline and advice for a BMI result
///
/// `decimals` controls how target weights are printed.
pub fn guidance(result: &BmiResult, decimals: usize) -> Guidance {
    let min = result.healthy_weight_min;
    let max = result.healthy_weight_max;

    match (result.category, result.adjustment) {
        (BmiCategory::Underweight, WeightAdjustment::Gain(kg)) => Guidance {
            headline: "UNDERWEIGHT".into(),
            severity: Severity::Error,
            lines: vec![
                format!("Recommended weight gain: {:.*} kg", decimals, kg),
                format!("Minimum healthy weight: {:.*} kg", decimals, min),
            ],
        },
        (BmiCategory::Overweight, WeightAdjustment::Lose(kg)) => Guidance {
            headline: "OVERWEIGHT".into(),
            severity: Severity::Warning,
            lines: vec![
                format!("Recommended weight loss: {:.*} kg", decimals, kg),
                format!("Maximum healthy weight: {:.*} kg", decimals, max),
            ],
        },
        (BmiCategory::Obese, WeightAdjustment::Lose(kg)) => {
            let class = result
                .obesity_class
                .map(|c| format!(" (class {:?}, {})", c, c.description()))
                .unwrap_or_default();
            Guidance {
                headline: format!("OBESITY{}", class),
                severity: Severity::Error,
                lines: vec![
                    format!("Minimum weight loss: {:.*} kg", decimals, kg),
                    format!("First target: {:.*} kg", decimals, max),
                ],
            }
        }
        _ => Guidance {
            headline: "NORMAL WEIGHT".into(),
            severity: Severity::Success,
            lines: vec![
                format!("Healthy weight minimum: {:.*} kg", decimals, min),
                format!("Healthy weight maximum: {:.*} kg", decimals, max),
            ],
        },
    }
}
