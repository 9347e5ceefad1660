//! Form-boundary validation.
//!
//! The calculators trust their inputs (apart from the BMI height guard);
//! these constructors are where raw form values are checked against the
//! configured domains before a calculation runs.

use crate::config::{BmiFormConfig, CreatinineFormConfig};
use crate::{BmiInput, CreatinineInput, Error, Result, Sex};

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        tracing::debug!("{} = {} rejected, outside [{}, {}]", field, value, min, max);
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl BmiInput {
    /// Build an input after checking weight and height against the form limits
    pub fn validated(weight_kg: f64, height_m: f64, limits: &BmiFormConfig) -> Result<Self> {
        let weight_kg = within("weight_kg", weight_kg, limits.weight_min_kg, limits.weight_max_kg)?;
        let height_m = within("height_m", height_m, limits.height_min_m, limits.height_max_m)?;
        Ok(Self::new(weight_kg, height_m))
    }
}

impl CreatinineInput {
    /// Build an input after checking every field against the form limits
    pub fn validated(
        age_years: u32,
        sex: Sex,
        weight_kg: f64,
        serum_creatinine: f64,
        limits: &CreatinineFormConfig,
    ) -> Result<Self> {
        within(
            "age_years",
            f64::from(age_years),
            f64::from(limits.age_min),
            f64::from(limits.age_max),
        )?;
        let weight_kg = within("weight_kg", weight_kg, limits.weight_min_kg, limits.weight_max_kg)?;
        let serum_creatinine = within(
            "serum_creatinine",
            serum_creatinine,
            limits.creatinine_min,
            limits.creatinine_max,
        )?;
        Ok(Self::new(age_years, sex, weight_kg, serum_creatinine))
    }
}
