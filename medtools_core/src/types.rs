//! Core domain types for the medical calculators.
//!
//! This module defines:
//! - Calculator inputs (BMI, Cockcroft-Gault)
//! - Calculator results and their clinical categories
//! - Presentation severity shared by both calculators

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// BMI Types
// ============================================================================

/// Inputs to the BMI calculator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BmiInput {
    /// Construct without domain checks; see `BmiInput::validated` for the form boundary.
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// Weight status category (WHO classification)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Obesity class, only meaningful for `BmiCategory::Obese`
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ObesityClass {
    I,
    II,
    III,
}

impl ObesityClass {
    pub fn description(&self) -> &'static str {
        match self {
            ObesityClass::I => "moderate obesity",
            ObesityClass::II => "severe obesity",
            ObesityClass::III => "morbid obesity",
        }
    }
}

/// How far the current weight sits from the healthy range
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "kg", rename_all = "snake_case")]
pub enum WeightAdjustment {
    /// Weight to gain to reach the healthy minimum
    Gain(f64),
    /// Already inside the healthy range
    InRange,
    /// Weight to lose to reach the healthy maximum
    Lose(f64),
}

/// Result of a BMI calculation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub healthy_weight_min: f64,
    pub healthy_weight_max: f64,
    pub category: BmiCategory,
    pub obesity_class: Option<ObesityClass>,
    pub adjustment: WeightAdjustment,
}

impl BmiResult {
    pub fn weight_adjustment(&self) -> WeightAdjustment {
        self.adjustment
    }

    /// Copy with every figure rounded for display
    pub fn rounded(&self, decimals: u32) -> Self {
        let adjustment = match self.adjustment {
            WeightAdjustment::Gain(kg) => WeightAdjustment::Gain(round_to(kg, decimals)),
            WeightAdjustment::Lose(kg) => WeightAdjustment::Lose(round_to(kg, decimals)),
            WeightAdjustment::InRange => WeightAdjustment::InRange,
        };
        Self {
            bmi: round_to(self.bmi, decimals),
            healthy_weight_min: round_to(self.healthy_weight_min, decimals),
            healthy_weight_max: round_to(self.healthy_weight_max, decimals),
            adjustment,
            ..*self
        }
    }
}

// ============================================================================
// Creatinine Clearance Types
// ============================================================================

/// Biological sex, as used by the Cockcroft-Gault correction factor
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            other => Err(Error::UnknownSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

/// Inputs to the Cockcroft-Gault estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatinineInput {
    pub age_years: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    /// Serum creatinine in mg/dL
    pub serum_creatinine: f64,
}

impl CreatinineInput {
    /// Construct without domain checks; see `CreatinineInput::validated` for the form boundary.
    pub fn new(age_years: u32, sex: Sex, weight_kg: f64, serum_creatinine: f64) -> Self {
        Self {
            age_years,
            sex,
            weight_kg,
            serum_creatinine,
        }
    }
}

/// Chronic kidney disease stage derived from clearance
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CkdStage {
    Normal,
    Mild,
    Moderate,
    Severe,
    EndStage,
}

impl CkdStage {
    /// KDIGO stage number (1 for normal function)
    pub fn number(&self) -> u8 {
        match self {
            CkdStage::Normal => 1,
            CkdStage::Mild => 2,
            CkdStage::Moderate => 3,
            CkdStage::Severe => 4,
            CkdStage::EndStage => 5,
        }
    }
}

/// Coarse management grouping used for the recommendations block
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RenalGuidance {
    RoutineMonitoring,
    SpecialistReferral,
    UrgentCare,
}

/// Result of a creatinine clearance estimate
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatinineResult {
    pub clearance_ml_min: f64,
    pub stage: CkdStage,
    pub guidance: RenalGuidance,
}

impl CreatinineResult {
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            clearance_ml_min: round_to(self.clearance_ml_min, decimals),
            ..*self
        }
    }
}

// ============================================================================
// Presentation Types
// ============================================================================

/// How a headline should be styled by the shell
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Headline plus recommendation lines for one result
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Guidance {
    pub headline: String,
    pub severity: Severity,
    pub lines: Vec<String>,
}

/// Most decimal places a figure is ever shown with
pub const MAX_DECIMALS: u32 = 10;

/// Round to a fixed number of decimal places (presentation only)
///
/// `decimals` is capped at `MAX_DECIMALS`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857142857, 2), 22.86);
        assert_eq!(round_to(74.375, 1), 74.4);
        assert_eq!(round_to(87.5, 0), 88.0);
    }

    #[test]
    fn test_round_to_caps_precision() {
        let value = 22.857142857142858;
        assert!(round_to(value, 400).is_finite());
        assert_eq!(round_to(value, u32::MAX), round_to(value, MAX_DECIMALS));
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert!(matches!("x".parse::<Sex>(), Err(Error::UnknownSex(_))));
    }

    #[test]
    fn test_adjustment_serializes_tagged() {
        let json = serde_json::to_string(&WeightAdjustment::Lose(23.5)).unwrap();
        assert_eq!(json, r#"{"kind":"lose","kg":23.5}"#);
    }

    #[test]
    fn test_stage_numbers() {
        assert_eq!(CkdStage::Normal.number(), 1);
        assert_eq!(CkdStage::EndStage.number(), 5);
    }
}
