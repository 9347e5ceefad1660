#![forbid(unsafe_code)]

//! Core logic for the medtools clinical calculators.
//!
//! This crate provides:
//! - Domain types (calculator inputs, results, clinical categories)
//! - BMI and Cockcroft-Gault calculators with banded classification
//! - Page navigation and per-session state
//! - Configuration, validation and logging

pub mod types;
pub mod error;
pub mod bands;
pub mod bmi;
pub mod creatinine;
pub mod navigation;
pub mod session;
pub mod config;
pub mod validation;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::{classify_bmi, compute_bmi};
pub use creatinine::{compute_creatinine_clearance, guidance_for_clearance, stage_for_clearance};
pub use navigation::{NavigationController, Page};
pub use session::Session;
pub use config::Config;
