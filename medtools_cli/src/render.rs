//! Text and JSON rendering of calculator results.

use medtools_core::{bmi, creatinine, BmiResult, Config, CreatinineResult, Guidance, Page, Severity};
use serde::Serialize;
use std::io::{self, Write};

const RULE: &str = "─────────────────────────────────────────";

/// JSON document printed by `--json`
#[derive(Serialize)]
struct Report<'a, R: Serialize> {
    page: Page,
    result: R,
    guidance: &'a Guidance,
    #[serde(skip_serializing_if = "is_empty")]
    references: &'a [&'a str],
}

fn is_empty(references: &&[&str]) -> bool {
    references.is_empty()
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✗",
    }
}

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n╭─────────────────────────────────────────╮")?;
    writeln!(out, "│  {}", title)?;
    writeln!(out, "╰─────────────────────────────────────────╯")?;
    writeln!(out)
}

fn guidance_block(
    out: &mut impl Write,
    heading: &str,
    guidance: &Guidance,
    references: &[&str],
    config: &Config,
) -> io::Result<()> {
    writeln!(out, "  {} {}", marker(guidance.severity), guidance.headline)?;
    writeln!(out)?;
    writeln!(out, "  {}", heading)?;
    for line in &guidance.lines {
        writeln!(out, "  → {}", line)?;
    }

    if config.display.show_references {
        writeln!(out)?;
        writeln!(out, "  References:")?;
        for (i, reference) in references.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, reference)?;
        }
    }
    writeln!(out)
}

pub fn bmi_text(out: &mut impl Write, result: &BmiResult, config: &Config) -> io::Result<()> {
    let decimals = config.display.decimals as usize;
    let guidance = bmi::guidance(result, config.display.guidance_decimals as usize);

    writeln!(out, "  Results")?;
    writeln!(out, "  {}", RULE)?;
    writeln!(out, "  Your BMI: {:.*} kg/m²", decimals, result.bmi)?;
    writeln!(out)?;
    guidance_block(out, "Health target:", &guidance, bmi::REFERENCES, config)
}

pub fn creatinine_text(
    out: &mut impl Write,
    result: &CreatinineResult,
    config: &Config,
) -> io::Result<()> {
    let decimals = config.display.decimals as usize;
    let guidance = creatinine::guidance(result);

    writeln!(out, "  Results")?;
    writeln!(out, "  {}", RULE)?;
    writeln!(
        out,
        "  Estimated clearance: {:.*} mL/min",
        decimals, result.clearance_ml_min
    )?;
    writeln!(out)?;
    guidance_block(
        out,
        "Recommended management:",
        &guidance,
        creatinine::REFERENCES,
        config,
    )
}

pub fn bmi_json(out: &mut impl Write, result: &BmiResult, config: &Config) -> medtools_core::Result<()> {
    let guidance = bmi::guidance(result, config.display.guidance_decimals as usize);
    let report = Report {
        page: Page::Bmi,
        result: result.rounded(config.display.decimals),
        guidance: &guidance,
        references: if config.display.show_references { bmi::REFERENCES } else { &[] },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn creatinine_json(
    out: &mut impl Write,
    result: &CreatinineResult,
    config: &Config,
) -> medtools_core::Result<()> {
    let guidance = creatinine::guidance(result);
    let report = Report {
        page: Page::CreatinineClearance,
        result: result.rounded(config.display.decimals),
        guidance: &guidance,
        references: if config.display.show_references {
            creatinine::REFERENCES
        } else {
            &[]
        },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtools_core::{compute_bmi, compute_creatinine_clearance, BmiInput, CreatinineInput, Sex};

    #[test]
    fn test_bmi_text_rounds_for_display() {
        let result = compute_bmi(&BmiInput::new(70.0, 1.75)).unwrap();
        let mut out = Vec::new();
        bmi_text(&mut out, &result, &Config::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Your BMI: 22.86 kg/m²"));
        assert!(text.contains("NORMAL WEIGHT"));
        assert!(text.contains("who.int"));
    }

    #[test]
    fn test_references_can_be_hidden() {
        let mut config = Config::default();
        config.display.show_references = false;
        let result =
            compute_creatinine_clearance(&CreatinineInput::new(50, Sex::Male, 70.0, 1.0));
        let mut out = Vec::new();
        creatinine_text(&mut out, &result, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Estimated clearance: 87.50 mL/min"));
        assert!(!text.contains("References"));
    }

    #[test]
    fn test_json_report() {
        let result =
            compute_creatinine_clearance(&CreatinineInput::new(50, Sex::Female, 70.0, 1.0));
        let mut out = Vec::new();
        creatinine_json(&mut out, &result, &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["page"], "creatinine");
        assert_eq!(value["result"]["clearance_ml_min"], 74.38);
        assert_eq!(value["result"]["stage"], "mild");
        assert_eq!(value["guidance"]["severity"], "warning");
        assert_eq!(value["references"].as_array().unwrap().len(), 3);
    }
}
