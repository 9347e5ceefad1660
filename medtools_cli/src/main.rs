mod render;
mod shell;

use clap::{Parser, Subcommand};
use medtools_core::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "medtools")]
#[command(about = "Clinical calculators: BMI and creatinine clearance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Body Mass Index
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in metres
        #[arg(long)]
        height: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate creatinine clearance (Cockcroft-Gault)
    Creatinine {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Sex (male, female)
        #[arg(long)]
        sex: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Serum creatinine in mg/dL
        #[arg(long)]
        creatinine: f64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Menu-driven session (default)
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Bmi {
            weight,
            height,
            json,
        }) => cmd_bmi(weight, height, json, &config),
        Some(Commands::Creatinine {
            age,
            sex,
            weight,
            creatinine,
            json,
        }) => cmd_creatinine(age, &sex, weight, creatinine, json, &config),
        Some(Commands::Interactive) | None => cmd_interactive(config),
    }
}

fn cmd_bmi(weight: f64, height: f64, json: bool, config: &Config) -> Result<()> {
    let result = BmiInput::validated(weight, height, &config.bmi)
        .and_then(|input| compute_bmi(&input))?;

    let mut out = io::stdout().lock();
    if json {
        render::bmi_json(&mut out, &result, config)
    } else {
        render::banner(&mut out, Page::Bmi.title())?;
        render::bmi_text(&mut out, &result, config)?;
        Ok(())
    }
}

fn cmd_creatinine(
    age: u32,
    sex: &str,
    weight: f64,
    creatinine: f64,
    json: bool,
    config: &Config,
) -> Result<()> {
    let result = sex
        .parse::<Sex>()
        .and_then(|sex| CreatinineInput::validated(age, sex, weight, creatinine, &config.creatinine))
        .map(|input| compute_creatinine_clearance(&input))?;

    let mut out = io::stdout().lock();
    if json {
        render::creatinine_json(&mut out, &result, config)
    } else {
        render::banner(&mut out, Page::CreatinineClearance.title())?;
        render::creatinine_text(&mut out, &result, config)?;
        Ok(())
    }
}

fn cmd_interactive(config: Config) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    shell::Shell::new(config, stdin, stdout).run()
}
