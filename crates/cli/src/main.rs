// junkcheck CLI - headless VIN junk-status checks

mod exit_codes;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use junkcheck_io::{read_reference, read_report};
use junkcheck_recon::config::CheckConfig;
use junkcheck_recon::engine::reconcile;
use junkcheck_recon::extract::{extract_field, FIELD_STATUS, FIELD_VIN};
use junkcheck_recon::model::Verdict;

use exit_codes::{
    EXIT_CHECK_CLASSIFICATION_MISMATCH, EXIT_CHECK_INVALID_CONFIG, EXIT_CHECK_NOT_IN_REFERENCE,
    EXIT_CHECK_RUNTIME, EXIT_CHECK_VIN_MISMATCH, EXIT_CHECK_VIN_UNAVAILABLE, EXIT_SUCCESS,
    EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "junkcheck")]
#[command(about = "Cross-check two vehicle-history reports against a reference table")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a check from a TOML config file
    #[command(after_help = "\
Examples:
  junkcheck run intake.check.toml
  junkcheck run intake.check.toml --json
  junkcheck run intake.check.toml --output result.json")]
    Run {
        /// Path to the .check.toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary only
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a check from command-line flags
    #[command(after_help = "\
Examples:
  junkcheck check --reference classified.xlsx --carfax carfax.json --manheim manheim.json
  junkcheck check --reference classified.csv --carfax carfax.json --vin 1G1AB2CD3EF456789
  junkcheck check --reference classified.csv --vin 1G1AB2CD3EF456789 --json")]
    Check {
        /// Reference spreadsheet (csv, tsv, xlsx, xls, xlsb, ods)
        #[arg(long)]
        reference: PathBuf,

        /// Carfax-style report record (JSON)
        #[arg(long)]
        carfax: Option<PathBuf>,

        /// Manheim-style report record (JSON)
        #[arg(long)]
        manheim: Option<PathBuf>,

        /// Manual VIN, used when neither report carries one
        #[arg(long)]
        vin: Option<String>,

        /// Output JSON to stdout instead of human summary only
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a check config without running
    #[command(after_help = "\
Examples:
  junkcheck validate intake.check.toml")]
    Validate {
        /// Path to the .check.toml config file
        config: PathBuf,
    },

    /// Show the VIN and status extracted from one report
    #[command(after_help = "\
Examples:
  junkcheck inspect carfax.json
  junkcheck inspect manheim.json --json")]
    Inspect {
        /// Report record (JSON)
        report: PathBuf,

        /// Output JSON instead of the human view
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output } => cmd_run(config, json, output),
        Commands::Check { reference, carfax, manheim, vin, json, output } => {
            cmd_check(reference, carfax, manheim, vin, json, output)
        }
        Commands::Validate { config } => cmd_validate(config),
        Commands::Inspect { report, json } => cmd_inspect(report, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CHECK_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CHECK_RUNTIME, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// Result envelope
// ============================================================================

#[derive(Debug, Serialize)]
struct CheckResult {
    meta: CheckMeta,
    verdict: Verdict,
    classification_matches: bool,
}

#[derive(Debug, Serialize)]
struct CheckMeta {
    config_name: String,
    engine_version: String,
    run_at: String,
}

impl CheckResult {
    fn new(config_name: &str, verdict: Verdict) -> Self {
        Self {
            meta: CheckMeta {
                config_name: config_name.to_string(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
            },
            classification_matches: verdict.classification_matches(),
            verdict,
        }
    }
}

// ============================================================================
// run / check
// ============================================================================

fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::runtime(format!("cannot read config: {e}")))?;

    let config = CheckConfig::from_toml(&config_str).map_err(|e| CliError::config(e.to_string()))?;

    // Resolve file paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let carfax = config
        .reports
        .carfax
        .as_deref()
        .map(|file| load_report(&base_dir.join(file)))
        .transpose()?;
    let manheim = config
        .reports
        .manheim
        .as_deref()
        .map(|file| load_report(&base_dir.join(file)))
        .transpose()?;

    let reference_rows = load_reference(&base_dir.join(&config.reference.file))?;
    let manual_vin = config.manual_vin.as_deref().unwrap_or("");

    let verdict = reconcile(carfax.as_ref(), manheim.as_ref(), manual_vin, &reference_rows);
    emit_result(&config.name, verdict, json_output, output_file)
}

fn cmd_check(
    reference: PathBuf,
    carfax: Option<PathBuf>,
    manheim: Option<PathBuf>,
    vin: Option<String>,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let manual_vin = vin.as_deref().unwrap_or("").trim().to_string();
    if carfax.is_none() && manheim.is_none() && manual_vin.is_empty() {
        return Err(CliError::args("no report given and no VIN to check")
            .with_hint("pass --carfax and/or --manheim, or --vin"));
    }

    let carfax = carfax.as_deref().map(load_report).transpose()?;
    let manheim = manheim.as_deref().map(load_report).transpose()?;
    let reference_rows = load_reference(&reference)?;

    let verdict = reconcile(carfax.as_ref(), manheim.as_ref(), &manual_vin, &reference_rows);
    emit_result("ad hoc check", verdict, json_output, output_file)
}

fn load_report(path: &Path) -> Result<Value, CliError> {
    read_report(path).map_err(|e| CliError::runtime(e.to_string()))
}

fn load_reference(path: &Path) -> Result<Vec<Value>, CliError> {
    read_reference(path).map_err(|e| CliError::runtime(e.to_string()))
}

fn emit_result(
    config_name: &str,
    verdict: Verdict,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let result = CheckResult::new(config_name, verdict);

    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::runtime(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    let v = &result.verdict;
    let statuses = format!(
        "carfax \"{}\", manheim \"{}\" -> result \"{}\"",
        v.resolved_status_a, v.resolved_status_b, v.final_result,
    );
    match v.reference_classification.as_deref() {
        Some(label) => eprintln!("check '{config_name}': {statuses}, reference \"{label}\""),
        None => eprintln!("check '{config_name}': {statuses}, reference label unavailable"),
    }

    match verdict_exit(v) {
        EXIT_SUCCESS => Ok(()),
        EXIT_CHECK_VIN_MISMATCH => {
            Err(CliError {
                code: EXIT_CHECK_VIN_MISMATCH,
                message: "reports disagree on VIN".into(),
                hint: Some("re-pull both reports or confirm the vehicle identity".into()),
            })
        }
        EXIT_CHECK_VIN_UNAVAILABLE => {
            Err(CliError {
                code: EXIT_CHECK_VIN_UNAVAILABLE,
                message: "no VIN available from reports".into(),
                hint: Some("supply one with --vin or manual_vin".into()),
            })
        }
        EXIT_CHECK_NOT_IN_REFERENCE => {
            Err(CliError {
                code: EXIT_CHECK_NOT_IN_REFERENCE,
                message: "VIN not present in the reference table".into(),
                hint: None,
            })
        }
        code => Err(CliError {
            code,
            message: "reference classification disagrees with the resolved result".into(),
            hint: None,
        }),
    }
}

/// Map a verdict to its exit code, in flag priority order.
fn verdict_exit(verdict: &Verdict) -> u8 {
    if verdict.vin_mismatch {
        EXIT_CHECK_VIN_MISMATCH
    } else if verdict.vin_unavailable {
        EXIT_CHECK_VIN_UNAVAILABLE
    } else if verdict.vin_not_in_reference {
        EXIT_CHECK_NOT_IN_REFERENCE
    } else if !verdict.classification_matches() {
        EXIT_CHECK_CLASSIFICATION_MISMATCH
    } else {
        EXIT_SUCCESS
    }
}

// ============================================================================
// validate
// ============================================================================

fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::runtime(format!("cannot read config: {e}")))?;

    let config = CheckConfig::from_toml(&config_str).map_err(|e| CliError::config(e.to_string()))?;

    let report_count =
        config.reports.carfax.is_some() as usize + config.reports.manheim.is_some() as usize;
    eprintln!(
        "valid: check '{}' with {} report(s), reference {}{}",
        config.name,
        report_count,
        config.reference.file,
        if config.manual_vin.is_some() { ", manual VIN" } else { "" },
    );
    Ok(())
}

// ============================================================================
// inspect
// ============================================================================

fn cmd_inspect(report_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let report = load_report(&report_path)?;

    let vin = extract_field(Some(&report), FIELD_VIN);
    let status = extract_field(Some(&report), FIELD_STATUS);

    if json_output {
        let out = serde_json::json!({ "vin": vin, "status": status });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("vin:    {}", vin.as_deref().unwrap_or("(absent)"));
        println!("status: {}", status.as_deref().unwrap_or("(absent)"));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
