//! Command-line interface for the Luxtronik 2 bridge registry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use luxtronik_core::config::{
    validate_config, Language, Platform, DEFAULT_LOCK_TIMEOUT_SECS, DEFAULT_PORT,
    DEFAULT_TOLERANCE, DOMAIN, MIN_TIME_BETWEEN_UPDATES, PLATFORMS,
};
use luxtronik_core::{LuxMode, LuxStatus, UnitClass, UnitInfo, WriteRequest};
use serde::Serialize;
use serde_json::{json, Value};

/// Luxtronik 2 heat-pump bridge - validate configuration and inspect lookup tables.
#[derive(Parser, Debug)]
#[command(name = "luxtronik")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a configuration file (JSON or TOML) and print the normalized block.
    Validate {
        /// Path to the configuration file.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Validate a write-service call and print it.
    Write {
        /// Controller parameter name.
        #[arg(long)]
        parameter: String,
        /// Value to write; numbers are sent as numbers.
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Show label, icon and activity of a status code or label.
    Status {
        /// Numeric status code or status label.
        status: String,
    },
    /// Show icon, device class and unit of a unit class.
    Unit {
        /// Unit-class key, e.g. celsius.
        class: String,
    },
    /// Print integration defaults.
    Defaults,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Validate { path } => run_validate(&path),
        Command::Write { parameter, value } => run_write(parameter, &value),
        Command::Status { status } => run_status(&status),
        Command::Unit { class } => run_unit(&class),
        Command::Defaults => run_defaults(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    // JSON format for log collectors
    let json_logging = std::env::var("LUXTRONIK_LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("luxtronik={level},luxtronik_core={level}"))
    });

    // Logs go to stderr so stdout stays machine-readable.
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

/// Load a configuration document. `.json` files are parsed as JSON,
/// everything else as TOML.
fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))
    }
}

fn run_validate(path: &Path) -> Result<()> {
    let document = load_document(path)?;
    let config = validate_config(&document)
        .with_context(|| format!("Invalid {} configuration in {}", DOMAIN, path.display()))?;
    tracing::info!("Configuration for {} is valid", config.socket_addr_string());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn run_write(parameter: String, raw: &str) -> Result<()> {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Number(n)) => Value::Number(n),
        _ => Value::String(raw.to_string()),
    };
    let request = WriteRequest::from_value(&json!({ "parameter": parameter, "value": value }))?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn run_status(input: &str) -> Result<()> {
    let status = match input.trim().parse::<i64>() {
        Ok(code) => LuxStatus::from_code(code),
        Err(_) => LuxStatus::from_label(input),
    };
    println!("{}", serde_json::to_string_pretty(&status.info())?);
    Ok(())
}

/// A unit class with its decoration.
#[derive(Serialize)]
struct UnitOutput {
    class: UnitClass,
    #[serde(flatten)]
    info: UnitInfo,
}

fn run_unit(key: &str) -> Result<()> {
    let class: UnitClass = key.parse()?;
    let out = UnitOutput {
        class,
        info: class.info(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Integration defaults as printed by `luxtronik defaults`.
#[derive(Serialize)]
struct Defaults {
    domain: &'static str,
    port: u16,
    safe: bool,
    lock_timeout: u64,
    update_immediately_after_write: bool,
    tolerance: f64,
    min_time_between_updates_secs: u64,
    platforms: &'static [Platform],
    languages: &'static [Language],
    default_language: Language,
    modes: &'static [LuxMode],
}

fn run_defaults() -> Result<()> {
    let out = Defaults {
        domain: DOMAIN,
        port: DEFAULT_PORT,
        safe: true,
        lock_timeout: DEFAULT_LOCK_TIMEOUT_SECS,
        update_immediately_after_write: false,
        tolerance: DEFAULT_TOLERANCE,
        min_time_between_updates_secs: MIN_TIME_BETWEEN_UPDATES.as_secs(),
        platforms: &PLATFORMS,
        languages: &Language::ALL,
        default_language: Language::default(),
        modes: &LuxMode::ALL,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
