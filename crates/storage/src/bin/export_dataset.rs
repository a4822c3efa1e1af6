use std::fmt;
use std::path::PathBuf;

use quiz_core::model::TraitPriority;
use storage::json::to_json_pretty;
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    priority: Option<TraitPriority>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str, raw: String },
    InvalidPriority { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
            ArgsError::InvalidPriority { raw } => {
                write!(f, "invalid --priority value (expected e.g. EAOC): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut input = std::env::var("QUIZ_DATASET").ok().map(PathBuf::from);
        let mut out = None;
        let mut priority = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--in" => input = Some(require_path(&mut args, "--in")?),
                "--out" => out = Some(require_path(&mut args, "--out")?),
                "--priority" => {
                    let value = require_value(&mut args, "--priority")?;
                    let parsed = value
                        .parse::<TraitPriority>()
                        .map_err(|_| ArgsError::InvalidPriority { raw: value.clone() })?;
                    priority = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            input,
            out,
            priority,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin export-dataset -- [options]");
    eprintln!();
    eprintln!("Validates a quiz dataset and writes it as pretty JSON.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --in <path>         Dataset file to read (default: embedded dataset)");
    eprintln!("  --out <path>        Output file (default: stdout)");
    eprintln!("  --priority <EAOC>   Override the tie-break order before writing");
    eprintln!("  -h, --help          Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATASET (same as --in)");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = match &args.input {
        Some(path) => Storage::json_file(path),
        None => Storage::embedded(),
    };
    let mut dataset = storage.dataset.load_dataset().await?;
    if let Some(priority) = args.priority {
        dataset = dataset.with_priority(priority);
    }

    let json = to_json_pretty(&dataset)?;
    match &args.out {
        Some(path) => {
            tokio::fs::write(path, format!("{json}\n")).await?;
            eprintln!(
                "Exported {} questions to {}",
                dataset.total_questions(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
