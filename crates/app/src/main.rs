use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{TraitId, TraitPriority};
use services::QuizService;
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "旅のタイプ診断";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataset { raw: String },
    InvalidPriority { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataset { raw } => write!(f, "invalid --dataset value: {raw:?}"),
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

fn parse_priority(raw: String) -> Result<TraitPriority, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidPriority { raw })
}

struct DesktopApp {
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Debug, Default)]
struct Args {
    dataset: Option<PathBuf>,
    priority: Option<TraitPriority>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--dataset <path>] [--priority <EAOC>]");
    eprintln!("  cargo run -p app -- check [--dataset <path>] [--priority <EAOC>]");
    eprintln!();
    eprintln!("Without --dataset the built-in travel quiz is used.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATASET, QUIZ_TRAIT_PRIORITY, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut dataset = std::env::var("QUIZ_DATASET")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut priority = match std::env::var("QUIZ_TRAIT_PRIORITY") {
            Ok(value) if !value.trim().is_empty() => Some(parse_priority(value)?),
            _ => None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dataset" => {
                    let value = require_value(args, "--dataset")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataset { raw: value });
                    }
                    dataset = Some(PathBuf::from(value));
                }
                "--priority" => {
                    let value = require_value(args, "--priority")?;
                    priority = Some(parse_priority(value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { dataset, priority })
    }

    fn storage(&self) -> Storage {
        match &self.dataset {
            Some(path) => Storage::json_file(path.clone()),
            None => Storage::embedded(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn load_quiz(args: &Args) -> Result<QuizService, Box<dyn std::error::Error>> {
    let storage = args.storage();
    let mut quiz = QuizService::load(storage.dataset.as_ref()).await?;
    if let Some(priority) = args.priority {
        info!(%priority, "overriding trait priority");
        quiz = quiz.with_priority(priority);
    }
    Ok(quiz)
}

fn print_check(quiz: &QuizService) {
    let dataset = quiz.dataset();
    println!("questions: {}", dataset.total_questions());
    for trait_id in TraitId::ALL {
        let result = dataset.result_for(trait_id);
        println!(
            "  {trait_id}: {} questions -> {} ({})",
            dataset.question_count_for(trait_id),
            result.label,
            result.spot_name,
        );
    }
    println!("priority: {}", dataset.priority());
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    let quiz = load_quiz(&parsed).await?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz: Arc::new(quiz),
            });
            let context = build_app_context(&app);

            // Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            print_check(&quiz);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
