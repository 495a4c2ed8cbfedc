use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::{CourseSeed, SeedError};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::EditorSession;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeedPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeedPath { raw } => write!(f, "invalid --seed value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Args(#[from] ArgsError),
    #[error("unknown subcommand: {0}")]
    UnknownCommand(String),
    #[error("failed to read seed file {path}: {source}")]
    ReadSeed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to load seed: {0}")]
    Seed(#[from] SeedError),
    #[error("failed to encode course: {0}")]
    Encode(#[from] serde_json::Error),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    session: EditorSession,
}

impl UiApp for DesktopApp {
    fn initial_session(&self) -> EditorSession {
        self.session.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed_path: Option<PathBuf>,
    log_filter: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--seed <course.json>] [--log <filter>]");
    eprintln!("  cargo run -p app -- dump [--seed <course.json>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --seed  bundled demo course");
    eprintln!("  --log   {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Dump,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "dump" => Some(Self::Dump),
            _ => None,
        }
    }
}

impl Args {
    fn defaults(seed_env: Option<String>, log_env: Option<String>) -> Self {
        Self {
            seed_path: seed_env
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            log_filter: log_env
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    fn parse(
        mut self,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSeedPath { raw: value });
                    }
                    self.seed_path = Some(PathBuf::from(value));
                }
                "--log" => {
                    self.log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Some(self))
    }

    fn from_env(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        Self::defaults(std::env::var("COURSE_SEED").ok(), std::env::var("RUST_LOG").ok())
            .parse(args)
    }
}

fn split_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), AppError> {
    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| AppError::UnknownCommand(first.to_string()))?
        }
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }
    Ok((cmd, argv))
}

fn load_seed(path: Option<&PathBuf>) -> Result<CourseSeed, AppError> {
    let Some(path) = path else {
        return Ok(CourseSeed::demo());
    };
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadSeed {
        path: path.clone(),
        source,
    })?;
    Ok(CourseSeed::from_json(&json)?)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second init (tests, embedding) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), AppError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (cmd, argv) = split_command(argv)?;

    let mut iter = argv.into_iter();
    let Some(parsed) = Args::from_env(&mut iter)? else {
        print_usage();
        return Ok(());
    };

    init_tracing(&parsed.log_filter);

    let seed = load_seed(parsed.seed_path.as_ref())?;
    let session = EditorSession::from_seed(seed)?;
    tracing::info!(
        course = session.course().name(),
        sections = session.course().sections().len(),
        duration = %session.course().duration(),
        "course loaded"
    );

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { session });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Course Content")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Dump => {
            let json = serde_json::to_string_pretty(&session.course().to_seed())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        if matches!(err, AppError::Args(_) | AppError::UnknownCommand(_)) {
            print_usage();
        }
        std::process::exit(2);
    }
}
