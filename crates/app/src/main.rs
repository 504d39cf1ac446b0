use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, QuestionSheet};
use tracing::{info, warn};
use ui::{App, SubmitError, SubmitOutcome, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStart { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStart { raw } => write!(f, "invalid --start value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} needs a non-empty path"),
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

/// Desktop host: answers are logged and the test moves on.
struct DesktopApp {
    sheet: Arc<QuestionSheet>,
    clock: Clock,
    show_timer: bool,
    start: u32,
}

#[async_trait]
impl UiApp for DesktopApp {
    fn sheet(&self) -> Arc<QuestionSheet> {
        Arc::clone(&self.sheet)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn show_timer(&self) -> bool {
        self.show_timer
    }

    fn start_ordinal(&self) -> u32 {
        self.start
    }

    async fn submit_answer(
        &self,
        ordinal: u32,
        selected: Vec<usize>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let Some(question) = self.sheet.question(ordinal) else {
            return Err(SubmitError::UnknownQuestion { ordinal });
        };
        let chosen: Vec<&str> = selected
            .iter()
            .filter_map(|index| question.options.get(*index).map(String::as_str))
            .collect();
        info!(ordinal, ?selected, ?chosen, "answer recorded");

        if ordinal >= self.sheet.total() {
            Ok(SubmitOutcome::Finished)
        } else {
            Ok(SubmitOutcome::Next {
                ordinal: ordinal + 1,
            })
        }
    }
}

struct Args {
    questions: Option<PathBuf>,
    start: u32,
    show_timer: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <file.json>] [--start <n>] [--no-timer]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in sample questions, --start 1, timer shown");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_START, QUIZ_SHOW_TIMER=0, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("QUIZ_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut start = std::env::var("QUIZ_START")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1);
        let mut show_timer = std::env::var("QUIZ_SHOW_TIMER")
            .map(|value| !matches!(value.trim(), "0" | "false" | "no"))
            .unwrap_or(true);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath {
                            flag: "--questions",
                        });
                    }
                    questions = Some(PathBuf::from(value));
                }
                "--start" => {
                    let value = require_value(args, "--start")?;
                    start = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidStart { raw: value.clone() })?;
                }
                "--no-timer" => show_timer = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            start,
            show_timer,
        })
    }
}

fn load_sheet(path: Option<&PathBuf>) -> Result<QuestionSheet, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("no question file configured, using the built-in sample");
        return Ok(QuestionSheet::sample());
    };
    let raw = std::fs::read_to_string(path)?;
    let sheet = QuestionSheet::from_json_str(&raw)?;
    info!(path = %path.display(), total = sheet.total(), "loaded questions");
    Ok(sheet)
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let sheet = load_sheet(parsed.questions.as_ref())?;
    if parsed.start > sheet.total() {
        warn!(
            start = parsed.start,
            total = sheet.total(),
            "start is past the last question"
        );
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        sheet: Arc::new(sheet),
        clock: Clock::default_clock(),
        show_timer: parsed.show_timer,
        start: parsed.start,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Knowledge Test")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
