use std::fmt;

use chrono::{DateTime, Duration, Utc};
use quiz_core::builtin_catalog;
use quiz_core::model::{QuizAttempt, UserProfileDraft};
use storage::{QuizHistory, Storage};

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    attempts: u32,
    name: String,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAttempts { raw: String },
    InvalidDbUrl { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAttempts { raw } => write!(f, "invalid --attempts value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("QUIZ_DB_URL").unwrap_or_else(|_| "sqlite:quiz.sqlite3".into());
        let mut attempts = std::env::var("QUIZ_SEED_ATTEMPTS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(5);
        let mut name = std::env::var("QUIZ_SEED_NAME").unwrap_or_else(|_| "Demo Student".into());
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--attempts" => {
                    let value = require_value(&mut args, "--attempts")?;
                    attempts = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidAttempts { raw: value.clone() })?;
                }
                "--name" => {
                    name = require_value(&mut args, "--name")?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            attempts,
            name,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>      SQLite URL (default: sqlite:quiz.sqlite3)");
    eprintln!("  --attempts <n>         History entries to write (default: 5)");
    eprintln!("  --name <name>          Profile name (default: Demo Student)");
    eprintln!("  --now <rfc3339>        Timestamp of the newest attempt (default: now)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_SEED_ATTEMPTS, QUIZ_SEED_NAME");
}

/// Attempts cycling through the bundled quizzes, newest first, one day apart.
fn demo_history(attempts: u32, now: DateTime<Utc>) -> Result<QuizHistory, Box<dyn std::error::Error>> {
    let catalog = builtin_catalog()?;
    let quizzes: Vec<_> = catalog.quizzes().collect();
    if quizzes.is_empty() {
        return Ok(QuizHistory::default());
    }

    let entries = (0..attempts)
        .map(|idx| {
            let quiz = quizzes[idx as usize % quizzes.len()];
            let total = u32::try_from(quiz.question_count()).unwrap_or(u32::MAX);
            let score = total.saturating_sub(idx % 2);
            QuizAttempt::new(
                quiz.id().clone(),
                quiz.title(),
                score,
                total,
                now - Duration::days(i64::from(idx)),
            )
        })
        .collect();
    Ok(QuizHistory(entries))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let profile = UserProfileDraft {
        name: args.name.clone(),
        email: "user@example.com".into(),
        ..UserProfileDraft::new()
    }
    .validate();
    storage.save(&profile).await?;

    let history = demo_history(args.attempts, now)?;
    let written = history.0.len();
    storage.save(&history).await?;

    println!(
        "seeded profile '{}' and {written} attempts into {}",
        args.name, args.db_url
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
