use clap::{Parser, Subcommand};
use presence_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "presence")]
#[command(about = "Shared pupil/tutor presence calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lesson window as comma-separated start,end points
    #[arg(long, global = true, conflicts_with = "input")]
    lesson: Option<String>,

    /// Pupil presence points, comma-separated
    #[arg(long, global = true, conflicts_with = "input")]
    pupil: Option<String>,

    /// Tutor presence points, comma-separated
    #[arg(long, global = true, conflicts_with = "input")]
    tutor: Option<String>,

    /// Read the three schedules from a JSON file instead
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Skip the self-overlap check entirely
    #[arg(long, global = true)]
    no_overlap_check: bool,

    /// Continue past a self-overlap warning without prompting
    #[arg(long, global = true)]
    assume_continue: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the total time pupil and tutor are both present (default)
    Compute,
}

fn main() {
    presence_core::logging::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        // No subcommand defaults to "compute"
        Some(Commands::Compute) | None => cmd_compute(
            cli.lesson,
            cli.pupil,
            cli.tutor,
            cli.input,
            cli.no_overlap_check,
            cli.assume_continue,
            &config,
        ),
    }
}

fn cmd_compute(
    lesson: Option<String>,
    pupil: Option<String>,
    tutor: Option<String>,
    input: Option<PathBuf>,
    no_overlap_check: bool,
    assume_continue: bool,
    config: &Config,
) -> Result<()> {
    let record = match input {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            let record = serde_json::from_str::<PresenceRecord>(&contents)?;
            tracing::info!("Loaded schedules from {:?}", path);
            record
        }
        None => {
            let (Some(lesson), Some(pupil), Some(tutor)) = (lesson, pupil, tutor) else {
                return Err(Error::Other(
                    "pass --lesson, --pupil and --tutor together, or --input <file>".into(),
                ));
            };
            PresenceRecord {
                lesson: parse_points(&lesson)?,
                pupil: parse_points(&pupil)?,
                tutor: parse_points(&tutor)?,
            }
        }
    };

    let check_overlaps = if no_overlap_check {
        false
    } else {
        config.validation.check_overlaps
    };
    let assume_continue = assume_continue || config.prompt.assume_continue;

    let outcome = shared_presence(
        &record.lesson,
        &record.pupil,
        &record.tutor,
        check_overlaps,
        || assume_continue || prompt_continue(),
    )?;

    match outcome {
        Outcome::Total(total) => {
            println!("Total shared presence: {} seconds", total);
        }
        Outcome::Aborted => {
            println!("Stopped at user request.");
        }
    }

    Ok(())
}

/// Parse a comma-separated list of non-negative time points.
/// An empty string yields an empty schedule; validation reports it.
fn parse_points(raw: &str) -> Result<Vec<u64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<u64>().map_err(|_| {
                Error::InvalidInterval(format!("`{}` is not a non-negative integer", token))
            })
        })
        .collect()
}

/// Ask whether to continue past a self-overlap warning.
/// An empty line stops the run, anything else continues. EOF or a
/// read failure stops too.
fn prompt_continue() -> bool {
    println!("Warning: a schedule contains overlapping intervals.");
    println!("Results may differ from expectations.");
    print!("Press Enter to quit, or type anything to continue > ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    !answer.trim().is_empty()
}
