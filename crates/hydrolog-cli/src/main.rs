use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use hydrolog_core::{TrackerConfig, TrackerService};

mod session;

#[derive(Parser)]
#[command(name = "hydrolog-cli", version, about = "Hydrolog interactive tracker")]
struct Cli {
    /// Starting goal in liters, overriding the configured default
    #[arg(long)]
    goal: Option<f64>,
    /// Explicit config file path (defaults to ~/.config/hydrolog/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Suppress the greeting and prompts (for scripted sessions)
    #[arg(long)]
    quiet: bool,
}

fn main() {
    // Held for the process lifetime; dropping it would stop the logger.
    let _logger = init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => TrackerConfig::load_path(path)?,
        None => TrackerConfig::load_or_default(),
    };
    let mut svc = TrackerService::from_config(&config);
    log::debug!(
        "session starting on {} with a {}-unit goal",
        svc.current_date(),
        svc.goal_units()
    );

    if let Some(goal_liters) = cli.goal {
        if !goal_liters.is_finite() || goal_liters <= 0.0 {
            return Err("--goal must be a positive number of liters".into());
        }
        // Fresh tracker, nothing logged yet, so the proposal cannot fail.
        let units = (goal_liters * 10.0).round() as u32;
        svc.propose_goal(units)?;
    }

    let stdout = std::io::stdout();
    if !cli.quiet {
        writeln!(
            stdout.lock(),
            "Hydrolog — {} — {} (type `help` for commands)",
            svc.snapshot().date_text,
            svc.goal_label()
        )?;
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match session::dispatch(&mut svc, &line) {
            session::Outcome::Reply(text) => {
                if !text.is_empty() {
                    writeln!(stdout.lock(), "{text}")?;
                }
            }
            session::Outcome::Quit => break,
        }
    }
    Ok(())
}

fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    let level = std::env::var("HYDROLOG_LOG").unwrap_or_else(|_| "warn".to_string());
    // Logging failures must not keep the session from starting.
    match flexi_logger::Logger::try_with_str(&level).and_then(|l| l.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {e}");
            None
        }
    }
}
