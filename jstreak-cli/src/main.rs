mod cli;
mod render;

use anyhow::Result;
use cli::Cli;
use jstreak_core::{
    Clock, Config, FixedClock, JournalDir, LoadResult, StreakEngine, SystemClock,
    load_json_entries, month_calendar, unique_days,
};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::new();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jstreak: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // `--path` only needs the journal root, so a bad frame or format must not block it.
    if cli.path {
        println!("{}", Config::load_journal_dir()?.display());
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(frame) = cli.time_zone {
        config.day_frame = frame;
    }
    if let Some(dir) = &cli.journal_dir {
        config.journal_dir = dir.clone();
        config.entries_file = None;
    }
    if let Some(file) = &cli.file {
        config.entries_file = Some(file.clone());
    }

    let renderer = Renderer::new(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
    });

    let today = cli
        .today
        .unwrap_or_else(|| SystemClock.today(config.day_frame));
    let engine = StreakEngine::with_clock(config.day_frame, FixedClock(today));
    debug!(%today, frame = %engine.frame(), "starting");

    let loaded = load_entries(&config)?;

    if let Some(month) = cli.calendar {
        let days = unique_days(&loaded.entries, engine.frame());
        let calendar = month_calendar(&days, month.year, month.month)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&calendar)?);
        } else {
            renderer.print_calendar(&calendar);
        }
    } else {
        let report = engine.report(&loaded.entries);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            renderer.print_report(&report);
        }
    }

    renderer.print_errors(&loaded.errors);
    Ok(())
}

/// The JSON export wins over the journal directory when both are configured.
fn load_entries(config: &Config) -> Result<LoadResult> {
    match &config.entries_file {
        Some(path) => Ok(load_json_entries(path)?.into()),
        None => JournalDir::from_config(config).read_entries(config.day_frame),
    }
}
