//! Task Timer - times six ways of reading a word list

use clap::Parser;
use classroom_tools::{
    cli::TimerCli,
    config::{display_timer_summary, load_timer_config, EnvManager},
    error::{AppError, ErrorReporter, Result},
    logging::Logger,
    output::OutputFormatterFactory,
    timer::TaskTimer,
    version_banner,
};
use std::io::{self, Write};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = TimerCli::parse();
    let use_color = !cli.no_color;
    let verbose = cli.verbose;

    if let Err(e) = run_application(cli) {
        ErrorReporter::new(use_color, verbose).report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
///
/// Individual task failures are printed by the timer and do not change the
/// exit status.
fn run_application(cli: TimerCli) -> Result<()> {
    if cli.debug {
        eprintln!("{}", version_banner("tasktimer"));
        eprintln!("Debug mode enabled");
        for warning in EnvManager::validate_current_env() {
            eprintln!("{}", warning);
        }
    }

    let config = load_timer_config(cli)?;
    let logger = Logger::with_level_flags("tasktimer", config.verbose, config.debug, config.enable_color);

    if config.debug {
        eprintln!("Configuration loaded successfully:");
        for line in display_timer_summary(&config).lines() {
            eprintln!("  {}", line);
        }
    }

    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);
    let timer = TaskTimer::from_config(&config, formatter).with_logger(logger.clone());

    logger.info("Starting tasks")
        .field("source", timer.source().to_string())
        .field("tasks", timer.task_count())
        .log();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = timer.run_all(&mut out)?;

    if config.verbose {
        writeln!(out)?;
        writeln!(out, "{}", timer.format_summary(&results))?;
    }
    out.flush()?;

    let failed: Vec<&AppError> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().err().map(|failure| &failure.error))
        .collect();
    if !failed.is_empty() {
        let summary = ErrorReporter::new(config.enable_color, config.verbose).format_error_summary(&failed);
        logger.warn("Some tasks failed")
            .field("failed", failed.len())
            .field("summary", summary)
            .log();
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    if let AppError::Config(_) | AppError::Validation(_) = error {
        eprintln!();
        eprintln!("Configuration help:");
        eprintln!("  - Task numbers run from 1 to 6");
        eprintln!("  - --max-count must be between 1 and 1000000");
        eprintln!("  - Check TASKTIMER_WORDLIST and TASKTIMER_MAX_COUNT in your environment or .env file");
    }
}
