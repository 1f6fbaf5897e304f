//! Birthday Reminder - lists the students whose birthdays are coming up

use clap::Parser;
use classroom_tools::{
    birthday::{BirthdayReminder, Registrar, StudentSource},
    cli::BirthdayCli,
    config::{display_reminder_summary, load_reminder_config, EnvManager},
    error::{AppError, ErrorReporter, Result},
    logging::Logger,
    output::OutputFormatterFactory,
    version_banner,
};
use std::io::{self, Write};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = BirthdayCli::parse();
    let use_color = !cli.no_color;
    let verbose = cli.verbose;

    if let Err(e) = run_application(cli) {
        ErrorReporter::new(use_color, verbose).report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: BirthdayCli) -> Result<()> {
    if cli.debug {
        eprintln!("{}", version_banner("birthdays"));
        eprintln!("Debug mode enabled");
        for warning in EnvManager::validate_current_env() {
            eprintln!("{}", warning);
        }
    }

    let config = load_reminder_config(cli)?;
    let logger = Logger::with_level_flags("birthdays", config.verbose, config.debug, config.enable_color);

    if config.debug {
        eprintln!("Configuration loaded successfully:");
        for line in display_reminder_summary(&config).lines() {
            eprintln!("  {}", line);
        }
    }

    let registrar = Registrar::from_optional_path(config.roster_path.as_deref());
    let students = registrar.students()?;
    logger.info("Roster loaded")
        .field("source", registrar.to_string())
        .field("students", students.len())
        .log();

    let verbose = config.verbose;
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color);
    let reminder = BirthdayReminder::new(config, formatter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if verbose {
        writeln!(out, "{}", reminder.formatter().format_header(&reminder.describe()))?;
    }

    let matched = reminder.run(&students, &mut out)?;
    out.flush()?;

    logger.info("Reminders printed")
        .field("matched", matched)
        .log();

    if verbose {
        writeln!(out)?;
        writeln!(out, "{} of {} students matched", matched, students.len())?;
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Months are numbered 1 to 12");
            eprintln!("  - Use either --month or --within, not both");
            eprintln!("  - Check STUDENT_ROSTER and ENABLE_COLOR in your environment or .env file");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Roster help:");
            eprintln!("  - The roster must be a JSON array of objects");
            eprintln!("  - Each object needs \"name\" and \"birthdate\" (YYYY-MM-DD)");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("Check that the roster file exists and is readable");
        }
        _ => {}
    }
}
