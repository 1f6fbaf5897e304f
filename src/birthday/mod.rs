//! Birthday reminders for a student roster
//!
//! Selection is split into a predicate, a comparator and an output action so
//! callers can mix the ready-made pieces in [`filters`] with their own.

pub mod filters;
pub mod registrar;

pub use filters::{birthday_within, born_in_month, by_birthday, by_name, by_upcoming, StudentFilter, StudentOrder};
pub use registrar::{parse_roster, Registrar, StudentSource, BUNDLED_ROSTER};

use crate::{
    error::Result,
    models::{ReminderConfig, Student},
    output::OutputFormatter,
};
use std::cmp::Ordering;
use std::io::Write;

/// Students matching `filter`, ordered by `by`.
///
/// The sort is stable, so students comparing equal keep roster order.
pub fn select<'a, P, C>(students: &'a [Student], filter: P, by: C) -> Vec<&'a Student>
where
    P: Fn(&Student) -> bool,
    C: Fn(&Student, &Student) -> Ordering,
{
    let mut selected: Vec<&Student> = students.iter().filter(|&student| filter(student)).collect();
    selected.sort_by(|a, b| by(*a, *b));
    selected
}

/// Apply `action` to every student matching `filter`, in `by` order.
///
/// Returns the number of matching students; nothing happens for an empty match.
pub fn filter_and_print<P, C, A>(students: &[Student], filter: P, by: C, mut action: A) -> usize
where
    P: Fn(&Student) -> bool,
    C: Fn(&Student, &Student) -> Ordering,
    A: FnMut(&Student),
{
    let selected = select(students, filter, by);
    for &student in &selected {
        action(student);
    }
    selected.len()
}

/// Prints the reminders a [`ReminderConfig`] asks for
pub struct BirthdayReminder {
    config: ReminderConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl BirthdayReminder {
    pub fn new(config: ReminderConfig, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { config, formatter }
    }

    /// Formatter used for reminder lines
    pub fn formatter(&self) -> &dyn OutputFormatter {
        self.formatter.as_ref()
    }

    /// Predicate for the configured month or reminder window
    pub fn filter(&self) -> StudentFilter {
        match self.config.within_days {
            Some(days) => Box::new(birthday_within(self.config.today, days)),
            None => Box::new(born_in_month(self.config.month)),
        }
    }

    /// Comparator for the configured sort order
    pub fn order(&self) -> StudentOrder {
        filters::comparator(self.config.sort, self.config.today)
    }

    /// Human-readable description of what is being listed
    pub fn describe(&self) -> String {
        match self.config.within_days {
            Some(days) => format!("Birthdays within {} days of {}", days, self.config.today.format("%-d %B")),
            None => format!("Birthdays in {}", crate::output::month_name(self.config.month)),
        }
    }

    /// Write one reminder line per matching student; returns the match count
    pub fn run<W: Write + ?Sized>(&self, students: &[Student], out: &mut W) -> Result<usize> {
        let mut lines = Vec::new();
        let matched = filter_and_print(students, self.filter(), self.order(), |student| {
            lines.push(self.formatter.format_reminder(student));
        });

        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(matched)
    }
}
