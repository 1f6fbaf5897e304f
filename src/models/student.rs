//! Student record and the birthday arithmetic derived from it

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leap year used to place a month/day on a single ordinal scale
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A student as provided by the registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name
    pub name: String,

    /// Date of birth
    pub birthdate: NaiveDate,
}

impl Student {
    /// Create a new student record
    pub fn new<S: Into<String>>(name: S, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthdate,
        }
    }

    /// Birth month, 1-based
    pub fn birth_month(&self) -> u32 {
        self.birthdate.month()
    }

    /// Day of the month of the birthday
    pub fn birth_day(&self) -> u32 {
        self.birthdate.day()
    }

    /// 1-based day-of-year of the birthday, independent of the birth year.
    ///
    /// Every birthday is placed in a leap year, so 29 February always sits
    /// between 28 February and 1 March and a given month/day maps to the
    /// same ordinal regardless of when the student was born.
    pub fn day_of_year(&self) -> u32 {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, self.birth_month(), self.birth_day())
            .map_or(self.birthdate.ordinal(), |date| date.ordinal())
    }

    /// Date the birthday is celebrated in `year`.
    ///
    /// 29 February falls back to 1 March in non-leap years.
    pub fn birthday_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.birth_month(), self.birth_day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.birthdate)
    }

    /// Days from `today` until the next birthday; 0 when it is today
    pub fn days_until_birthday(&self, today: NaiveDate) -> i64 {
        let this_year = self.birthday_in(today.year());
        if this_year >= today {
            (this_year - today).num_days()
        } else {
            (self.birthday_in(today.year() + 1) - today).num_days()
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_of_year_ignores_birth_year() {
        let leap = Student::new("A", date(2000, 3, 1));
        let common = Student::new("B", date(2001, 3, 1));
        assert_eq!(leap.day_of_year(), common.day_of_year());
        assert_eq!(common.day_of_year(), 61);

        let jan_first = Student::new("C", date(1999, 1, 1));
        assert_eq!(jan_first.day_of_year(), 1);
    }

    #[test]
    fn test_leap_day_orders_between_neighbours() {
        let feb_28 = Student::new("A", date(2001, 2, 28));
        let feb_29 = Student::new("B", date(2000, 2, 29));
        let mar_1 = Student::new("C", date(2003, 3, 1));
        assert!(feb_28.day_of_year() < feb_29.day_of_year());
        assert!(feb_29.day_of_year() < mar_1.day_of_year());
    }

    #[test]
    fn test_days_until_birthday() {
        let student = Student::new("A", date(2001, 10, 25));
        assert_eq!(student.days_until_birthday(date(2026, 10, 19)), 6);
        assert_eq!(student.days_until_birthday(date(2026, 10, 25)), 0);
        // Already passed this year, wraps to next year
        assert_eq!(student.days_until_birthday(date(2026, 10, 26)), 364);
    }

    #[test]
    fn test_days_until_wraps_year_end() {
        let student = Student::new("A", date(2002, 1, 3));
        assert_eq!(student.days_until_birthday(date(2026, 12, 30)), 4);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let student = Student::new("A", date(2000, 2, 29));
        assert_eq!(student.birthday_in(2026), date(2026, 3, 1));
        assert_eq!(student.birthday_in(2028), date(2028, 2, 29));
    }

    #[test]
    fn test_display_and_deserialize() {
        let student: Student =
            serde_json::from_str(r#"{ "name": "Grace Liu", "birthdate": "2001-07-04" }"#).unwrap();
        assert_eq!(student.to_string(), "Grace Liu");
        assert_eq!(student.birth_month(), 7);
        assert_eq!(student.birth_day(), 4);
    }
}
