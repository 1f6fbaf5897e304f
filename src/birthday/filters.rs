//! Ready-made predicates and comparators for selecting students

use crate::models::{SortOrder, Student};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Boxed predicate over students
pub type StudentFilter = Box<dyn Fn(&Student) -> bool>;

/// Boxed comparator over students
pub type StudentOrder = Box<dyn Fn(&Student, &Student) -> Ordering>;

/// Students born in `month` (1-based)
pub fn born_in_month(month: u32) -> impl Fn(&Student) -> bool {
    move |student| student.birth_month() == month
}

/// Students whose next birthday is at most `days` days after `today`
pub fn birthday_within(today: NaiveDate, days: u32) -> impl Fn(&Student) -> bool {
    move |student| student.days_until_birthday(today) <= i64::from(days)
}

/// Ascending day-of-year of the birthday
pub fn by_birthday(a: &Student, b: &Student) -> Ordering {
    a.day_of_year().cmp(&b.day_of_year())
}

/// Ascending name
pub fn by_name(a: &Student, b: &Student) -> Ordering {
    a.name.cmp(&b.name)
}

/// Soonest next birthday first
pub fn by_upcoming(today: NaiveDate) -> impl Fn(&Student, &Student) -> Ordering {
    move |a, b| a.days_until_birthday(today).cmp(&b.days_until_birthday(today))
}

/// Comparator for a configured sort order
pub fn comparator(order: SortOrder, today: NaiveDate) -> StudentOrder {
    match order {
        SortOrder::Birthday => Box::new(by_birthday),
        SortOrder::Name => Box::new(by_name),
        SortOrder::Upcoming => Box::new(by_upcoming(today)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, y: i32, m: u32, d: u32) -> Student {
        Student::new(name, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_born_in_month() {
        let filter = born_in_month(10);
        assert!(filter(&student("A", 2001, 10, 1)));
        assert!(!filter(&student("B", 2001, 11, 1)));
    }

    #[test]
    fn test_birthday_within_window() {
        let filter = birthday_within(today(), 14);
        assert!(filter(&student("today", 2001, 10, 19)));
        assert!(filter(&student("edge", 2001, 11, 2)));
        assert!(!filter(&student("past edge", 2001, 11, 3)));
        assert!(!filter(&student("yesterday", 2001, 10, 18)));
    }

    #[test]
    fn test_birthday_within_crosses_new_year() {
        let filter = birthday_within(NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(), 14);
        assert!(filter(&student("A", 2002, 1, 3)));
        assert!(!filter(&student("B", 2002, 1, 9)));
    }

    #[test]
    fn test_comparators() {
        let early = student("Zed", 2003, 10, 2);
        let late = student("Amy", 1999, 10, 25);
        assert_eq!(by_birthday(&early, &late), Ordering::Less);
        assert_eq!(by_name(&early, &late), Ordering::Greater);

        // From 19 October the 25th is 6 days away, the 2nd nearly a year
        let upcoming = by_upcoming(today());
        assert_eq!(upcoming(&late, &early), Ordering::Less);
    }

    #[test]
    fn test_comparator_from_order() {
        let a = student("Amy", 2001, 3, 1);
        let b = student("Bob", 2000, 2, 29);
        assert_eq!(comparator(SortOrder::Birthday, today())(&a, &b), Ordering::Greater);
        assert_eq!(comparator(SortOrder::Name, today())(&a, &b), Ordering::Less);
    }
}
