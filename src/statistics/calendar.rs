//! Calendar helpers for "this year" statistics
//!
//! The current year is read through a `Clock` so statistics can be pinned
//! to a fixed date.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::Book;

/// Source of today's date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Calendar year of `today()`
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date_is_in_year(date: NaiveDate, year: i32) -> bool {
    date.year() == year
}

/// Both reading dates are present and fall within `year`
pub fn read_in_year(book: &Book, year: i32) -> bool {
    matches!(
        (book.date_started_reading, book.date_finished_reading),
        (Some(started), Some(finished))
            if date_is_in_year(started, year) && date_is_in_year(finished, year)
    )
}

/// The start date is present and falls within `year`
pub fn started_in_year(book: &Book, year: i32) -> bool {
    book.date_started_reading
        .is_some_and(|started| date_is_in_year(started, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(started: Option<NaiveDate>, finished: Option<NaiveDate>) -> Book {
        Book::new("t").with_reading_dates(started, finished)
    }

    #[test]
    fn test_fixed_clock_year() {
        let clock = FixedClock(date(2023, 12, 31));
        assert_eq!(clock.today(), date(2023, 12, 31));
        assert_eq!(clock.current_year(), 2023);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }

    #[test]
    fn test_year_boundaries() {
        assert!(date_is_in_year(date(2024, 1, 1), 2024));
        assert!(date_is_in_year(date(2024, 12, 31), 2024));
        assert!(!date_is_in_year(date(2023, 12, 31), 2024));
    }

    #[test]
    fn test_read_in_year_requires_both_dates() {
        let jan = Some(date(2024, 1, 10));
        let feb = Some(date(2024, 2, 10));
        let old = Some(date(2023, 11, 2));

        assert!(read_in_year(&book(jan, feb), 2024));
        assert!(!read_in_year(&book(jan, None), 2024));
        assert!(!read_in_year(&book(None, feb), 2024));
        assert!(!read_in_year(&book(old, feb), 2024));
        assert!(!read_in_year(&book(None, None), 2024));
    }

    #[test]
    fn test_started_in_year_ignores_finish() {
        let jan = Some(date(2024, 1, 10));
        let old = Some(date(2023, 11, 2));

        assert!(started_in_year(&book(jan, None), 2024));
        assert!(started_in_year(&book(jan, old), 2024));
        assert!(!started_in_year(&book(old, jan), 2024));
        assert!(!started_in_year(&book(None, jan), 2024));
    }
}
