//! Page statistics engine
//!
//! Extremes and averages over the read-shelf books that have a page count.
//! Every query filters a fresh view of the retained books; the retained
//! sequence itself is never narrowed, so repeated calls agree.

use std::fmt;

use tracing::debug;

use crate::config::StatisticsConfig;
use crate::error::StatsError;
use crate::models::{Book, ShelfProvider};

use super::calendar::{read_in_year, started_in_year, Clock, SystemClock};
use super::{BooksWithPageCount, PageStatisticsReport};

/// Page statistics over the read shelf
pub struct PageStatistics {
    books: BooksWithPageCount,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for PageStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageStatistics")
            .field("books", &self.books)
            .field("today", &self.clock.today())
            .finish()
    }
}

impl PageStatistics {
    /// Creates the engine over an already built retained sequence
    pub fn new(books: BooksWithPageCount) -> Self {
        Self::with_clock(books, SystemClock)
    }

    /// Reads the shelf once and builds the engine
    pub fn from_shelf<P: ShelfProvider + ?Sized>(provider: &P) -> Result<Self, StatsError> {
        Ok(Self::new(BooksWithPageCount::from_shelf(provider)?))
    }

    /// Resolves "this year" against the given clock instead of the local date
    pub fn with_clock(books: BooksWithPageCount, clock: impl Clock + 'static) -> Self {
        Self {
            books,
            clock: Box::new(clock),
        }
    }

    pub fn with_config(books: BooksWithPageCount, config: &StatisticsConfig) -> Self {
        Self {
            books,
            clock: config.clock(),
        }
    }

    /// The retained read-shelf books with a page count
    pub fn books(&self) -> &BooksWithPageCount {
        &self.books
    }

    /// Calendar year the "this year" queries currently use
    pub fn reference_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// The read book with the most pages
    ///
    /// Among equal page counts the book later on the shelf wins.
    pub fn book_with_most_pages(&self) -> Option<&Book> {
        most_pages(self.books.iter())
    }

    /// The book with the most pages whose start and finish dates are both
    /// in the current year
    pub fn book_read_this_year_with_most_pages(&self) -> Option<&Book> {
        self.book_read_in_year_with_most_pages(self.reference_year())
    }

    /// The read book with the fewest pages
    ///
    /// Among equal page counts the book earlier on the shelf wins.
    pub fn book_with_least_pages(&self) -> Option<&Book> {
        least_pages(self.books.iter())
    }

    /// The book with the fewest pages started in the current year
    pub fn book_with_least_pages_this_year(&self) -> Option<&Book> {
        self.book_started_in_year_with_least_pages(self.reference_year())
    }

    /// Mean page count over all retained books, rounded up
    ///
    /// `None` when no read book has a page count.
    pub fn average_page_length(&self) -> Option<u32> {
        ceiling_average(self.books.iter().map(|(pages, _)| pages))
    }

    /// Mean page count over books started in the current year, rounded up
    pub fn average_page_length_this_year(&self) -> Option<u32> {
        self.average_page_length_started_in(self.reference_year())
    }

    /// All page statistics at once, with "this year" resolved a single time
    pub fn report(&self) -> PageStatisticsReport {
        let year = self.reference_year();
        let report = PageStatisticsReport {
            reference_year: year,
            books_with_page_count: self.books.len() as u32,
            book_with_most_pages: self.book_with_most_pages().cloned(),
            book_with_least_pages: self.book_with_least_pages().cloned(),
            average_page_length: self.average_page_length(),
            book_read_this_year_with_most_pages: self
                .book_read_in_year_with_most_pages(year)
                .cloned(),
            book_with_least_pages_this_year: self
                .book_started_in_year_with_least_pages(year)
                .cloned(),
            average_page_length_this_year: self.average_page_length_started_in(year),
        };
        debug!(
            year,
            books = report.books_with_page_count,
            average = ?report.average_page_length,
            "computed page statistics report"
        );
        report
    }

    fn book_read_in_year_with_most_pages(&self, year: i32) -> Option<&Book> {
        most_pages(self.books.iter().filter(|(_, book)| read_in_year(book, year)))
    }

    fn book_started_in_year_with_least_pages(&self, year: i32) -> Option<&Book> {
        least_pages(self.books.iter().filter(|(_, book)| started_in_year(book, year)))
    }

    fn average_page_length_started_in(&self, year: i32) -> Option<u32> {
        ceiling_average(
            self.books
                .iter()
                .filter(|(_, book)| started_in_year(book, year))
                .map(|(pages, _)| pages),
        )
    }
}

// `max_by_key` keeps the last of equal maxima and `min_by_key` the first of
// equal minima, the same picks as the endpoints of a stable ascending sort.

fn most_pages<'a>(books: impl Iterator<Item = (u32, &'a Book)>) -> Option<&'a Book> {
    books.max_by_key(|(pages, _)| *pages).map(|(_, book)| book)
}

fn least_pages<'a>(books: impl Iterator<Item = (u32, &'a Book)>) -> Option<&'a Book> {
    books.min_by_key(|(pages, _)| *pages).map(|(_, book)| book)
}

/// Ceiling of the arithmetic mean, in exact integer arithmetic
pub(crate) fn ceiling_average(pages: impl Iterator<Item = u32>) -> Option<u32> {
    let (total, count) = pages.fold((0u64, 0u64), |(total, count), p| {
        (total + u64::from(p), count + 1)
    });
    if count == 0 {
        return None;
    }
    // The mean never exceeds the largest u32 summed.
    Some(total.div_ceil(count) as u32)
}
