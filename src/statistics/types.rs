//! Statistics type definitions
//!
//! Contains the serializable page statistics report.

use serde::{Deserialize, Serialize};

use crate::models::Book;

/// Page statistics for the read shelf
///
/// Snapshot of every page-count query, all "this year" values resolved
/// against `reference_year`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageStatisticsReport {
    /// Calendar year used for the "this year" values
    pub reference_year: i32,

    /// Number of read books with a page count
    pub books_with_page_count: u32,

    // === All Time ===

    pub book_with_most_pages: Option<Book>,

    pub book_with_least_pages: Option<Book>,

    /// Ceiling of the mean page count
    pub average_page_length: Option<u32>,

    // === This Year ===

    /// Both reading dates fall within the reference year
    pub book_read_this_year_with_most_pages: Option<Book>,

    /// Start date falls within the reference year
    pub book_with_least_pages_this_year: Option<Book>,

    /// Start date falls within the reference year
    pub average_page_length_this_year: Option<u32>,
}
