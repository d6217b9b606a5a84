//! Reading statistics
//!
//! Page-count statistics for the books on the read shelf.
//!
//! ## Architecture
//!
//! - **Books With Page Count**: read-shelf books with a known page count,
//!   fetched once from a `ShelfProvider` and kept read-only
//! - **Page Statistics**: extremes and ceiling averages, each computed from
//!   a fresh view of the retained books
//! - **Calendar**: "this year" is resolved through a `Clock`

mod books_with_page_count;
mod types;

pub use books_with_page_count::BooksWithPageCount;
pub use types::*;

/// Current-year source and year predicates
pub mod calendar;

/// Page statistics engine
pub mod page_statistics;

pub use page_statistics::PageStatistics;
