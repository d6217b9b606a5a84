// Shelf Stats Library
// Page-count statistics for the books on a reading tracker's read shelf

pub mod config;
pub mod error;
pub mod models;
pub mod statistics;

pub use config::StatisticsConfig;
pub use error::{ErrorResponse, StatsError};
pub use models::{Book, InMemoryShelfService, PredefinedShelf, ShelfError, ShelfProvider};
pub use statistics::{BooksWithPageCount, PageStatistics, PageStatisticsReport};
