//! Read-shelf books that have a page count
//!
//! Built once from a shelf provider and never modified afterwards. Every
//! page statistic is computed over this sequence.

use tracing::{debug, warn};

use crate::error::StatsError;
use crate::models::{Book, ShelfProvider};

#[derive(Debug, Clone)]
struct CountedBook {
    pages: u32,
    book: Book,
}

/// Read-only sequence of read-shelf books with a known page count
///
/// Order follows the shelf provider.
#[derive(Debug, Clone, Default)]
pub struct BooksWithPageCount {
    entries: Vec<CountedBook>,
}

impl BooksWithPageCount {
    /// Fetches the read shelf once and keeps the books with a page count
    pub fn from_shelf<P: ShelfProvider + ?Sized>(provider: &P) -> Result<Self, StatsError> {
        let books = provider.read_shelf_books().map_err(|e| {
            warn!(error = %e, "failed to load read shelf");
            e
        })?;
        Ok(Self::from_books(books))
    }

    /// Keeps the books with a page count, preserving order
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut skipped = 0usize;
        let entries: Vec<CountedBook> = books
            .into_iter()
            .filter_map(|book| match book.page_count {
                Some(pages) => Some(CountedBook { pages, book }),
                None => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        debug!(
            retained = entries.len(),
            skipped, "built books-with-page-count sequence"
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Page count and book pairs, in shelf order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Book)> + '_ {
        self.entries.iter().map(|e| (e.pages, &e.book))
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.entries.iter().map(|e| &e.book)
    }
}
