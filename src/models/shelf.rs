//! Shelf access
//!
//! `ShelfProvider` is the narrow read interface statistics consume.
//! `InMemoryShelfService` keeps books across every predefined shelf.

use thiserror::Error;

use super::book::{Book, PredefinedShelf};

/// Shelf operation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    /// No book with the given ID
    #[error("book not found: {0}")]
    BookNotFound(String),

    /// The backing store could not be read
    #[error("shelf unavailable: {0}")]
    Unavailable(String),
}

/// Source of the books currently on the read shelf
pub trait ShelfProvider {
    /// Returns every book on the read shelf, in shelf order
    fn read_shelf_books(&self) -> Result<Vec<Book>, ShelfError>;
}

impl<T: ShelfProvider + ?Sized> ShelfProvider for &T {
    fn read_shelf_books(&self) -> Result<Vec<Book>, ShelfError> {
        (**self).read_shelf_books()
    }
}

/// In-memory shelf service
///
/// Books keep their insertion order. Moving a book between shelves does not
/// change its position.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShelfService {
    books: Vec<Book>,
}

impl InMemoryShelfService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Moves the book with `id` onto `shelf`
    pub fn move_to_shelf(&mut self, id: &str, shelf: PredefinedShelf) -> Result<(), ShelfError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ShelfError::BookNotFound(id.to_string()))?;
        book.shelf = shelf;
        Ok(())
    }

    /// Books on the given shelf, in insertion order
    pub fn books_on_shelf(&self, shelf: PredefinedShelf) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(move |b| b.shelf == shelf)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl ShelfProvider for InMemoryShelfService {
    fn read_shelf_books(&self) -> Result<Vec<Book>, ShelfError> {
        Ok(self.books_on_shelf(PredefinedShelf::Read).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, shelf: PredefinedShelf) -> Book {
        Book::new(id).with_id(id).with_shelf(shelf)
    }

    #[test]
    fn test_read_shelf_only_returns_read_books_in_order() {
        let service = InMemoryShelfService::with_books([
            book("a", PredefinedShelf::Read),
            book("b", PredefinedShelf::Reading),
            book("c", PredefinedShelf::Read),
            book("d", PredefinedShelf::DidNotFinish),
        ]);

        let ids: Vec<String> = service
            .read_shelf_books()
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_move_to_shelf_keeps_position() {
        let mut service = InMemoryShelfService::new();
        service.add_book(book("a", PredefinedShelf::Reading));
        service.add_book(book("b", PredefinedShelf::Read));

        service.move_to_shelf("a", PredefinedShelf::Read).unwrap();

        let ids: Vec<&str> = service
            .books_on_shelf(PredefinedShelf::Read)
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_move_missing_book_fails() {
        let mut service = InMemoryShelfService::new();
        let err = service
            .move_to_shelf("missing", PredefinedShelf::Read)
            .unwrap_err();
        assert_eq!(err, ShelfError::BookNotFound("missing".to_string()));
        assert_eq!(err.to_string(), "book not found: missing");
    }

    #[test]
    fn test_provider_through_reference() {
        let service = InMemoryShelfService::with_books([book("a", PredefinedShelf::Read)]);
        let provider: &dyn ShelfProvider = &service;
        assert_eq!((&provider).read_shelf_books().unwrap().len(), 1);
        assert!(InMemoryShelfService::new().is_empty());
    }
}
