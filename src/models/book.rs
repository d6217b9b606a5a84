//! Book data model
//!
//! Defines the Book record and the predefined shelves a book can sit on.
//! Statistics only ever read these values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Predefined shelf a book belongs to, based on its reading status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedShelf {
    /// Books the user wants to read
    #[default]
    ToRead,
    /// Books currently being read
    Reading,
    /// Books fully read
    Read,
    /// Books abandoned before the end
    DidNotFinish,
}

impl PredefinedShelf {
    /// Convert from string representation
    ///
    /// Unknown values fall back to `ToRead`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "reading" => PredefinedShelf::Reading,
            "read" => PredefinedShelf::Read,
            "did_not_finish" | "did-not-finish" => PredefinedShelf::DidNotFinish,
            _ => PredefinedShelf::ToRead,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PredefinedShelf::ToRead => "to_read",
            PredefinedShelf::Reading => "reading",
            PredefinedShelf::Read => "read",
            PredefinedShelf::DidNotFinish => "did_not_finish",
        }
    }
}

/// A book tracked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Book {
    /// Book unique ID (UUID)
    pub id: String,
    /// Book title
    pub title: String,
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Shelf the book currently sits on
    #[serde(default)]
    pub shelf: PredefinedShelf,
    /// Number of pages, if the user entered one
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Date the user started reading
    #[serde(default)]
    pub date_started_reading: Option<NaiveDate>,
    /// Date the user finished reading
    #[serde(default)]
    pub date_finished_reading: Option<NaiveDate>,
}

impl Book {
    /// Creates a book on the to-read shelf with a fresh ID and no optional data
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            author: None,
            shelf: PredefinedShelf::default(),
            page_count: None,
            date_started_reading: None,
            date_finished_reading: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_shelf(mut self, shelf: PredefinedShelf) -> Self {
        self.shelf = shelf;
        self
    }

    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    /// Sets both reading dates at once
    pub fn with_reading_dates(
        mut self,
        started: Option<NaiveDate>,
        finished: Option<NaiveDate>,
    ) -> Self {
        self.date_started_reading = started;
        self.date_finished_reading = finished;
        self
    }

    /// Whether the book is on the read shelf
    pub fn is_read(&self) -> bool {
        self.shelf == PredefinedShelf::Read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_defaults() {
        let book = Book::new("Dune");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.shelf, PredefinedShelf::ToRead);
        assert!(book.page_count.is_none());
        assert!(book.date_started_reading.is_none());
        assert!(book.date_finished_reading.is_none());
        assert!(uuid::Uuid::parse_str(&book.id).is_ok());
    }

    #[test]
    fn test_new_books_get_distinct_ids() {
        assert_ne!(Book::new("a").id, Book::new("a").id);
    }

    #[test]
    fn test_shelf_string_conversion() {
        for shelf in [
            PredefinedShelf::ToRead,
            PredefinedShelf::Reading,
            PredefinedShelf::Read,
            PredefinedShelf::DidNotFinish,
        ] {
            assert_eq!(PredefinedShelf::from_str(shelf.as_str()), shelf);
        }
        assert_eq!(PredefinedShelf::from_str("READ"), PredefinedShelf::Read);
        assert_eq!(PredefinedShelf::from_str("unknown"), PredefinedShelf::ToRead);
    }

    #[test]
    fn test_book_deserializes_with_missing_optionals() {
        let json = r#"{"id":"b-1","title":"Emma","shelf":"read"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.is_read());
        assert!(book.author.is_none());
        assert!(book.page_count.is_none());
    }

    #[test]
    fn test_book_serializes_dates_as_iso() {
        let started = NaiveDate::from_ymd_opt(2024, 3, 1);
        let book = Book::new("Emma")
            .with_id("b-1")
            .with_page_count(474)
            .with_reading_dates(started, None);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains(r#""date_started_reading":"2024-03-01""#));
        assert!(json.contains(r#""page_count":474"#));
        assert!(!json.contains("author"));
    }
}
