//! Book tracker data models
//!
//! This module defines the book record and the shelf interface
//! that statistics read from.

pub mod book;
pub mod shelf;

pub use book::*;
pub use shelf::*;
