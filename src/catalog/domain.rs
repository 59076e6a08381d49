pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{BookStatus, LibraryResult};

// CatalogService is the business logic over the book storage port. Every
// mutation reads the whole collection, changes it in memory and writes the
// whole collection back.
pub trait CatalogService {
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn find_book_by_id(&self, id: u64) -> LibraryResult<BookDto>;
    fn add_book(&self, title: &str, author: &str, year: i32) -> LibraryResult<u64>;
    fn toggle_book_status(&self, id: u64) -> LibraryResult<BookStatus>;
    fn remove_book(&self, id: u64) -> LibraryResult<()>;
}
