use tracing::{debug, info};

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    fn load_books(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.book_repository.load_all()?;
        debug!(store = %self.book_repository.location(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn position_of(books: &[BookEntity], id: u64) -> LibraryResult<usize> {
        books.iter().position(|b| b.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("Книга с таким ID: {} не найдена", id).as_str()))
    }
}

fn next_id(books: &[BookEntity]) -> LibraryResult<u64> {
    match books.iter().map(|b| b.id()).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| LibraryError::unavailable(
            format!("no book id left after {}", max).as_str(), Some("id_exhausted".to_string()))),
    }
}

fn validate_new_book(title: &str, author: &str, year: i32) -> LibraryResult<()> {
    let missing: Vec<&str> = [
        ("title", title.trim().is_empty()),
        ("author", author.trim().is_empty()),
        ("year", year == 0),
    ].iter().filter(|(_, missing)| *missing).map(|(name, _)| *name).collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LibraryError::invalid_input(
            "Неверные данные книги: Отсутствуют необходимые поля.", Some(missing.join(","))))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.load_books()?.iter().map(BookDto::from).collect())
    }

    fn find_book_by_id(&self, id: u64) -> LibraryResult<BookDto> {
        let books = self.load_books()?;
        let ndx = Self::position_of(&books, id)?;
        Ok(BookDto::from(&books[ndx]))
    }

    fn add_book(&self, title: &str, author: &str, year: i32) -> LibraryResult<u64> {
        validate_new_book(title, author, year)?;
        let mut books = self.load_books()?;
        let id = next_id(&books)?;
        books.push(BookEntity::new(id, title, author, year));
        self.book_repository.save_all(&books)?;
        info!(id, "added book");
        Ok(id)
    }

    fn toggle_book_status(&self, id: u64) -> LibraryResult<BookStatus> {
        let mut books = self.load_books()?;
        let ndx = Self::position_of(&books, id)?;
        let status = books[ndx].status.toggled();
        books[ndx].status = status;
        self.book_repository.save_all(&books)?;
        info!(id, status = %status, "changed book status");
        Ok(status)
    }

    fn remove_book(&self, id: u64) -> LibraryResult<()> {
        let mut books = self.load_books()?;
        let ndx = Self::position_of(&books, id)?;
        books.remove(ndx);
        self.book_repository.save_all(&books)?;
        info!(id, "removed book");
        Ok(())
    }
}
