use std::cell::RefCell;

use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository holds the collection in process memory. It satisfies
// the same load/replace contract as the file store, minus durability.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RefCell<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: RefCell::new(books),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.borrow().clone())
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        *self.books.borrow_mut() = entities.to_vec();
        debug!(count = entities.len(), "saved books in memory");
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}
