pub mod file_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // human-readable description of where the books live, used in logs
    fn location(&self) -> String;
}
