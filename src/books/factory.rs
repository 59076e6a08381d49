use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::LocalFile => {
            Box::new(FileBookRepository::new(&config.data_path))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
