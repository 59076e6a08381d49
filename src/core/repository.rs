use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository is the storage port: it only knows how to read the whole
// collection and how to replace it. There are no per-record operations.
pub trait Repository<Entity> {
    // returns every persisted entity in stored order
    fn load_all(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the persisted collection with exactly the given entities
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    LocalFile,
    InMemory,
}

impl RepositoryStore {
    pub fn parse(name: &str) -> Option<RepositoryStore> {
        match name {
            "file" => Some(RepositoryStore::LocalFile),
            "memory" => Some(RepositoryStore::InMemory),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_parse_store() {
        assert_eq!(Some(RepositoryStore::LocalFile), RepositoryStore::parse("file"));
        assert_eq!(Some(RepositoryStore::InMemory), RepositoryStore::parse("memory"));
        assert_eq!(None, RepositoryStore::parse("dynamodb"));
    }
}
