use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is one catalog entry as it is persisted. Field order here is the
// field order written to the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl BookEntity {
    pub fn new(id: u64, title: &str, author: &str, year: i32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: BookStatus::InStock,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new(7, "Dune", "Herbert", 1965);
        assert_eq!(7, book.id);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(BookStatus::InStock, book.status);
    }

    #[test]
    fn test_should_serialize_fields_in_order() {
        let book = BookEntity::new(1, "Dune", "Herbert", 1965);
        let json = serde_json::to_string(&book).expect("should serialize book");
        assert_eq!(r#"{"id":1,"title":"Dune","author":"Herbert","year":1965,"status":"в наличии"}"#, json);
    }

    #[test]
    fn test_should_deserialize_by_field_name() {
        let json = r#"{"status":"выдана","year":1949,"author":"Orwell","title":"1984","id":3}"#;
        let book: BookEntity = serde_json::from_str(json).expect("should parse book");
        assert_eq!(3, book.id);
        assert_eq!("1984", book.title);
        assert_eq!("Orwell", book.author);
        assert_eq!(1949, book.year);
        assert_eq!(BookStatus::CheckedOut, book.status);
    }
}
