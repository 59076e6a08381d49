use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            status: other.status,
        }
    }
}
