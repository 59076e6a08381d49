use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book_id: u64,
}

impl AddBookCommandResponse {
    pub fn new(book_id: u64) -> Self {
        Self {
            book_id,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title.as_str(), req.author.as_str(), req.year)
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
