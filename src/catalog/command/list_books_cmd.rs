use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
