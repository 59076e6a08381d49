use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub book_id: u64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: u64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Default)]
pub struct RemoveBookCommandResponse {}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id)
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::default())
    }
}
