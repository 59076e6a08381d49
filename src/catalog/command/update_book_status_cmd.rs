use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

pub struct UpdateBookStatusCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> UpdateBookStatusCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookStatusCommandRequest {
    pub book_id: u64,
}

impl UpdateBookStatusCommandRequest {
    pub fn new(book_id: u64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookStatusCommandResponse {
    pub status: BookStatus,
}

impl UpdateBookStatusCommandResponse {
    pub fn new(status: BookStatus) -> Self {
        Self {
            status,
        }
    }
}

impl<'a> Command<UpdateBookStatusCommandRequest, UpdateBookStatusCommandResponse> for UpdateBookStatusCommand<'a> {
    fn execute(&self, req: UpdateBookStatusCommandRequest) -> Result<UpdateBookStatusCommandResponse, CommandError> {
        self.catalog_service.toggle_book_status(req.book_id)
            .map_err(CommandError::from).map(UpdateBookStatusCommandResponse::new)
    }
}
