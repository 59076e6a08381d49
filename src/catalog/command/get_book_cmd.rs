use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub book_id: u64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: u64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'a> {
    fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id)
            .map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
