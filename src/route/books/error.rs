use axum::http::StatusCode;
use serde::Serialize;

use crate::error::{ResourceError, ResourceErrorProvider};

pub type BookError = ResourceError<BookErrorType>;

#[derive(Debug, Serialize)]
#[serde(tag = "error_type")]
pub enum BookErrorType {
    CreateFailed {
        #[serde(skip)]
        reason: String,
    },
    ListFailed {
        #[serde(skip)]
        reason: String,
    },
    MissingId,
    InvalidId {
        #[serde(skip)]
        id: String,
    },
    NotFound {
        #[serde(skip)]
        id: i64,
    },
    FetchFailed {
        #[serde(skip)]
        id: i64,
        #[serde(skip)]
        reason: String,
    },
    DeleteFailed {
        #[serde(skip)]
        id: i64,
        #[serde(skip)]
        reason: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BookErrorContext {
    pub reason: String,
}

impl ResourceErrorProvider for BookErrorType {
    type Context = BookErrorContext;

    fn status_code(&self) -> StatusCode {
        match self {
            BookErrorType::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            BookErrorType::CreateFailed { .. } => "Error creating item",
            BookErrorType::ListFailed { .. } => "Error finding items",
            BookErrorType::MissingId => "No id is provided",
            BookErrorType::InvalidId { .. } => "Id must be an integer",
            BookErrorType::NotFound { .. } => "Book not found",
            BookErrorType::FetchFailed { .. } => "could not get the book",
            BookErrorType::DeleteFailed { .. } => "Unable to delete item",
        }
    }

    fn context(&self) -> Self::Context {
        let reason = match self {
            BookErrorType::CreateFailed { reason } => format!("Insert failed: {reason}"),
            BookErrorType::ListFailed { reason } => format!("Select failed: {reason}"),
            BookErrorType::MissingId => "The request path carries no book id".to_string(),
            BookErrorType::InvalidId { id } => format!("Id {id:?} is not an integer"),
            BookErrorType::NotFound { id } => format!("Book with id {id} not found"),
            BookErrorType::FetchFailed { id, reason } => {
                format!("Select of book {id} failed: {reason}")
            }
            BookErrorType::DeleteFailed { id, reason } => {
                format!("Delete of book {id} failed: {reason}")
            }
        };

        BookErrorContext { reason }
    }
}
