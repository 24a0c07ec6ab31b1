use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    book::Book,
    error::{ErrorVerbosityProvider, ResourceError},
    state::ApiState,
};

use super::error::{BookError, BookErrorType};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListBooksResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Data")]
    pub data: Vec<Book>,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Returns every stored book.
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = ListBooksResponse),
        (status = 400, description = "The books could not be read"),
    )
)]
pub async fn list_books(State(state): State<ApiState>) -> Result<ListBooksResponse, BookError> {
    let books = state.books().list().await.map_err(|err| {
        tracing::error!(%err, "Failed to list books");

        ResourceError::new(
            state.error_verbosity(),
            BookErrorType::ListFailed {
                reason: err.to_string(),
            },
        )
    })?;

    tracing::debug!(count = books.len(), "Books fetched");

    Ok(ListBooksResponse {
        message: "Items fetched".to_string(),
        data: books,
    })
}
