use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{ErrorVerbosityProvider, ResourceError},
    extractor::path::ApiPath,
    state::ApiState,
};

use super::{
    error::{BookError, BookErrorType},
    parse_book_id,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteBookResponse {
    pub message: String,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Deletes the book with the given id.
///
/// Deleting an id that does not exist still succeeds.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = DeleteBookResponse),
        (status = 400, description = "Missing or malformed id, or the book could not be deleted"),
    )
)]
pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<DeleteBookResponse, BookError> {
    let verbosity = state.error_verbosity();

    let id = parse_book_id(&id).map_err(|error_type| ResourceError::new(verbosity, error_type))?;

    let deleted = state.books().delete(id).await.map_err(|err| {
        tracing::error!(id, %err, "Failed to delete book");

        ResourceError::new(
            verbosity,
            BookErrorType::DeleteFailed {
                id,
                reason: err.to_string(),
            },
        )
    })?;

    tracing::debug!(id, deleted, "Book deleted");

    Ok(DeleteBookResponse {
        message: "Item successfully deleted".to_string(),
    })
}

/// `DELETE /api/books` carries no id.
pub async fn delete_book_without_id(State(state): State<ApiState>) -> BookError {
    ResourceError::new(state.error_verbosity(), BookErrorType::MissingId)
}
