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
    extractor::path::ApiPath,
    state::ApiState,
};

use super::{
    error::{BookError, BookErrorType},
    parse_book_id,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetBookResponse {
    pub message: String,
    pub data: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Returns the book with the given id.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = GetBookResponse),
        (status = 400, description = "Missing or malformed id, or the book could not be read"),
        (status = 404, description = "No book has this id"),
    )
)]
pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<String>,
) -> Result<GetBookResponse, BookError> {
    let verbosity = state.error_verbosity();

    let id = parse_book_id(&id).map_err(|error_type| ResourceError::new(verbosity, error_type))?;

    let book = state.books().find(id).await.map_err(|err| {
        tracing::error!(id, %err, "Failed to fetch book");

        ResourceError::new(
            verbosity,
            BookErrorType::FetchFailed {
                id,
                reason: err.to_string(),
            },
        )
    })?;

    let Some(book) = book else {
        tracing::debug!(id, "Book not found");

        return Err(ResourceError::new(verbosity, BookErrorType::NotFound { id }));
    };

    Ok(GetBookResponse {
        message: "book id fetched successfully".to_string(),
        data: book,
    })
}
