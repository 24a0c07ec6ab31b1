use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    book::NewBook,
    error::{ErrorVerbosityProvider, ResourceError},
    extractor::json::ApiJson,
    state::ApiState,
};

use super::error::{BookError, BookErrorType};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// Stores a new book. The assigned id is not returned.
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = CreateBookResponse),
        (status = 400, description = "The book could not be stored"),
        (status = 422, description = "The request body is not a book"),
    )
)]
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<NewBook>,
) -> Result<CreateBookResponse, BookError> {
    let created = state.books().create(&book).await.map_err(|err| {
        tracing::error!(%err, "Failed to create book");

        ResourceError::new(
            state.error_verbosity(),
            BookErrorType::CreateFailed {
                reason: err.to_string(),
            },
        )
    })?;

    tracing::debug!(id = created.id, "Book created");

    Ok(CreateBookResponse {
        message: "Item created".to_string(),
    })
}
