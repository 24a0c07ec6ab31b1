use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

use crate::state::ApiState;

fn collection() -> MethodRouter<ApiState> {
    post(super::create_book::create_book)
        .get(super::list_books::list_books)
        .delete(super::delete_book::delete_book_without_id)
}

/// Book routes, mounted under `/api/books`. The collection also answers with a trailing slash.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/api/books", collection())
        .route("/api/books/", collection())
        .route(
            "/api/books/:id",
            get(super::get_book::get_book).delete(super::delete_book::delete_book),
        )
}
