use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    book::{Book, NewBook},
    route::books::{
        create_book::{self, CreateBookResponse},
        delete_book::{self, DeleteBookResponse},
        get_book::{self, GetBookResponse},
        list_books::{self, ListBooksResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        create_book::create_book,
        list_books::list_books,
        get_book::get_book,
        delete_book::delete_book,
    ),
    components(schemas(
        Book,
        NewBook,
        CreateBookResponse,
        ListBooksResponse,
        GetBookResponse,
        DeleteBookResponse,
    )),
    tags((name = "books", description = "Books resource"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI document at `/api-docs/openapi.json` and Swagger UI at `/swagger-ui`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
