pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod error;
pub mod get_book;
pub mod list_books;

use self::error::BookErrorType;

/// Parses the `id` path segment of the book routes.
pub fn parse_book_id(raw: &str) -> Result<i64, BookErrorType> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(BookErrorType::MissingId);
    }

    raw.parse().map_err(|_| BookErrorType::InvalidId {
        id: raw.to_owned(),
    })
}
