use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored book. The identifier is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

/// Request body of the create operation.
///
/// Absent fields default to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(default)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}
