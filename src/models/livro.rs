//! Livro (book) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Columns a partial update may touch, in SET-clause order.
pub const UPDATE_FIELDS: &[&str] = &["titulo", "isbn", "autor"];

/// Livro row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Livro {
    pub id: i32,
    pub titulo: String,
    pub isbn: String,
    pub autor: String,
}

/// Create livro request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLivro {
    pub titulo: String,
    pub isbn: String,
    pub autor: String,
}
