//! Usuario (library member) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Columns a partial update may touch, in SET-clause order.
pub const UPDATE_FIELDS: &[&str] = &["nome", "email", "cpf"];

/// Usuario row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub cpf: String,
}

/// Create usuario request
///
/// `email` and `cpf` uniqueness is enforced by the database schema, not
/// checked here; a duplicate surfaces as a query error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUsuario {
    pub nome: String,
    pub email: String,
    pub cpf: String,
}
