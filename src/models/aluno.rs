//! Aluno (student) model and related types
//!
//! The aluno resource predates the others and kept its full-replace PUT:
//! there is no partial update, every mutable column must be supplied.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Aluno row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Aluno {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub curso: String,
}

/// Create aluno request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAluno {
    pub nome: String,
    pub cpf: String,
    pub curso: String,
}

/// Full-replace update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAluno {
    pub nome: String,
    pub cpf: String,
    pub curso: String,
}
