//! Emprestimo (loan) model and related types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Columns a partial update may touch, in SET-clause order.
pub const UPDATE_FIELDS: &[&str] = &["usuario_id", "livro_id", "data_emprestimo"];

/// Emprestimo row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Emprestimo {
    pub id: i32,
    pub usuario_id: i32,
    pub livro_id: i32,
    pub data_emprestimo: NaiveDateTime,
}

/// Emprestimo joined with the member name and book title for listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmprestimoDetalhes {
    pub id: i32,
    /// Member name (`usuarios.nome`)
    pub usuario: String,
    /// Book title (`livros.titulo`)
    pub livro: String,
    pub data_emprestimo: NaiveDateTime,
}

/// Create emprestimo request
///
/// `data_emprestimo` is assigned by the database at insert time. The
/// referenced ids are not checked against `usuarios`/`livros`; a loan can
/// be created for ids that do not exist.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmprestimo {
    pub usuario_id: i32,
    pub livro_id: i32,
}
