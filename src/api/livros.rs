//! Livro (book) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::livro::{CreateLivro, Livro},
    AppState,
};

use super::{AppJson, ListResponse, StatusMessage};

/// Response for a created book
#[derive(Serialize, ToSchema)]
pub struct LivroCriado {
    pub status: &'static str,
    /// Database-generated id
    pub livro_id: u64,
}

/// Insert a book
#[utoipa::path(
    post,
    path = "/livro",
    tag = "livros",
    request_body = CreateLivro,
    responses(
        (status = 200, description = "Book created", body = LivroCriado),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse),
        (status = 503, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_livro(
    State(state): State<AppState>,
    AppJson(livro): AppJson<CreateLivro>,
) -> AppResult<Json<LivroCriado>> {
    let livro_id = state.repository.livros.create(&livro).await?;

    Ok(Json(LivroCriado {
        status: "ok",
        livro_id,
    }))
}

/// List all books
#[utoipa::path(
    get,
    path = "/livro",
    tag = "livros",
    responses(
        (status = 200, description = "All books, or an ok-status message when the table is empty", body = Vec<Livro>)
    )
)]
pub async fn list_livros(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Livro>>> {
    let livros = state.repository.livros.list().await?;

    Ok(Json(ListResponse::from_rows(
        livros,
        "Nenhum livro encontrado",
    )))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/livro/{id}",
    tag = "livros",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "The book", body = Livro),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_livro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Livro>> {
    let livro = state.repository.livros.get_by_id(id).await?;
    Ok(Json(livro))
}

/// Partially update a book; only `titulo`, `isbn` and `autor` are accepted
#[utoipa::path(
    put,
    path = "/livro/{id}",
    tag = "livros",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book updated", body = StatusMessage),
        (status = 400, description = "No recognized field, or nothing changed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_livro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.livros.update(id, &payload).await?;

    Ok(Json(StatusMessage::ok(format!(
        "Livro de id {} atualizado com sucesso.",
        id
    ))))
}

/// Delete a book by id
#[utoipa::path(
    delete,
    path = "/livro/{id}",
    tag = "livros",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Delete acknowledged, whether or not the row existed", body = StatusMessage)
    )
)]
pub async fn delete_livro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.livros.delete(id).await?;

    Ok(Json(StatusMessage::ok("Livro deletado com sucesso")))
}
