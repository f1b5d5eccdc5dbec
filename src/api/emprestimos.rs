//! Emprestimo (loan) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::emprestimo::{CreateEmprestimo, Emprestimo, EmprestimoDetalhes},
    AppState,
};

use super::{AppJson, ListResponse, StatusMessage};

/// Response for a created loan
#[derive(Serialize, ToSchema)]
pub struct EmprestimoCriado {
    pub status: &'static str,
    /// Database-generated id
    pub emprestimo_id: u64,
}

/// Create a loan; the loan timestamp is assigned by the server
#[utoipa::path(
    post,
    path = "/emprestimo",
    tag = "emprestimos",
    request_body = CreateEmprestimo,
    responses(
        (status = 200, description = "Loan created", body = EmprestimoCriado),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse),
        (status = 503, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_emprestimo(
    State(state): State<AppState>,
    AppJson(emprestimo): AppJson<CreateEmprestimo>,
) -> AppResult<Json<EmprestimoCriado>> {
    let emprestimo_id = state.repository.emprestimos.create(&emprestimo).await?;

    Ok(Json(EmprestimoCriado {
        status: "ok",
        emprestimo_id,
    }))
}

/// List all loans with member name and book title resolved.
///
/// Loans whose member or book no longer exists are not listed (inner
/// join on both foreign keys).
#[utoipa::path(
    get,
    path = "/emprestimo",
    tag = "emprestimos",
    responses(
        (status = 200, description = "All loans, or an ok-status message when the table is empty", body = Vec<EmprestimoDetalhes>)
    )
)]
pub async fn list_emprestimos(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<EmprestimoDetalhes>>> {
    let emprestimos = state.repository.emprestimos.list_detalhes().await?;

    Ok(Json(ListResponse::from_rows(
        emprestimos,
        "Nenhum empréstimo encontrado",
    )))
}

/// Get a loan by id (raw row, no join)
#[utoipa::path(
    get,
    path = "/emprestimo/{id}",
    tag = "emprestimos",
    params(("id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "The loan", body = Emprestimo),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Emprestimo>> {
    let emprestimo = state.repository.emprestimos.get_by_id(id).await?;
    Ok(Json(emprestimo))
}

/// Partially update a loan; only `usuario_id`, `livro_id` and
/// `data_emprestimo` are accepted
#[utoipa::path(
    put,
    path = "/emprestimo/{id}",
    tag = "emprestimos",
    params(("id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan updated", body = StatusMessage),
        (status = 400, description = "No recognized field, or nothing changed", body = crate::error::ErrorResponse),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.emprestimos.update(id, &payload).await?;

    Ok(Json(StatusMessage::ok(format!(
        "Empréstimo de id {} atualizado com sucesso.",
        id
    ))))
}

/// Delete a loan by id
#[utoipa::path(
    delete,
    path = "/emprestimo/{id}",
    tag = "emprestimos",
    params(("id" = i32, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Delete acknowledged, whether or not the row existed", body = StatusMessage)
    )
)]
pub async fn delete_emprestimo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.emprestimos.delete(id).await?;

    Ok(Json(StatusMessage::ok("Empréstimo deletado com sucesso")))
}
