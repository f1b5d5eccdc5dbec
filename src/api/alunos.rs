//! Aluno (student) endpoints
//!
//! Legacy resource kept alongside the library trio; its PUT is a full
//! replace, not a partial merge.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::aluno::{Aluno, CreateAluno, UpdateAluno},
    AppState,
};

use super::{AppJson, ListResponse, StatusMessage};

/// Response for a created student
#[derive(Serialize, ToSchema)]
pub struct AlunoCriado {
    pub status: &'static str,
    /// Database-generated id
    pub aluno_id: u64,
}

/// Insert a student
#[utoipa::path(
    post,
    path = "/aluno",
    tag = "alunos",
    request_body = CreateAluno,
    responses(
        (status = 200, description = "Student created", body = AlunoCriado),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_aluno(
    State(state): State<AppState>,
    AppJson(aluno): AppJson<CreateAluno>,
) -> AppResult<Json<AlunoCriado>> {
    let aluno_id = state.repository.alunos.create(&aluno).await?;

    Ok(Json(AlunoCriado {
        status: "ok",
        aluno_id,
    }))
}

/// List all students
#[utoipa::path(
    get,
    path = "/aluno",
    tag = "alunos",
    responses(
        (status = 200, description = "All students, or an ok-status message when the table is empty", body = Vec<Aluno>)
    )
)]
pub async fn list_alunos(State(state): State<AppState>) -> AppResult<Json<ListResponse<Aluno>>> {
    let alunos = state.repository.alunos.list().await?;

    Ok(Json(ListResponse::from_rows(
        alunos,
        "Nenhum aluno encontrado",
    )))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/aluno/{id}",
    tag = "alunos",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The student", body = Aluno),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_aluno(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Aluno>> {
    let aluno = state.repository.alunos.get_by_id(id).await?;
    Ok(Json(aluno))
}

/// Replace a student's mutable fields; all of them are required
#[utoipa::path(
    put,
    path = "/aluno/{id}",
    tag = "alunos",
    request_body = UpdateAluno,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student updated", body = StatusMessage),
        (status = 400, description = "Missing required field, or nothing changed", body = crate::error::ErrorResponse),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_aluno(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(aluno): AppJson<UpdateAluno>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.alunos.update(id, &aluno).await?;

    Ok(Json(StatusMessage::ok("Aluno atualizado com sucesso")))
}

/// Delete a student by id
#[utoipa::path(
    delete,
    path = "/aluno/{id}",
    tag = "alunos",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Delete acknowledged, whether or not the row existed", body = StatusMessage)
    )
)]
pub async fn delete_aluno(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.alunos.delete(id).await?;

    Ok(Json(StatusMessage::ok("Aluno deletado com sucesso")))
}
