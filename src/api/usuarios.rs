//! Usuario (library member) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::usuario::{CreateUsuario, Usuario},
    AppState,
};

use super::{AppJson, ListResponse, StatusMessage};

/// Response for a created member
#[derive(Serialize, ToSchema)]
pub struct UsuarioCriado {
    pub status: &'static str,
    /// Database-generated id
    pub usuario_id: u64,
}

/// Insert a member
///
/// A duplicate `email` or `cpf` comes back as a query error with the
/// database's message.
#[utoipa::path(
    post,
    path = "/usuario",
    tag = "usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 200, description = "Member created", body = UsuarioCriado),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse),
        (status = 500, description = "Constraint violation", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_usuario(
    State(state): State<AppState>,
    AppJson(usuario): AppJson<CreateUsuario>,
) -> AppResult<Json<UsuarioCriado>> {
    let usuario_id = state.repository.usuarios.create(&usuario).await?;

    Ok(Json(UsuarioCriado {
        status: "ok",
        usuario_id,
    }))
}

/// List all members
#[utoipa::path(
    get,
    path = "/usuario",
    tag = "usuarios",
    responses(
        (status = 200, description = "All members, or an ok-status message when the table is empty", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<Usuario>>> {
    let usuarios = state.repository.usuarios.list().await?;

    Ok(Json(ListResponse::from_rows(
        usuarios,
        "Nenhum usuário encontrado",
    )))
}

/// Get a member by id
#[utoipa::path(
    get,
    path = "/usuario/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "The member", body = Usuario),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.repository.usuarios.get_by_id(id).await?;
    Ok(Json(usuario))
}

/// Partially update a member; only `nome`, `email` and `cpf` are accepted
#[utoipa::path(
    put,
    path = "/usuario/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member updated", body = StatusMessage),
        (status = 400, description = "No recognized field, or nothing changed", body = crate::error::ErrorResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.usuarios.update(id, &payload).await?;

    Ok(Json(StatusMessage::ok("Usuário atualizado com sucesso.")))
}

/// Delete a member by id
#[utoipa::path(
    delete,
    path = "/usuario/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Delete acknowledged, whether or not the row existed", body = StatusMessage)
    )
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatusMessage>> {
    state.repository.usuarios.delete(id).await?;

    Ok(Json(StatusMessage::ok("Usuário deletado com sucesso")))
}
