//! API handlers for the Biblioteca REST endpoints

pub mod alunos;
pub mod emprestimos;
pub mod livros;
pub mod openapi;
pub mod usuarios;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// JSON extractor that reports body problems in the API's own error shape.
///
/// A missing required field or a malformed body becomes a 400 with a
/// `{"status":"error","message"}` body instead of axum's plain-text
/// rejection.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}

/// Generic `{"status":"ok","message"}` response body
#[derive(Serialize, ToSchema)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: message.into(),
        }
    }
}

/// List responses are either the bare array of rows or, for an empty
/// table, an ok-status message (an empty table is not an error)
#[derive(Serialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Rows(Vec<T>),
    Empty(StatusMessage),
}

impl<T> ListResponse<T> {
    /// Wrap the rows, substituting the empty-result message when there are none
    pub fn from_rows(rows: Vec<T>, empty_message: &str) -> Self {
        if rows.is_empty() {
            ListResponse::Empty(StatusMessage::ok(empty_message))
        } else {
            ListResponse::Rows(rows)
        }
    }
}
