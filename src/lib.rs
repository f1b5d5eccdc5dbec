//! Biblioteca Library Loans API
//!
//! A small library-loans REST service: four CRUD resources (usuarios,
//! livros, emprestimos, alunos) over MySQL, one short-lived database
//! connection per request.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
