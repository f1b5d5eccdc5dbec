//! Repository layer for database operations

pub mod alunos;
pub mod emprestimos;
pub mod livros;
pub mod partial;
pub mod usuarios;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::ConnectOptions;

use crate::{
    config::{DatabaseConfig, DATABASE_CA_FILE, DATABASE_PORT},
    error::{AppError, AppResult},
};

/// Database gateway: opens one short-lived TLS connection per request.
///
/// There is no pool; every repository call connects, runs its statement(s)
/// and drops the connection. The connection is closed on every exit path
/// because `MySqlConnection` closes on drop.
#[derive(Clone)]
pub struct Database {
    options: MySqlConnectOptions,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .port(DATABASE_PORT)
            .ssl_mode(MySqlSslMode::VerifyCa)
            .ssl_ca(DATABASE_CA_FILE);

        Self { options }
    }

    /// Open a fresh connection for a single request
    pub async fn connect(&self) -> AppResult<MySqlConnection> {
        self.options.connect().await.map_err(AppError::Connection)
    }
}

/// Main repository struct holding the per-resource repositories
#[derive(Clone)]
pub struct Repository {
    pub usuarios: usuarios::UsuariosRepository,
    pub livros: livros::LivrosRepository,
    pub emprestimos: emprestimos::EmprestimosRepository,
    pub alunos: alunos::AlunosRepository,
}

impl Repository {
    /// Create a new repository over the given database gateway
    pub fn new(db: Database) -> Self {
        Self {
            usuarios: usuarios::UsuariosRepository::new(db.clone()),
            livros: livros::LivrosRepository::new(db.clone()),
            emprestimos: emprestimos::EmprestimosRepository::new(db.clone()),
            alunos: alunos::AlunosRepository::new(db),
        }
    }
}
