//! Usuarios repository for database operations

use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::usuario::{self, CreateUsuario, Usuario},
    repository::{partial::UpdateFields, Database},
};

#[derive(Clone)]
pub struct UsuariosRepository {
    db: Database,
}

impl UsuariosRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a member and return the generated id.
    ///
    /// A duplicate `email` or `cpf` is rejected by the unique keys on the
    /// table and comes back as a query error.
    pub async fn create(&self, usuario: &CreateUsuario) -> AppResult<u64> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("INSERT INTO usuarios (nome, email, cpf) VALUES (?, ?, ?)")
            .bind(&usuario.nome)
            .bind(&usuario.email)
            .bind(&usuario.cpf)
            .execute(&mut conn)
            .await?;

        Ok(result.last_insert_id())
    }

    pub async fn list(&self) -> AppResult<Vec<Usuario>> {
        let mut conn = self.db.connect().await?;

        let usuarios = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios")
            .fetch_all(&mut conn)
            .await?;

        Ok(usuarios)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Usuario> {
        let mut conn = self.db.connect().await?;

        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))
    }

    /// Partial update over one connection: existence check, then a dynamic
    /// UPDATE covering only the whitelisted fields present in the payload
    pub async fn update(&self, id: i32, payload: &Map<String, Value>) -> AppResult<()> {
        let fields = UpdateFields::resolve(usuario::UPDATE_FIELDS, payload)?;

        let mut conn = self.db.connect().await?;

        let exists = sqlx::query("SELECT id FROM usuarios WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Usuário não encontrado.".to_string()));
        }

        let query = format!("UPDATE usuarios SET {} WHERE id = ?", fields.set_clause());
        let result = fields
            .bind(sqlx::query(&query))
            .bind(id)
            .execute(&mut conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NoChange("Nenhuma alteração foi feita.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut conn = self.db.connect().await?;

        sqlx::query("DELETE FROM usuarios WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}
