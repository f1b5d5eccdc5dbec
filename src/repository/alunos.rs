//! Alunos repository for database operations
//!
//! Legacy resource: PUT replaces every mutable column at once instead of
//! merging a partial payload.

use crate::{
    error::{AppError, AppResult},
    models::aluno::{Aluno, CreateAluno, UpdateAluno},
    repository::Database,
};

#[derive(Clone)]
pub struct AlunosRepository {
    db: Database,
}

impl AlunosRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, aluno: &CreateAluno) -> AppResult<u64> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("INSERT INTO alunos (nome, cpf, curso) VALUES (?, ?, ?)")
            .bind(&aluno.nome)
            .bind(&aluno.cpf)
            .bind(&aluno.curso)
            .execute(&mut conn)
            .await?;

        Ok(result.last_insert_id())
    }

    pub async fn list(&self) -> AppResult<Vec<Aluno>> {
        let mut conn = self.db.connect().await?;

        let alunos = sqlx::query_as::<_, Aluno>("SELECT * FROM alunos")
            .fetch_all(&mut conn)
            .await?;

        Ok(alunos)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Aluno> {
        let mut conn = self.db.connect().await?;

        sqlx::query_as::<_, Aluno>("SELECT * FROM alunos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluno não encontrado.".to_string()))
    }

    /// Full replace of the mutable columns.
    ///
    /// Same outcome mapping as the partial-update resources: an unknown
    /// id is not found, an update that changes nothing is reported as
    /// such.
    pub async fn update(&self, id: i32, aluno: &UpdateAluno) -> AppResult<()> {
        let mut conn = self.db.connect().await?;

        let exists = sqlx::query("SELECT id FROM alunos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Aluno não encontrado.".to_string()));
        }

        let result = sqlx::query("UPDATE alunos SET nome = ?, cpf = ?, curso = ? WHERE id = ?")
            .bind(&aluno.nome)
            .bind(&aluno.cpf)
            .bind(&aluno.curso)
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

        sqlx::query("DELETE FROM alunos WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}
