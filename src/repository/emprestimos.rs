//! Emprestimos repository for database operations

use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::emprestimo::{self, CreateEmprestimo, Emprestimo, EmprestimoDetalhes},
    repository::{partial::UpdateFields, Database},
};

#[derive(Clone)]
pub struct EmprestimosRepository {
    db: Database,
}

impl EmprestimosRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a loan and return the generated id.
    ///
    /// `data_emprestimo` is assigned by the database clock. The referenced
    /// member and book ids are not verified.
    pub async fn create(&self, emprestimo: &CreateEmprestimo) -> AppResult<u64> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            "INSERT INTO emprestimos (usuario_id, livro_id, data_emprestimo) VALUES (?, ?, NOW())",
        )
        .bind(emprestimo.usuario_id)
        .bind(emprestimo.livro_id)
        .execute(&mut conn)
        .await?;

        Ok(result.last_insert_id())
    }

    /// List all loans with the member name and book title resolved.
    ///
    /// Inner joins on both foreign keys: a loan whose member or book was
    /// deleted does not appear in the listing.
    pub async fn list_detalhes(&self) -> AppResult<Vec<EmprestimoDetalhes>> {
        let mut conn = self.db.connect().await?;

        let emprestimos = sqlx::query_as::<_, EmprestimoDetalhes>(
            r#"
            SELECT e.id, u.nome AS usuario, l.titulo AS livro, e.data_emprestimo
            FROM emprestimos e
            JOIN usuarios u ON e.usuario_id = u.id
            JOIN livros l ON e.livro_id = l.id
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(emprestimos)
    }

    /// Get the raw loan row by id (no join)
    pub async fn get_by_id(&self, id: i32) -> AppResult<Emprestimo> {
        let mut conn = self.db.connect().await?;

        sqlx::query_as::<_, Emprestimo>("SELECT * FROM emprestimos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Empréstimo não encontrado.".to_string()))
    }

    /// Partial update over one connection: existence check, then a dynamic
    /// UPDATE covering only the whitelisted fields present in the payload
    pub async fn update(&self, id: i32, payload: &Map<String, Value>) -> AppResult<()> {
        let fields = UpdateFields::resolve(emprestimo::UPDATE_FIELDS, payload)?;

        let mut conn = self.db.connect().await?;

        let exists = sqlx::query("SELECT id FROM emprestimos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Empréstimo não encontrado.".to_string()));
        }

        let query = format!("UPDATE emprestimos SET {} WHERE id = ?", fields.set_clause());
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

        sqlx::query("DELETE FROM emprestimos WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}
