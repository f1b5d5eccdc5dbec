//! Livros repository for database operations

use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::livro::{self, CreateLivro, Livro},
    repository::{partial::UpdateFields, Database},
};

#[derive(Clone)]
pub struct LivrosRepository {
    db: Database,
}

impl LivrosRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a book and return the generated id
    pub async fn create(&self, livro: &CreateLivro) -> AppResult<u64> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("INSERT INTO livros (titulo, isbn, autor) VALUES (?, ?, ?)")
            .bind(&livro.titulo)
            .bind(&livro.isbn)
            .bind(&livro.autor)
            .execute(&mut conn)
            .await?;

        Ok(result.last_insert_id())
    }

    /// List all books, in the database's natural order
    pub async fn list(&self) -> AppResult<Vec<Livro>> {
        let mut conn = self.db.connect().await?;

        let livros = sqlx::query_as::<_, Livro>("SELECT * FROM livros")
            .fetch_all(&mut conn)
            .await?;

        Ok(livros)
    }

    /// Get a book by id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Livro> {
        let mut conn = self.db.connect().await?;

        sqlx::query_as::<_, Livro>("SELECT * FROM livros WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Livro não encontrado.".to_string()))
    }

    /// Partial update: only the whitelisted fields present in the payload
    /// are written, the rest of the row is left untouched.
    ///
    /// The existence check and the UPDATE share one connection but run
    /// outside a transaction; a row deleted in between surfaces as the
    /// no-change outcome.
    pub async fn update(&self, id: i32, payload: &Map<String, Value>) -> AppResult<()> {
        let fields = UpdateFields::resolve(livro::UPDATE_FIELDS, payload)?;

        let mut conn = self.db.connect().await?;

        let exists = sqlx::query("SELECT id FROM livros WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Livro não encontrado.".to_string()));
        }

        let query = format!("UPDATE livros SET {} WHERE id = ?", fields.set_clause());
        let result = fields
            .bind(sqlx::query(&query))
            .bind(id)
            .execute(&mut conn)
            .await?;

        // MySQL reports zero affected rows when the submitted values equal
        // the current ones.
        if result.rows_affected() == 0 {
            return Err(AppError::NoChange("Nenhuma alteração foi feita.".to_string()));
        }

        Ok(())
    }

    /// Delete a book by id; succeeds whether or not the row existed
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut conn = self.db.connect().await?;

        sqlx::query("DELETE FROM livros WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}
