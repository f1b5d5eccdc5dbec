//! Partial update resolution for the PUT endpoints
//!
//! A PUT body is an arbitrary JSON object; only the keys that appear in the
//! resource's column whitelist take part in the UPDATE, everything else is
//! ignored. Column names in the generated SET clause come exclusively from
//! the whitelist, payload values are always bound as parameters.

use serde_json::{Map, Value};
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;

use crate::error::{AppError, AppResult};

/// Fields selected for a partial UPDATE, in whitelist order
#[derive(Debug)]
pub struct UpdateFields {
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

impl UpdateFields {
    /// Filter the payload against the whitelist of updatable columns.
    ///
    /// Fails with a validation error when no recognized field is present,
    /// before any database work happens.
    pub fn resolve(
        allowed: &'static [&'static str],
        payload: &Map<String, Value>,
    ) -> AppResult<Self> {
        let mut columns = Vec::new();
        let mut values = Vec::new();

        for &column in allowed {
            if let Some(value) = payload.get(column) {
                columns.push(column);
                values.push(value.clone());
            }
        }

        if columns.is_empty() {
            return Err(AppError::Validation(format!(
                "Nenhum campo válido fornecido para atualização. Campos aceitos: {}.",
                allowed.join(", ")
            )));
        }

        Ok(Self { columns, values })
    }

    /// `col = ?, col = ?` fragment matching the order of [`Self::bind`]
    pub fn set_clause(&self) -> String {
        self.columns
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bind the selected values, in the same order as the SET clause
    pub fn bind<'q>(
        &self,
        mut query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        for value in &self.values {
            query = bind_value(query, value);
        }
        query
    }
}

/// Bind one JSON value as the matching MySQL parameter type
fn bind_value<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: &Value,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(u) = n.as_u64() {
                query.bind(u)
            } else {
                query.bind(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => query.bind(s.clone()),
        // Arrays/objects have no column representation; let the database
        // reject the serialized text if one ever gets this far.
        other => query.bind(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[&str] = &["titulo", "isbn", "autor"];

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload must be a JSON object"),
        }
    }

    #[test]
    fn test_keeps_only_whitelisted_fields() {
        let body = payload(json!({"isbn": "999", "editora": "Aleph", "id": 7}));
        let fields = UpdateFields::resolve(FIELDS, &body).unwrap();
        assert_eq!(fields.set_clause(), "isbn = ?");
    }

    #[test]
    fn test_set_clause_follows_whitelist_order() {
        // Payload order must not matter
        let body = payload(json!({"autor": "Herbert", "titulo": "Duna"}));
        let fields = UpdateFields::resolve(FIELDS, &body).unwrap();
        assert_eq!(fields.set_clause(), "titulo = ?, autor = ?");
        assert_eq!(fields.values, vec![json!("Duna"), json!("Herbert")]);
    }

    #[test]
    fn test_all_fields_present() {
        let body = payload(json!({"titulo": "Duna", "isbn": "123", "autor": "Herbert"}));
        let fields = UpdateFields::resolve(FIELDS, &body).unwrap();
        assert_eq!(fields.set_clause(), "titulo = ?, isbn = ?, autor = ?");
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let body = Map::new();
        let err = UpdateFields::resolve(FIELDS, &body).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unrecognized_keys_only_is_rejected() {
        let body = payload(json!({"paginas": 412, "edicao": "1a"}));
        let err = UpdateFields::resolve(FIELDS, &body).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                // The message names the accepted columns
                assert!(msg.contains("titulo, isbn, autor"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
