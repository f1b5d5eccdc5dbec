//! API integration tests
//!
//! These run against a live server (`cargo run`) with a reachable
//! database: `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:5000";

/// Unique suffix so reruns don't trip the unique keys on usuarios
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

async fn create_usuario(client: &Client) -> i64 {
    let suffix = unique_suffix();
    let response = client
        .post(format!("{}/usuario", BASE_URL))
        .json(&json!({
            "nome": "Ana Lima",
            "email": format!("ana.{}@example.com", suffix),
            "cpf": format!("{}", suffix % 100_000_000_000),
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    body["usuario_id"].as_i64().expect("No usuario_id in response")
}

async fn create_livro(client: &Client, titulo: &str, isbn: &str, autor: &str) -> i64 {
    let response = client
        .post(format!("{}/livro", BASE_URL))
        .json(&json!({"titulo": titulo, "isbn": isbn, "autor": autor}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    body["livro_id"].as_i64().expect("No livro_id in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_create_then_get_returns_submitted_fields() {
    let client = Client::new();

    let id = create_livro(&client, "Duna", "978-8576572008", "Frank Herbert").await;

    let response = client
        .get(format!("{}/livro/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["titulo"], "Duna");
    assert_eq!(body["isbn"], "978-8576572008");
    assert_eq!(body["autor"], "Frank Herbert");
}

#[tokio::test]
#[ignore]
async fn test_partial_update_leaves_other_fields_untouched() {
    let client = Client::new();

    let id = create_livro(&client, "Dune", "123", "Herbert").await;

    let response = client
        .put(format!("{}/livro/{}", BASE_URL, id))
        .json(&json!({"isbn": "999"}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");

    let body: Value = client
        .get(format!("{}/livro/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["titulo"], "Dune");
    assert_eq!(body["isbn"], "999");
    assert_eq!(body["autor"], "Herbert");
}

#[tokio::test]
#[ignore]
async fn test_repeated_partial_update_reports_no_change() {
    let client = Client::new();

    let id = create_livro(&client, "Neuromancer", "345", "Gibson").await;

    let payload = json!({"autor": "William Gibson"});

    let first = client
        .put(format!("{}/livro/{}", BASE_URL, id))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert!(first.status().is_success());

    // Same values again: zero rows change, reported as a client error
    let second = client
        .put(format!("{}/livro/{}", BASE_URL, id))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 400);

    let body: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
#[ignore]
async fn test_partial_update_with_unrecognized_keys_only() {
    let client = Client::new();

    let id = create_livro(&client, "Fundação", "567", "Asimov").await;

    let response = client
        .put(format!("{}/livro/{}", BASE_URL, id))
        .json(&json!({"paginas": 320, "editora": "Aleph"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");

    // The row stayed as it was
    let body: Value = client
        .get(format!("{}/livro/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["titulo"], "Fundação");
}

#[tokio::test]
#[ignore]
async fn test_get_nonexistent_id_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/livro/99999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
#[ignore]
async fn test_update_nonexistent_id_is_not_found() {
    let client = Client::new();

    let response = client
        .put(format!("{}/usuario/99999999", BASE_URL))
        .json(&json!({"nome": "Ninguém"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_usuario_with_missing_field_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/usuario", BASE_URL))
        .json(&json!({"nome": "Sem Email"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
#[ignore]
async fn test_delete_succeeds_regardless_of_existence() {
    let client = Client::new();

    let id = create_livro(&client, "Descartável", "000", "Anon").await;

    for _ in 0..2 {
        let response = client
            .delete(format!("{}/livro/{}", BASE_URL, id))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
#[ignore]
async fn test_list_is_array_or_empty_message() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/aluno", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    // Either the bare array of rows or the ok-status empty message
    assert!(body.is_array() || body["status"] == "ok");
}

#[tokio::test]
#[ignore]
async fn test_loan_listing_excludes_orphaned_loans() {
    let client = Client::new();

    let usuario_id = create_usuario(&client).await;
    let livro_id = create_livro(&client, "Emprestado", "111", "Autor").await;

    let response = client
        .post(format!("{}/emprestimo", BASE_URL))
        .json(&json!({"usuario_id": usuario_id, "livro_id": livro_id}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let emprestimo_id = body["emprestimo_id"].as_i64().expect("No emprestimo_id");

    // The loan shows up while both referenced rows exist
    let listing: Value = client
        .get(format!("{}/emprestimo", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let listed = listing
        .as_array()
        .map(|rows| rows.iter().any(|r| r["id"].as_i64() == Some(emprestimo_id)))
        .unwrap_or(false);
    assert!(listed, "loan should appear in the joined listing");

    // Deleting the member orphans the loan and drops it from the listing
    let response = client
        .delete(format!("{}/usuario/{}", BASE_URL, usuario_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let listing: Value = client
        .get(format!("{}/emprestimo", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let listed = listing
        .as_array()
        .map(|rows| rows.iter().any(|r| r["id"].as_i64() == Some(emprestimo_id)))
        .unwrap_or(false);
    assert!(!listed, "orphaned loan must not appear in the joined listing");

    // The raw row is still reachable by id
    let response = client
        .get(format!("{}/emprestimo/{}", BASE_URL, emprestimo_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_aluno_full_replace_requires_all_fields() {
    let client = Client::new();

    let cpf = format!("{}", unique_suffix() % 100_000_000_000);

    let response = client
        .post(format!("{}/aluno", BASE_URL))
        .json(&json!({"nome": "João Silva", "cpf": cpf, "curso": "Engenharia"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["aluno_id"].as_i64().expect("No aluno_id");

    // Partial body is rejected: aluno PUT is full replace
    let response = client
        .put(format!("{}/aluno/{}", BASE_URL, id))
        .json(&json!({"curso": "Medicina"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Full body with one changed column goes through
    let response = client
        .put(format!("{}/aluno/{}", BASE_URL, id))
        .json(&json!({"nome": "João Silva", "cpf": cpf, "curso": "Medicina"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = client
        .get(format!("{}/aluno/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["curso"], "Medicina");
    assert_eq!(body["nome"], "João Silva");
}
