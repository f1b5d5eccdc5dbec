//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{alunos, emprestimos, livros, usuarios};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library loans REST API (usuarios, livros, emprestimos, alunos)"
    ),
    paths(
        // Usuarios
        usuarios::create_usuario,
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::update_usuario,
        usuarios::delete_usuario,
        // Livros
        livros::create_livro,
        livros::list_livros,
        livros::get_livro,
        livros::update_livro,
        livros::delete_livro,
        // Emprestimos
        emprestimos::create_emprestimo,
        emprestimos::list_emprestimos,
        emprestimos::get_emprestimo,
        emprestimos::update_emprestimo,
        emprestimos::delete_emprestimo,
        // Alunos
        alunos::create_aluno,
        alunos::list_alunos,
        alunos::get_aluno,
        alunos::update_aluno,
        alunos::delete_aluno,
    ),
    components(
        schemas(
            // Usuarios
            crate::models::usuario::Usuario,
            crate::models::usuario::CreateUsuario,
            usuarios::UsuarioCriado,
            // Livros
            crate::models::livro::Livro,
            crate::models::livro::CreateLivro,
            livros::LivroCriado,
            // Emprestimos
            crate::models::emprestimo::Emprestimo,
            crate::models::emprestimo::EmprestimoDetalhes,
            crate::models::emprestimo::CreateEmprestimo,
            emprestimos::EmprestimoCriado,
            // Alunos
            crate::models::aluno::Aluno,
            crate::models::aluno::CreateAluno,
            crate::models::aluno::UpdateAluno,
            alunos::AlunoCriado,
            // Shared
            super::StatusMessage,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "usuarios", description = "Library member management"),
        (name = "livros", description = "Book management"),
        (name = "emprestimos", description = "Loan management"),
        (name = "alunos", description = "Student records (legacy full-replace variant)")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
