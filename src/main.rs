//! Biblioteca Server - Library Loans REST API

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_api::{
    api,
    config::AppConfig,
    repository::{Database, Repository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!("biblioteca_api={},tower_http=debug", config.logging.level).into()
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // No pool: the gateway opens one connection per request. A single
    // startup connection verifies reachability and applies migrations.
    let database = Database::new(&config.database);

    {
        let mut conn = database
            .connect()
            .await
            .expect("Failed to connect to database");

        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&mut conn)
            .await
            .expect("Failed to run database migrations");

        tracing::info!("Database migrations completed");
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        repository: Repository::new(database),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Usuarios (library members)
        .route("/usuario", get(api::usuarios::list_usuarios))
        .route("/usuario", post(api::usuarios::create_usuario))
        .route("/usuario/:id", get(api::usuarios::get_usuario))
        .route("/usuario/:id", put(api::usuarios::update_usuario))
        .route("/usuario/:id", delete(api::usuarios::delete_usuario))
        // Livros (books)
        .route("/livro", get(api::livros::list_livros))
        .route("/livro", post(api::livros::create_livro))
        .route("/livro/:id", get(api::livros::get_livro))
        .route("/livro/:id", put(api::livros::update_livro))
        .route("/livro/:id", delete(api::livros::delete_livro))
        // Emprestimos (loans)
        .route("/emprestimo", get(api::emprestimos::list_emprestimos))
        .route("/emprestimo", post(api::emprestimos::create_emprestimo))
        .route("/emprestimo/:id", get(api::emprestimos::get_emprestimo))
        .route("/emprestimo/:id", put(api::emprestimos::update_emprestimo))
        .route("/emprestimo/:id", delete(api::emprestimos::delete_emprestimo))
        // Alunos (students, legacy full-replace variant)
        .route("/aluno", get(api::alunos::list_alunos))
        .route("/aluno", post(api::alunos::create_aluno))
        .route("/aluno/:id", get(api::alunos::get_aluno))
        .route("/aluno/:id", put(api::alunos::update_aluno))
        .route("/aluno/:id", delete(api::alunos::delete_aluno))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
