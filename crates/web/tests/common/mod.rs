#![allow(dead_code)]

use std::sync::Arc;

use artistshub_api::auth::jwt::JwtConfig;
use artistshub_api::config::ServerConfig;
use artistshub_api::router::build_app_router;
use artistshub_api::state::AppState;
use artistshub_db::DbPool;
use artistshub_web::api::Api;
use artistshub_web::http::ApiClient;
use artistshub_web::storage::{MemoryTokenStore, TokenStore};

/// A backend running on an ephemeral local port.
pub struct Backend {
    /// Base URL including `/api`.
    pub url: String,
    pub pool: DbPool,
}

/// Boot the real API against a fresh in-memory database.
pub async fn spawn_backend() -> Backend {
    let pool = artistshub_db::create_pool("sqlite::memory:")
        .await
        .expect("in-memory pool should open");
    artistshub_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "client-test-secret-long-enough".to_string(),
            expiry_days: 30,
        },
    };
    let app = build_app_router(AppState {
        pool: pool.clone(),
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    Backend {
        url: format!("http://{addr}/api"),
        pool,
    }
}

/// A base URL where nothing listens.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    format!("http://{addr}/api")
}

pub fn memory_tokens() -> Arc<dyn TokenStore> {
    Arc::new(MemoryTokenStore::default())
}

pub fn api(url: &str, tokens: Arc<dyn TokenStore>) -> Api {
    Api::new(ApiClient::new(url, tokens))
}
