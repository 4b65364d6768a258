#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use dram_api::auth::jwt::{generate_access_token, JwtConfig};
use dram_api::auth::password::hash_password;
use dram_api::config::ServerConfig;
use dram_api::router::build_app_router;
use dram_api::state::AppState;
use dram_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use dram_db::models::user::CreateUser;
use dram_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "test_password_123!";
pub const MULTIPART_BOUNDARY: &str = "dram-test-boundary";

/// Router plus the temporary directories it writes into.
///
/// The directories are deleted when this value is dropped.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    pub upload_dir: TempDir,
    pub staging_dir: TempDir,
}

impl TestApp {
    /// A fresh clone of the router for one `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Number of files left in the staging directory.
    pub fn staged_file_count(&self) -> usize {
        std::fs::read_dir(self.staging_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        expiry_hours: 1,
    }
}

/// Build a test `ServerConfig` pointing at the given directories.
pub fn test_config(upload_dir: &TempDir, staging_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.path().to_path_buf(),
        staging_dir: staging_dir.path().to_path_buf(),
        max_upload_bytes: 64 * 1024,
        jwt: test_jwt_config(),
        admin_bootstrap: None,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> TestApp {
    let upload_dir = TempDir::new().unwrap();
    let staging_dir = TempDir::new().unwrap();
    let config = test_config(&upload_dir, &staging_dir);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let router = build_app_router(state, &config);

    TestApp {
        router,
        config,
        upload_dir,
        staging_dir,
    }
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] and the given role.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> dram_db::models::user::User {
    let input = CreateUser {
        username: username.to_string(),
        email: Some(format!("{username}@test.com")),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

fn token_for(user: &dram_db::models::user::User) -> String {
    generate_access_token(user.id, &user.username, &user.role, &test_jwt_config()).unwrap()
}

/// Create an admin user and return a bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    token_for(&create_user(pool, "admin", ROLE_ADMIN).await)
}

/// Create a viewer user and return a bearer token for it.
pub async fn viewer_token(pool: &PgPool) -> String {
    token_for(&create_user(pool, "viewer", ROLE_VIEWER).await)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, None, body).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "POST", uri, Some(token), body).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    json_request(app, "PUT", uri, Some(token), body).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Encode one file part as a `multipart/form-data` body.
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a single-file multipart form, optionally authenticated.
pub async fn post_file(
    app: Router,
    uri: &str,
    token: Option<&str>,
    field: &str,
    filename: &str,
    content: &[u8],
) -> Response<Body> {
    let mut builder = Request::post(uri).header(
        "content-type",
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = multipart_body(field, filename, content);
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

