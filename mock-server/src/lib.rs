//! Test double for the remote todo endpoint.
//!
//! # Design
//! Serves the same payload shape as the reference endpoint: a JSON
//! array of records with a numeric `id` and a `userId` field the client
//! does not model. The listing is read-only — the client under test
//! never creates, updates, or deletes remotely — so the router state is
//! an immutable `Arc<Vec<Todo>>` seeded at construction. Two extra
//! routers exercise the client's failure path: one answers 500, one
//! answers 200 with a body that is not JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    routing::get,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::Router;

/// A todo record in the reference endpoint's shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, title: &str, completed: bool) -> Self {
        Self {
            user_id: 1,
            id,
            title: title.to_string(),
            completed,
        }
    }
}

type Db = Arc<Vec<Todo>>;

/// Router serving `GET /todos` from the given seed.
pub fn app(seed: Vec<Todo>) -> Router {
    let db: Db = Arc::new(seed);
    Router::new().route("/todos", get(list_todos)).with_state(db)
}

/// Router whose `GET /todos` always answers 500.
pub fn failing_app() -> Router {
    Router::new().route(
        "/todos",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") }),
    )
}

/// Router whose `GET /todos` answers 200 with a body that is not JSON.
pub fn malformed_app() -> Router {
    Router::new().route(
        "/todos",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], "<!doctype html>") }),
    )
}

/// Serve `router` on `listener` until the task is dropped.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

/// Small fixed data set for the standalone binary.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "delectus aut autem", false),
        Todo::new(2, "quis ut nam facilis et officia qui", false),
        Todo::new(3, "fugiat veniam minus", false),
        Todo::new(4, "et porro tempora", true),
    ]
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.to_vec())
}
