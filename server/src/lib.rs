//! HTTP resource endpoint for the todo store.
//!
//! # Design
//! Thin translation layer: each handler parses the incoming representation,
//! calls one store operation, and maps the outcome to a status code. Path
//! ids arrive as text and go through `TodoId::parse` before any lookup, so
//! the store never sees an unvalidated identifier. The collection sits
//! behind a single `RwLock` and every handler holds it for the whole
//! operation, keeping create/update/delete atomic with respect to each
//! other.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

use todo_store::{NewTodo, StoreError, Todo, TodoId, TodoPatch, TodoStore};

/// Shared handle to the one store instance behind the router.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Build the router serving `store`.
pub fn app(store: TodoStore) -> Router {
    let shared: SharedStore = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(shared)
}

/// Serve the endpoint on `listener` until the process exits.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Translate a store failure into the externally visible status code.
fn status_for(err: &StoreError) -> StatusCode {
    match err {
        StoreError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

fn parse_id(raw: &str) -> Result<TodoId, StatusCode> {
    TodoId::parse(raw).map_err(|err| {
        debug!(raw, "rejected identifier");
        status_for(&err)
    })
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.read().await.list())
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(&id)?;
    let store = store.read().await;
    match store.get(id) {
        Ok(todo) => Ok(Json(todo.clone())),
        Err(err) => {
            debug!(%id, "lookup miss");
            Err(status_for(&err))
        }
    }
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let todo = store
        .write()
        .await
        .create(input)
        .map_err(|err| status_for(&err))?;
    info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(&id)?;
    let todo = store
        .write()
        .await
        .update(id, patch)
        .map_err(|err| status_for(&err))?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    store
        .write()
        .await
        .delete(id)
        .map_err(|err| status_for(&err))?;
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
