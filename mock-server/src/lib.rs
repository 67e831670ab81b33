//! In-process stand-in for the remote task collection endpoint.
//!
//! Tasks are kept in creation order, which is the order `GET /tasks` lists
//! them in. Ids are server-assigned UUID strings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub complete: bool,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

/// Fields absent from the body are left unchanged; an `id` in the body is
/// ignored in favour of the path.
#[derive(Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub complete: Option<bool>,
}

pub type Db = Arc<RwLock<Vec<Task>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let tasks = db.read().await;
    Json(tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> (StatusCode, Json<Task>) {
    let task = Task {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        complete: input.complete,
    };
    debug!(id = %task.id, "created task");
    db.write().await.push(task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn get_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let tasks = db.read().await;
    tasks
        .iter()
        .find(|task| task.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, StatusCode> {
    let mut tasks = db.write().await;
    let task = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        task.title = title;
    }
    if let Some(complete) = input.complete {
        task.complete = complete;
    }
    debug!(%id, "updated task");
    Ok(Json(task.clone()))
}

/// Acknowledges with the deleted record, as the hosted collection API does.
async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let mut tasks = db.write().await;
    let index = tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    debug!(%id, "deleted task");
    Ok(Json(tasks.remove(index)))
}
