use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::errors::ApiError;
use crate::models::task::CreateTaskRequest;
use crate::repository::{TaskStore, UpdateOutcome};
use crate::Response;

#[get("/tasks")]
pub async fn list_tasks(store: web::Data<dyn TaskStore>) -> Result<HttpResponse, ApiError> {
    let active = store.list_active()?;
    Ok(HttpResponse::Ok().json(active))
}

#[post("/tasks")]
pub async fn create_task(
    store: web::Data<dyn TaskStore>,
    body: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    // Validation happens before any store access.
    let new_task = body.into_inner().validate()?;
    let task = store.create(new_task)?;
    Ok(HttpResponse::Created().json(task))
}

#[put("/tasks/{id}/complete")]
pub async fn complete_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    match store.set_completed(task_id, true)? {
        UpdateOutcome::Updated => Ok(HttpResponse::Ok().json(Response {
            message: format!("task {task_id} marked complete"),
        })),
        UpdateOutcome::NotFound => Err(ApiError::NotFound(task_id)),
    }
}

#[put("/tasks/{id}/uncomplete")]
pub async fn uncomplete_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    match store.set_completed(task_id, false)? {
        UpdateOutcome::Updated => Ok(HttpResponse::Ok().json(Response {
            message: format!("task {task_id} marked incomplete"),
        })),
        UpdateOutcome::NotFound => Err(ApiError::NotFound(task_id)),
    }
}

#[delete("/tasks/{id}")]
pub async fn delete_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();
    match store.soft_delete(task_id)? {
        UpdateOutcome::Updated => Ok(HttpResponse::Ok().json(Response {
            message: format!("task {task_id} deleted"),
        })),
        UpdateOutcome::NotFound => Err(ApiError::NotFound(task_id)),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tasks)
        .service(create_task)
        .service(complete_task)
        .service(uncomplete_task)
        .service(delete_task);
}
