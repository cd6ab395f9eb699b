use super::{APIState, ApiError, HttpResponseExt, SERVICE_NAME};
use crate::{libs::global::now_utc, models::status_check::StatusCheckCreate};
use actix_web::{
    HttpResponse, Responder, get, post,
    web::{self},
};
use serde_json::json;
use std::sync::Arc;

pub fn register(config: &mut web::ServiceConfig) {
    config.service(
        web::scope("/api")
            .route("", web::get().to(root))
            .route("/", web::get().to(root))
            .service(health)
            .service(smoke_test)
            .service(create_status_check)
            .service(list_status_checks)
            .service(get_status_check),
    );
}

async fn root() -> impl Responder {
    HttpResponse::response_data(json!({
        "message": "Hello World",
        "status": "running",
        "timestamp": now_utc(),
    }))
}

#[get("/health")]
async fn health(state: web::Data<Arc<APIState>>) -> impl Responder {
    HttpResponse::response_data(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "storage": state.store.backend(),
        "timestamp": now_utc(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/test")]
async fn smoke_test() -> impl Responder {
    HttpResponse::response_data(json!({ "test": "ok", "timestamp": now_utc() }))
}

#[post("/status")]
async fn create_status_check(
    state: web::Data<Arc<APIState>>,
    input: web::Json<StatusCheckCreate>,
) -> Result<HttpResponse, ApiError> {
    let check = state.store.create(input.into_inner()).await.map_err(|e| {
        log::error!("create_status_check error: {:?}", e);
        ApiError::Internal(e)
    })?;
    log::info!("Status check created: {} {}", check.id, check.client_name);
    Ok(HttpResponse::response_data(check))
}

#[get("/status")]
async fn list_status_checks(state: web::Data<Arc<APIState>>) -> Result<HttpResponse, ApiError> {
    let checks = state.store.list().await.map_err(|e| {
        log::error!("list_status_checks error: {:?}", e);
        ApiError::Internal(e)
    })?;
    Ok(HttpResponse::response_data(checks))
}

#[get("/status/{id}")]
async fn get_status_check(state: web::Data<Arc<APIState>>, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    match state.store.get_by_id(&id).await {
        Ok(Some(check)) => Ok(HttpResponse::response_data(check)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => {
            log::error!("get_status_check error: {} {:?}", id, e);
            Err(ApiError::Internal(e))
        }
    }
}
