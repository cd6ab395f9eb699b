use crate::store::StatusStore;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use std::sync::Arc;

pub mod router_api;
pub mod server;

pub const SERVICE_NAME: &str = "status-api";

pub struct APIState {
    pub store: Arc<dyn StatusStore>,
}

impl APIState {
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        APIState { store }
    }
}

pub trait HttpResponseExt {
    fn response_data<T: serde::Serialize>(value: T) -> Self;
    fn response_error(status: StatusCode, detail: &str) -> Self;
    fn response_error_notfound() -> Self;
}

impl HttpResponseExt for HttpResponse {
    fn response_data<T: serde::Serialize>(value: T) -> Self {
        Self::Ok().json(value)
    }

    fn response_error(status: StatusCode, detail: &str) -> Self {
        Self::build(status).json(json!({ "detail": detail }))
    }

    fn response_error_notfound() -> Self {
        Self::response_error(StatusCode::NOT_FOUND, "Not Found")
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Status check not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::response_error(self.status_code(), &self.to_string())
    }
}
