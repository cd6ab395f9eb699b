use super::{APIState, ApiError, HttpResponseExt};
use crate::libs::config::CorsOrigins;
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, dev::Server, middleware, web};
use log::info;
use std::sync::Arc;

pub struct ServerOptions {
    pub bind: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub cors_origins: CorsOrigins,
}

async fn not_found() -> impl Responder {
    HttpResponse::response_error_notfound()
}

/// Routes, body parsing and the fallback handler, shared by the server and the tests.
pub fn configure(config: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

    config
        .app_data(json_config)
        .configure(super::router_api::register)
        .default_service(web::route().to(not_found));
}

pub fn cors(origins: &CorsOrigins) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header().supports_credentials();
    match origins {
        CorsOrigins::Any => cors.allow_any_origin(),
        CorsOrigins::List(list) => list.iter().fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

/// Binds the server. Signal handling is left to the caller, stop it through `Server::handle`.
pub fn build(state: Arc<APIState>, options: &ServerOptions) -> anyhow::Result<Server> {
    let state = web::Data::new(state);
    let cors_origins = options.cors_origins.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(cors(&cors_origins))
            .configure(configure)
    })
    .disable_signals();

    if let Some(workers) = options.workers {
        server = server.workers(workers);
    }

    let server = server.bind((options.bind.as_str(), options.port))?.run();

    info!("RESTful API server started at http://{}:{}", options.bind, options.port);
    Ok(server)
}
