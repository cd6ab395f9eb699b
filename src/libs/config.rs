use super::args::Args;
use crate::store::StoreBackend;
use clap::Parser;

lazy_static! {
    pub static ref ARGS: Args = Args::parse();
    pub static ref HTTP_BIND: String = ARGS.http_bind.clone();
    pub static ref HTTP_PORT: u16 = ARGS.port;
    pub static ref HTTP_WORKERS: Option<usize> = ARGS.http_workers;
    pub static ref DATABASE_URL: Option<String> = ARGS.database_url.clone();
    pub static ref DB_NAME: String = ARGS.db_name.clone();
    pub static ref CORS_ORIGINS: CorsOrigins = CorsOrigins::parse(&ARGS.cors_origins);
    pub static ref LOG_LEVEL: String = ARGS.log_level.clone();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// `*` anywhere in the list, or a list with no usable entry, allows any origin.
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|s| s == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

pub fn store_backend() -> StoreBackend {
    StoreBackend::from_config(DATABASE_URL.as_deref(), DB_NAME.as_str())
}
