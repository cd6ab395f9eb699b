use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The http bind address
    #[arg(long, env, default_value = "0.0.0.0")]
    pub http_bind: String,

    /// The http port
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Number of http worker threads, defaults to the number of cpus
    #[arg(long, env)]
    pub http_workers: Option<usize>,

    /// The database connection string, e.g. sqlite://status.db
    /// Without it status checks are kept in memory only
    #[arg(long, env)]
    pub database_url: Option<String>,

    /// The database name, status checks of other names in the same file are not visible
    #[arg(long, env, default_value = "test")]
    pub db_name: String,

    /// Comma separated list of allowed cross-origin hosts, or *
    #[arg(long, env, default_value = "*")]
    pub cors_origins: String,

    /// The log level
    #[arg(long, env, default_value = "info")]
    pub log_level: String,
}
