pub mod args;
pub mod config;
pub mod db_sqlite;
pub mod global;
pub mod log;
