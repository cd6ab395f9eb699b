pub mod api;
pub mod libs;
pub mod models;
pub mod store;

#[macro_use]
extern crate lazy_static;
