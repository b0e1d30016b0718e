pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::Database;
pub use errors::AppError;
