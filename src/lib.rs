pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod report;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
