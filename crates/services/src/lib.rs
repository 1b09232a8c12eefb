#![forbid(unsafe_code)]

pub mod catalog_service;
pub mod error;
pub mod progress_service;

pub use catalog_service::CatalogService;
pub use error::{CatalogError, ProgressServiceError};
pub use progress_service::ProgressService;
