//! Application layer: typed API, errors, services and view models.

pub mod api;
pub mod dto;
pub mod error;
pub mod services;
pub mod view_models;

pub use error::ClientError;
