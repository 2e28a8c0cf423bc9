// Common types and utilities shared across the application

pub mod errors;
pub mod json;

pub use errors::ApiError;
