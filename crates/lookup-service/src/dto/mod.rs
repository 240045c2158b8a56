//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - The validated input value for creation requests
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::NewValue;
pub use responses::{EntityResponse, HealthChecks, HealthResponse, ReadinessResponse};
