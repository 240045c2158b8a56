//! # lookup-service
//!
//! Application layer: the generic create-or-fetch service shared by every
//! lookup entity kind, its errors, DTOs, and the service context.

pub mod dto;
pub mod services;

pub use dto::{EntityResponse, HealthChecks, HealthResponse, NewValue, ReadinessResponse};
pub use services::{LookupService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
