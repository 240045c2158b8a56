//! Business logic services
//!
//! The lookup service is written once against `LookupEntity` and instantiated
//! per kind; the context bundles the instances the API serves.

pub mod context;
pub mod error;
pub mod lookup;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use lookup::LookupService;
