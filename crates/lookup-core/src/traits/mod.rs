//! Ports implemented by infrastructure adapters

mod repositories;

pub use repositories::{LookupRepository, RepoResult, StoreHealth};
