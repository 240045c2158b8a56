//! Route handlers

pub mod fallback;
pub mod health;
pub mod lookup;
