//! Database models
//!
//! Row structs that map directly to table rows via SQLx `FromRow`.

mod lookup_row;

pub use lookup_row::LookupRow;
