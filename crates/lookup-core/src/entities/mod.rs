//! Domain entities - lookup table entries and how they are built

mod factory;
mod kinds;
mod lookup;

pub use factory::EntityFactory;
pub use kinds::{Category, Role, Tag};
pub use lookup::{FromValue, LookupEntity};
