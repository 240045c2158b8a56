//! Lookup row model

use lookup_core::{EntityId, LookupEntity};
use sqlx::FromRow;

/// Database model shared by every lookup table (`id`, `value`)
#[derive(Debug, Clone, FromRow)]
pub struct LookupRow {
    pub id: i64,
    pub value: String,
}

impl LookupRow {
    /// Rebuild the entity of kind `E` this row belongs to
    pub fn into_entity<E: LookupEntity>(self) -> E {
        E::restore(EntityId::new(self.id), self.value)
    }
}
