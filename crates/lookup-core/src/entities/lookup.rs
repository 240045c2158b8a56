//! Lookup entity model - the `{id, value}` shape shared by every kind

use std::fmt;

use crate::value_objects::EntityId;

/// A lookup table entry: store-assigned id plus a value unique within its kind.
///
/// One implementation per entity kind. Services, repositories, and handlers are
/// written against this trait, so a new kind never needs code of its own
/// beyond the type declaration.
pub trait LookupEntity: fmt::Debug + Clone + Send + Sync + 'static {
    /// Kind name used in logs and error messages (e.g. "Category")
    const KIND: &'static str;

    /// Store-assigned id, `EntityId::UNASSIGNED` until persisted
    fn id(&self) -> EntityId;

    /// Business key of the entry
    fn value(&self) -> &str;

    /// Rebuild an entry read back from the store
    fn restore(id: EntityId, value: String) -> Self;

    /// Check whether the entry has been persisted
    #[inline]
    fn is_persisted(&self) -> bool {
        self.id().is_assigned()
    }
}

/// Conventional single-string constructor of an entity kind.
///
/// Builds an unsaved entry (id unassigned) from an already validated value.
pub trait FromValue: LookupEntity {
    fn from_value(value: String) -> Self;
}

/// Declare a lookup entity kind backed by the plain `{id, value}` shape.
macro_rules! lookup_entity {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub id: EntityId,
            pub value: String,
        }

        impl $name {
            #[doc = concat!("Create a new, unsaved ", $kind)]
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    id: EntityId::UNASSIGNED,
                    value: value.into(),
                }
            }
        }

        impl LookupEntity for $name {
            const KIND: &'static str = $kind;

            #[inline]
            fn id(&self) -> EntityId {
                self.id
            }

            #[inline]
            fn value(&self) -> &str {
                &self.value
            }

            fn restore(id: EntityId, value: String) -> Self {
                Self { id, value }
            }
        }

        impl FromValue for $name {
            fn from_value(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}

pub(crate) use lookup_entity;
