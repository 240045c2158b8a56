//! Entity factory - construction capability handed to the generic service
//!
//! The service never knows which kind it builds. It calls the factory it was
//! wired with, which is either the kind's conventional [`FromValue`]
//! constructor or a custom function.

use std::fmt;
use std::sync::Arc;

use super::lookup::{FromValue, LookupEntity};
use crate::error::DomainError;

type ConstructFn<E> = dyn Fn(String) -> Result<E, String> + Send + Sync;

/// Builds unsaved entries of kind `E` from a validated value
pub struct EntityFactory<E> {
    construct: Arc<ConstructFn<E>>,
}

impl<E: LookupEntity> EntityFactory<E> {
    /// Wrap a custom constructor. An `Err` carries the reason the value could
    /// not be turned into an entry.
    pub fn from_fn<F>(construct: F) -> Self
    where
        F: Fn(String) -> Result<E, String> + Send + Sync + 'static,
    {
        Self {
            construct: Arc::new(construct),
        }
    }

    /// Construct an unsaved entry
    pub fn construct(&self, value: String) -> Result<E, DomainError> {
        let entity = (self.construct)(value).map_err(|reason| DomainError::ConstructionFailed {
            kind: E::KIND,
            reason,
        })?;

        if entity.is_persisted() {
            return Err(DomainError::ConstructionFailed {
                kind: E::KIND,
                reason: format!("constructor assigned id {}", entity.id()),
            });
        }

        Ok(entity)
    }
}

impl<E: FromValue> EntityFactory<E> {
    /// Factory using the kind's conventional single-string constructor
    pub fn by_convention() -> Self {
        Self::from_fn(|value| Ok(E::from_value(value)))
    }
}

impl<E: FromValue> Default for EntityFactory<E> {
    fn default() -> Self {
        Self::by_convention()
    }
}

impl<E> Clone for EntityFactory<E> {
    fn clone(&self) -> Self {
        Self {
            construct: Arc::clone(&self.construct),
        }
    }
}

impl<E> fmt::Debug for EntityFactory<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityFactory")
            .field("kind", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
