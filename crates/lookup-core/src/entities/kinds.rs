//! Entity kinds shipped with the service

use super::lookup::{lookup_entity, FromValue, LookupEntity};
use crate::value_objects::EntityId;

lookup_entity!(
    /// Category entity - groups items under a shared label
    Category,
    "Category"
);

lookup_entity!(
    /// Role entity - a named role that can be granted
    Role,
    "Role"
);

lookup_entity!(
    /// Tag entity - free-form label attached to items
    Tag,
    "Tag"
);
