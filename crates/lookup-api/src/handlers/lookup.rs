//! Lookup handlers
//!
//! Create and list endpoints shared by every entity kind.

use axum::{extract::State, Json};
use lookup_core::LookupEntity;
use lookup_service::EntityResponse;

use crate::extractors::JsonObject;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::LookupEndpoint;

/// List every entry of the kind
///
/// GET /{kind}
pub async fn list_entries<E: LookupEntity>(
    State(endpoint): State<LookupEndpoint<E>>,
) -> ApiResult<Json<Vec<EntityResponse>>> {
    let entries = endpoint.service().get_all().await?;
    Ok(Json(entries.iter().map(EntityResponse::from).collect()))
}

/// Create an entry from the value under the kind's request key
///
/// POST /{kind}
pub async fn create_entry<E: LookupEntity>(
    State(endpoint): State<LookupEndpoint<E>>,
    body: JsonObject,
) -> ApiResult<Created<Json<EntityResponse>>> {
    let key = endpoint.value_key();
    let value = body.required_str(key)?;

    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{key} cannot be empty.")));
    }

    let entry = endpoint.service().create(value).await?;
    Ok(Created(Json(EntityResponse::from(&entry))))
}
