//! Address handlers (list, add, update, delete, range search).

use axum::extract::{Query, State};
use axum::Json;

use addrbook_storage::AddressId;

use crate::error::ApiError;
use crate::schema::addresses::{
    AddressIdQuery, AddressRequest, AddressView, RangeQuery, RangeResponse,
};
use crate::schema::common::{StatusMessage, MSG_ADDED, MSG_DELETED, MSG_UPDATED};
use crate::service::{find_within_range, parse_range_query};
use crate::state::AppState;

/// Lists all addresses.
///
/// `GET /get_all_address`
pub async fn get_all_address(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressView>>, ApiError> {
    let service = state.service()?;
    Ok(Json(service.list()?))
}

/// Adds a new address.
///
/// `POST /add_address`
pub async fn add_address(
    State(state): State<AppState>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut service = state.service()?;
    service.add(req)?;
    Ok(Json(StatusMessage::success(MSG_ADDED)))
}

/// Overwrites an existing address.
///
/// `PUT /update_address?id={id}`
pub async fn update_address(
    State(state): State<AppState>,
    Query(params): Query<AddressIdQuery>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut service = state.service()?;
    service.update(AddressId(params.id), req)?;
    Ok(Json(StatusMessage::success(MSG_UPDATED)))
}

/// Deletes an address.
///
/// `DELETE /delete_address?id={id}`
pub async fn delete_address(
    State(state): State<AppState>,
    Query(params): Query<AddressIdQuery>,
) -> Result<Json<StatusMessage>, ApiError> {
    let mut service = state.service()?;
    service.delete(AddressId(params.id))?;
    Ok(Json(StatusMessage::success(MSG_DELETED)))
}

/// Finds addresses within `range` km of a point.
///
/// `GET /get_address_within_range?range={km}&latitude={lat}&longitude={lon}`
pub async fn get_address_within_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeResponse>, ApiError> {
    let (origin, range) = parse_range_query(&query)?;

    // The session is released before the distance lookups start.
    let records = state.service()?.records()?;

    let data = find_within_range(&state.distance, origin, range, records).await;
    Ok(Json(RangeResponse::new(data)))
}
