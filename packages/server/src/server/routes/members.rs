//! `/api/members` handlers.
//!
//! Each handler checks existence/conflicts, delegates to the `MemberStore`,
//! and maps absence or rejection onto `ApiError`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::common::json::from_object;
use crate::common::ApiError;
use crate::domains::member::{Member, MemberPatch};
use crate::server::app::AppState;

/// GET /api/members
pub async fn list_members(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.members.find_all().await?;
    Ok(Json(members))
}

/// POST /api/members
///
/// 201 with the stored member, 409 if the id is taken. Use PATCH to modify an
/// existing member.
pub async fn create_member(
    Extension(state): Extension<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let Json(body) = body.map_err(malformed_body)?;
    let member: Member = from_object(body)?;

    if state.members.exists_by_id(member.id).await? {
        tracing::debug!(member_id = member.id, "Rejecting duplicate member id");
        return Err(ApiError::Conflict);
    }

    let saved = state.members.save(&member).await?;
    tracing::info!(member_id = saved.id, "Member created");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/members/:id
pub async fn get_member(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Member>, ApiError> {
    let Path(id) = id.map_err(malformed_path)?;

    state
        .members
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// PATCH /api/members/:id
///
/// Merges the fields present in the body into the stored member. The body is
/// decoded completely before anything is written.
pub async fn patch_member(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let Path(id) = id.map_err(malformed_path)?;
    let Json(body) = body.map_err(malformed_body)?;

    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let patch: MemberPatch = from_object(body)?;
    if patch.had_id() {
        tracing::debug!(member_id = id, "Ignoring id in patch body");
    }

    let saved = state.members.save(&member.apply(patch)).await?;
    tracing::info!(member_id = id, "Member updated");

    Ok(Json(saved))
}

/// DELETE /api/members/:id
pub async fn delete_member(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(malformed_path)?;

    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    state.members.delete(&member).await?;
    tracing::info!(member_id = id, "Member deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn malformed_body(rejection: JsonRejection) -> ApiError {
    ApiError::MalformedInput(rejection.body_text())
}

fn malformed_path(rejection: PathRejection) -> ApiError {
    ApiError::MalformedInput(rejection.body_text())
}
