//! Like endpoints

use axum::{
    extract::State,
    Json,
};

use crate::{
    error::AppResult,
    models::like::{LikeRequest, LikeStatus, LikeToggleResponse},
};

use super::{ApiJson, ApiPath};

/// Like a place, or unlike it if already liked
#[utoipa::path(
    post,
    path = "/like-place",
    tag = "likes",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Place liked or unliked", body = LikeToggleResponse),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn like_place(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<LikeRequest>,
) -> AppResult<Json<LikeToggleResponse>> {
    let toggle = state
        .services
        .likes
        .toggle(request.place_id, request.user_id)
        .await?;
    Ok(Json(toggle.into()))
}

/// Whether a user likes a place
#[utoipa::path(
    get,
    path = "/like-status/{place_id}/{user_id}",
    tag = "likes",
    params(
        ("place_id" = i32, Path, description = "Place ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Like status", body = LikeStatus),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn like_status(
    State(state): State<crate::AppState>,
    ApiPath((place_id, user_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<LikeStatus>> {
    let is_liked = state.services.likes.status(place_id, user_id).await?;
    Ok(Json(LikeStatus { is_liked }))
}
