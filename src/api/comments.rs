//! Comment endpoints

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::comment::{CommentThread, CreateComment, CreateCommentReply},
};

use super::{acting_user_of, typed_body, ApiJson, ApiPath, MessageResponse};

/// Comment on a place
#[utoipa::path(
    post,
    path = "/add-comment",
    tag = "comments",
    request_body = CreateComment,
    responses(
        (status = 200, description = "Comment added", body = MessageResponse),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_comment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateComment>,
) -> AppResult<Json<MessageResponse>> {
    state.services.comments.add_comment(&data).await?;
    Ok(Json(MessageResponse::new("Comment added successfully")))
}

/// Reply to a comment (admin only)
#[utoipa::path(
    post,
    path = "/add-comment-reply",
    tag = "comments",
    request_body = CreateCommentReply,
    responses(
        (status = 200, description = "Reply added", body = MessageResponse),
        (status = 400, description = "Invalid body or storage error", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_comment_reply(
    State(state): State<crate::AppState>,
    body: Option<ApiJson<Value>>,
) -> AppResult<Json<MessageResponse>> {
    // The payload is only typed once the caller is known to be an admin
    let body = body.map(|ApiJson(body)| body);
    state
        .services
        .users
        .require_admin(acting_user_of(body.as_ref()), "Only admins can reply to comments")
        .await?;
    let data: CreateCommentReply = typed_body(body)?;
    state.services.comments.add_reply(&data).await?;

    Ok(Json(MessageResponse::new("Reply added successfully")))
}

/// Comments of a place with their replies
#[utoipa::path(
    get,
    path = "/comments/{place_id}",
    tag = "comments",
    params(("place_id" = i32, Path, description = "Place ID")),
    responses(
        (status = 200, description = "Comments newest first, replies oldest first", body = Vec<CommentThread>),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_comments(
    State(state): State<crate::AppState>,
    ApiPath(place_id): ApiPath<i32>,
) -> AppResult<Json<Vec<CommentThread>>> {
    let threads = state.services.comments.list_threads(place_id).await?;
    Ok(Json(threads))
}
