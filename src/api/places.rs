//! Place endpoints

use axum::{
    extract::State,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        place::{NewPlace, PlaceForm, PlaceWithLikes},
        user::ActingUser,
    },
};

use super::{ApiJson, ApiPath, MessageResponse, MultipartForm};

/// List all places with their like counts, newest first
#[utoipa::path(
    get,
    path = "/places",
    tag = "places",
    responses(
        (status = 200, description = "Places", body = Vec<PlaceWithLikes>),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_places(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PlaceWithLikes>>> {
    let places = state.services.places.list().await?;
    Ok(Json(places))
}

/// List places with more than 3 likes or a rating of at least 4.0
#[utoipa::path(
    get,
    path = "/top-places",
    tag = "places",
    responses(
        (status = 200, description = "Top places, best rated first", body = Vec<PlaceWithLikes>),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_top_places(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PlaceWithLikes>>> {
    let places = state.services.places.list_top().await?;
    Ok(Json(places))
}

/// Add a place (admin only)
#[utoipa::path(
    post,
    path = "/add-place",
    tag = "places",
    request_body(
        content = PlaceForm,
        content_type = "multipart/form-data",
        description = "Place fields plus a required `image` file part"
    ),
    responses(
        (status = 200, description = "Place added", body = MessageResponse),
        (status = 400, description = "No image uploaded or storage error", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_place(
    State(state): State<crate::AppState>,
    form: MultipartForm<PlaceForm>,
) -> AppResult<Json<MessageResponse>> {
    let MultipartForm { fields, image } = form;
    let image = image.ok_or_else(|| AppError::Validation("No image uploaded".to_string()))?;

    let user_id = state
        .services
        .users
        .require_admin(fields.acting_user(), "Only admins can add places")
        .await?;
    let rating = fields.rating()?;

    let image = state.services.uploads.store(&image).await?;

    let created = state
        .services
        .places
        .create(&NewPlace {
            title: fields.title,
            description: fields.description,
            location: fields.location,
            image: image.clone(),
            user_id,
            rating,
        })
        .await;
    if let Err(e) = created {
        state.services.uploads.discard(&image).await;
        return Err(e);
    }

    Ok(Json(MessageResponse::new("Place added successfully")))
}

/// Delete a place (admin only)
#[utoipa::path(
    delete,
    path = "/delete-place/{place_id}",
    tag = "places",
    params(("place_id" = i32, Path, description = "Place ID")),
    request_body = ActingUser,
    responses(
        (status = 200, description = "Place deleted", body = MessageResponse),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse),
        (status = 404, description = "Place not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_place(
    State(state): State<crate::AppState>,
    ApiPath(place_id): ApiPath<i32>,
    body: Option<ApiJson<ActingUser>>,
) -> AppResult<Json<MessageResponse>> {
    // A missing or unreadable body has no acting user, so it is denied like a non-admin
    let ApiJson(acting) = body.unwrap_or(ApiJson(ActingUser::default()));

    state
        .services
        .users
        .require_admin(acting.user_id, "Only admins can delete places")
        .await?;
    state.services.places.delete(place_id).await?;

    Ok(Json(MessageResponse::new("Place deleted successfully")))
}
