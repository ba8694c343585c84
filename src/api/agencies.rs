//! Agency and tour schedule endpoints

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{
        agency::{Agency, AgencyForm, NewAgency},
        tour_schedule::{CreateTourSchedule, TourScheduleWithPlace},
    },
};

use super::{acting_user_of, typed_body, ApiJson, ApiPath, MessageResponse, MultipartForm};

// ---- Agencies ----

/// List all agencies, newest first
#[utoipa::path(
    get,
    path = "/agencies",
    tag = "agencies",
    responses(
        (status = 200, description = "Agencies", body = Vec<Agency>),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_agencies(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Agency>>> {
    let agencies = state.services.agencies.list().await?;
    Ok(Json(agencies))
}

/// Add an agency (admin only)
#[utoipa::path(
    post,
    path = "/add-agency",
    tag = "agencies",
    request_body(
        content = AgencyForm,
        content_type = "multipart/form-data",
        description = "Agency fields plus an optional `image` file part"
    ),
    responses(
        (status = 200, description = "Agency added", body = MessageResponse),
        (status = 400, description = "Invalid body or storage error", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_agency(
    State(state): State<crate::AppState>,
    form: MultipartForm<AgencyForm>,
) -> AppResult<Json<MessageResponse>> {
    let MultipartForm { fields, image } = form;

    state
        .services
        .users
        .require_admin(fields.acting_user(), "Only admins can add agencies")
        .await?;

    let image = match image {
        Some(file) => Some(state.services.uploads.store(&file).await?),
        None => None,
    };

    let created = state
        .services
        .agencies
        .create(&NewAgency {
            name: fields.name,
            description: fields.description,
            contact: fields.contact,
            image: image.clone(),
        })
        .await;
    if let Err(e) = created {
        if let Some(image) = image {
            state.services.uploads.discard(&image).await;
        }
        return Err(e);
    }

    Ok(Json(MessageResponse::new("Agency added successfully")))
}

// ---- Tour schedules ----

/// List the tour schedules of an agency, earliest first
#[utoipa::path(
    get,
    path = "/tour-schedules/{agency_id}",
    tag = "agencies",
    params(("agency_id" = i32, Path, description = "Agency ID")),
    responses(
        (status = 200, description = "Tour schedules with place titles", body = Vec<TourScheduleWithPlace>),
        (status = 400, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_tour_schedules(
    State(state): State<crate::AppState>,
    ApiPath(agency_id): ApiPath<i32>,
) -> AppResult<Json<Vec<TourScheduleWithPlace>>> {
    let schedules = state.services.agencies.list_tour_schedules(agency_id).await?;
    Ok(Json(schedules))
}

/// Add a tour schedule (admin only)
#[utoipa::path(
    post,
    path = "/add-tour-schedule",
    tag = "agencies",
    request_body = CreateTourSchedule,
    responses(
        (status = 200, description = "Tour schedule added", body = MessageResponse),
        (status = 400, description = "Invalid body or storage error", body = crate::error::ErrorResponse),
        (status = 403, description = "Not an admin", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_tour_schedule(
    State(state): State<crate::AppState>,
    body: Option<ApiJson<Value>>,
) -> AppResult<Json<MessageResponse>> {
    // The payload is only typed once the caller is known to be an admin
    let body = body.map(|ApiJson(body)| body);
    state
        .services
        .users
        .require_admin(acting_user_of(body.as_ref()), "Only admins can add tour schedules")
        .await?;
    let data: CreateTourSchedule = typed_body(body)?;
    state.services.agencies.create_tour_schedule(&data).await?;

    Ok(Json(MessageResponse::new("Tour schedule added successfully")))
}
