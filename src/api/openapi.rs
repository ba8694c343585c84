//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{agencies, auth, comments, health, likes, places};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel API",
        version = "0.1.0",
        description = "Travel discovery REST API: places, agencies, tour schedules, likes and comments",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Accounts
        auth::signup,
        auth::login,
        // Places
        places::list_places,
        places::list_top_places,
        places::add_place,
        places::delete_place,
        // Agencies
        agencies::list_agencies,
        agencies::add_agency,
        agencies::list_tour_schedules,
        agencies::add_tour_schedule,
        // Likes
        likes::like_place,
        likes::like_status,
        // Comments
        comments::add_comment,
        comments::add_comment_reply,
        comments::list_comments,
    ),
    components(
        schemas(
            // Accounts
            crate::models::user::Role,
            crate::models::user::User,
            crate::models::user::SignupRequest,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::ActingUser,
            // Places
            crate::models::place::Place,
            crate::models::place::PlaceWithLikes,
            crate::models::place::PlaceForm,
            // Agencies
            crate::models::agency::Agency,
            crate::models::agency::AgencyForm,
            crate::models::tour_schedule::TourSchedule,
            crate::models::tour_schedule::TourScheduleWithPlace,
            crate::models::tour_schedule::CreateTourSchedule,
            // Likes
            crate::models::like::LikeRequest,
            crate::models::like::LikeToggleResponse,
            crate::models::like::LikeStatus,
            // Comments
            crate::models::comment::CreateComment,
            crate::models::comment::CreateCommentReply,
            crate::models::comment::CommentThread,
            crate::models::comment::CommentReply,
            // Health
            health::HealthResponse,
            // Responses
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Signup and login"),
        (name = "places", description = "Places and top places"),
        (name = "agencies", description = "Agencies and tour schedules"),
        (name = "likes", description = "Place likes"),
        (name = "comments", description = "Comments and admin replies")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
