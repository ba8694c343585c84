//! API handlers for the travel REST endpoints

pub mod agencies;
pub mod auth;
pub mod comments;
pub mod health;
pub mod likes;
pub mod openapi;
pub mod places;

use axum::{
    async_trait,
    extract::{DefaultBodyLimit, FromRequest, FromRequestParts, Request},
    routing::{delete, get, post},
    Router,
};
use axum_extra::extract::Multipart;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    services::uploads::UploadedFile,
    AppState,
};

/// Name of the multipart file part carrying an image
pub const IMAGE_FIELD: &str = "image";

/// JSON body extractor whose rejections use the API error shape
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections use the API error shape
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Multipart body: text fields deserialized into `T`, plus the optional image part
pub struct MultipartForm<T> {
    pub fields: T,
    pub image: Option<UploadedFile>,
}

#[async_trait]
impl<S, T> FromRequest<S> for MultipartForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await?;
        let mut fields = Map::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .file_name()
                .filter(|n| !n.is_empty())
                .map(str::to_string);

            match file_name {
                Some(file_name) if name == IMAGE_FIELD => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    image = Some(UploadedFile {
                        file_name: Some(file_name),
                        content_type,
                        bytes,
                    });
                }
                // Other file parts are ignored
                Some(_) => continue,
                None => {
                    let value = field.text().await?;
                    fields.insert(name, Value::String(value));
                }
            }
        }

        let fields = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            AppError::BadRequest {
                error: "Invalid multipart body".to_string(),
                details: e.to_string(),
            }
        })?;

        Ok(Self { fields, image })
    }
}

/// Acting user of an admin JSON body, `None` when absent or not an integer
pub fn acting_user_of(body: Option<&Value>) -> Option<i32> {
    body?
        .get("userId")?
        .as_i64()
        .and_then(|id| i32::try_from(id).ok())
}

/// Type an admin JSON body once the acting user has passed the admin check
pub fn typed_body<T: DeserializeOwned>(body: Option<Value>) -> AppResult<T> {
    serde_json::from_value(body.unwrap_or(Value::Null)).map_err(|e| AppError::BadRequest {
        error: "Invalid request body".to_string(),
        details: e.to_string(),
    })
}

/// Plain confirmation body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads_route = format!("/{}", state.config.uploads.public_prefix.trim_matches('/'));
    let uploads_dir = state.services.uploads.dir().to_path_buf();
    let max_body_bytes = state.config.uploads.max_body_bytes;

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Places
        .route("/places", get(places::list_places))
        .route("/top-places", get(places::list_top_places))
        .route("/add-place", post(places::add_place))
        .route("/delete-place/:place_id", delete(places::delete_place))
        // Agencies and tour schedules
        .route("/agencies", get(agencies::list_agencies))
        .route("/add-agency", post(agencies::add_agency))
        .route("/add-tour-schedule", post(agencies::add_tour_schedule))
        .route("/tour-schedules/:agency_id", get(agencies::list_tour_schedules))
        // Likes
        .route("/like-place", post(likes::like_place))
        .route("/like-status/:place_id/:user_id", get(likes::like_status))
        // Comments
        .route("/add-comment", post(comments::add_comment))
        .route("/add-comment-reply", post(comments::add_comment_reply))
        .route("/comments/:place_id", get(comments::list_comments))
        .with_state(state);

    Router::new()
        .merge(api)
        .nest_service(&uploads_route, ServeDir::new(uploads_dir))
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::models::comment::CreateCommentReply;

    #[test]
    fn test_acting_user_of() {
        assert_eq!(acting_user_of(Some(&json!({"userId": 4, "price": "abc"}))), Some(4));
        assert_eq!(acting_user_of(Some(&json!({"userId": "4"}))), None);
        assert_eq!(acting_user_of(Some(&json!({"userId": 1.5}))), None);
        assert_eq!(acting_user_of(Some(&json!({"userId": i64::MAX}))), None);
        assert_eq!(acting_user_of(Some(&json!([1, 2]))), None);
        assert_eq!(acting_user_of(None), None);
    }

    #[test]
    fn test_typed_body_reports_invalid_fields() {
        let reply: CreateCommentReply =
            typed_body(Some(json!({"commentId": 3, "reply": "Welcome", "userId": 1}))).unwrap();
        assert_eq!(reply.comment_id, Some(3));

        match typed_body::<CreateCommentReply>(Some(json!({"commentId": "abc", "userId": 1}))) {
            Err(AppError::BadRequest { error, details }) => {
                assert_eq!(error, "Invalid request body");
                assert!(details.contains("invalid type"));
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.comment_id)),
        }
    }
}
