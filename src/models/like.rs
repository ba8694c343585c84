//! Like model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Like toggle request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub place_id: Option<i32>,
    pub user_id: Option<i32>,
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

impl LikeToggle {
    pub fn is_liked(&self) -> bool {
        matches!(self, LikeToggle::Liked)
    }

    pub fn message(&self) -> &'static str {
        match self {
            LikeToggle::Liked => "Place liked successfully",
            LikeToggle::Unliked => "Place unliked successfully",
        }
    }
}

/// Like toggle response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub message: String,
    pub is_liked: bool,
}

impl From<LikeToggle> for LikeToggleResponse {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            message: toggle.message().to_string(),
            is_liked: toggle.is_liked(),
        }
    }
}

/// Like status of a (place, user) pair
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub is_liked: bool,
}
