//! Place model

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::parse_acting_user;
use crate::error::{AppError, AppResult};

/// Place record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Place {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Relative path of the uploaded image (e.g. `uploads/1718000000000-ab12.jpg`)
    pub image: String,
    /// Admin who created the place
    pub user_id: i32,
    #[schema(value_type = String, example = "4.5")]
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Place with its number of likes
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PlaceWithLikes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub place: Place,
    pub like_count: i64,
}

/// Text fields of the `POST /add-place` multipart body
///
/// The image travels in the `image` file part.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub user_id: Option<String>,
    /// Decimal rating, defaults to 0.0
    pub rating: Option<String>,
}

impl PlaceForm {
    /// Acting user id, `None` when absent or not a number
    pub fn acting_user(&self) -> Option<i32> {
        parse_acting_user(self.user_id.as_deref())
    }

    /// Rating as a decimal; absent or blank means 0.0
    pub fn rating(&self) -> AppResult<Decimal> {
        match self.rating.as_deref().map(str::trim) {
            None | Some("") => Ok(Decimal::ZERO),
            Some(raw) => Decimal::from_str(raw)
                .map_err(|_| AppError::Validation("Invalid rating".to_string())),
        }
    }
}

/// Data for inserting a place
#[derive(Debug)]
pub struct NewPlace {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: String,
    pub user_id: i32,
    pub rating: Decimal,
}
