//! Agency model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::parse_acting_user;

/// Travel agency record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Agency {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Free-form contact (phone, email, address)
    pub contact: Option<String>,
    /// Relative path of the uploaded image, if any
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Text fields of the `POST /add-agency` multipart body
///
/// An optional image travels in the `image` file part.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgencyForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub user_id: Option<String>,
}

impl AgencyForm {
    /// Acting user id, `None` when absent or not a number
    pub fn acting_user(&self) -> Option<i32> {
        parse_acting_user(self.user_id.as_deref())
    }
}

/// Data for inserting an agency
#[derive(Debug)]
pub struct NewAgency {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
}
