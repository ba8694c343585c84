//! Tour schedule model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Tour schedule record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TourSchedule {
    pub id: i32,
    pub agency_id: i32,
    pub place_id: i32,
    pub tour_date: NaiveDate,
    #[schema(value_type = String, example = "149.90")]
    pub price: Decimal,
    pub description: Option<String>,
}

/// Tour schedule joined with the title of its place
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TourScheduleWithPlace {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub schedule: TourSchedule,
    pub place_title: String,
}

/// Create tour schedule request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourSchedule {
    pub agency_id: Option<i32>,
    pub place_id: Option<i32>,
    /// Tour date (YYYY-MM-DD)
    pub tour_date: Option<String>,
    #[schema(value_type = Option<String>, example = "149.90")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    /// Acting admin
    pub user_id: Option<i32>,
}
