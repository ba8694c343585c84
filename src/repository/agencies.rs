//! Agency and tour schedule domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::{
        agency::{Agency, NewAgency},
        tour_schedule::{CreateTourSchedule, TourSchedule, TourScheduleWithPlace},
    },
};

impl Repository {
    // ---- Agencies ----

    /// List all agencies, newest first
    pub async fn agencies_list(&self) -> AppResult<Vec<Agency>> {
        let rows = sqlx::query_as::<_, Agency>(
            "SELECT * FROM agencies ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create an agency
    pub async fn agencies_create(&self, data: &NewAgency) -> AppResult<Agency> {
        let row = sqlx::query_as::<_, Agency>(
            r#"
            INSERT INTO agencies (name, description, contact, image)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.contact)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    // ---- Tour schedules ----

    /// List the tour schedules of an agency with their place titles, by tour date
    pub async fn tour_schedules_list_for_agency(
        &self,
        agency_id: i32,
    ) -> AppResult<Vec<TourScheduleWithPlace>> {
        let rows = sqlx::query_as::<_, TourScheduleWithPlace>(
            r#"
            SELECT ts.*, p.title AS place_title
            FROM tour_schedules ts
            JOIN places p ON ts.place_id = p.id
            WHERE ts.agency_id = $1
            ORDER BY ts.tour_date ASC
            "#,
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a tour schedule; the date is parsed by the database
    pub async fn tour_schedules_create(&self, data: &CreateTourSchedule) -> AppResult<TourSchedule> {
        let row = sqlx::query_as::<_, TourSchedule>(
            r#"
            INSERT INTO tour_schedules (agency_id, place_id, tour_date, price, description)
            VALUES ($1, $2, $3::date, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.agency_id)
        .bind(data.place_id)
        .bind(&data.tour_date)
        .bind(data.price)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
