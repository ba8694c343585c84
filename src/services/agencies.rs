//! Agencies and tour schedules service

use crate::{
    error::{AppResult, StorageContext},
    models::{
        agency::{Agency, NewAgency},
        tour_schedule::{CreateTourSchedule, TourSchedule, TourScheduleWithPlace},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AgenciesService {
    repository: Repository,
}

impl AgenciesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Agency>> {
        self.repository
            .agencies_list()
            .await
            .storage_context("Failed to fetch agencies")
    }

    pub async fn create(&self, data: &NewAgency) -> AppResult<Agency> {
        let agency = self
            .repository
            .agencies_create(data)
            .await
            .storage_context("Failed to add agency")?;
        tracing::info!(agency_id = agency.id, "Agency added");
        Ok(agency)
    }

    pub async fn list_tour_schedules(&self, agency_id: i32) -> AppResult<Vec<TourScheduleWithPlace>> {
        self.repository
            .tour_schedules_list_for_agency(agency_id)
            .await
            .storage_context("Failed to fetch tour schedules")
    }

    pub async fn create_tour_schedule(&self, data: &CreateTourSchedule) -> AppResult<TourSchedule> {
        let schedule = self
            .repository
            .tour_schedules_create(data)
            .await
            .storage_context("Failed to add tour schedule")?;
        tracing::info!(
            schedule_id = schedule.id,
            agency_id = schedule.agency_id,
            "Tour schedule added"
        );
        Ok(schedule)
    }
}
