//! Places service

use crate::{
    error::{AppError, AppResult, StorageContext},
    models::place::{NewPlace, Place, PlaceWithLikes},
    repository::Repository,
};

#[derive(Clone)]
pub struct PlacesService {
    repository: Repository,
}

impl PlacesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PlaceWithLikes>> {
        self.repository
            .places_list()
            .await
            .storage_context("Failed to fetch places")
    }

    pub async fn list_top(&self) -> AppResult<Vec<PlaceWithLikes>> {
        self.repository
            .places_list_top()
            .await
            .storage_context("Failed to fetch top places")
    }

    pub async fn create(&self, data: &NewPlace) -> AppResult<Place> {
        let place = self
            .repository
            .places_create(data)
            .await
            .storage_context("Failed to add place")?;
        tracing::info!(place_id = place.id, user_id = data.user_id, "Place added");
        Ok(place)
    }

    /// Delete a place; an id matching no row is reported as not found
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self
            .repository
            .places_delete(id)
            .await
            .storage_context("Failed to delete place")?;
        if deleted == 0 {
            return Err(AppError::NotFound("Place not found".to_string()));
        }
        tracing::info!(place_id = id, "Place deleted");
        Ok(())
    }
}
