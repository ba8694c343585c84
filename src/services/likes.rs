//! Like toggle and like status

use crate::{
    error::{AppResult, StorageContext},
    models::like::LikeToggle,
    repository::Repository,
};

#[derive(Clone)]
pub struct LikesService {
    repository: Repository,
}

impl LikesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Like the place, or unlike it if the pair already exists.
    ///
    /// The insert always goes first and the unique constraint on
    /// (place_id, user_id) decides; there is no prior existence check, so two
    /// concurrent likes can never both insert.
    pub async fn toggle(&self, place_id: Option<i32>, user_id: Option<i32>) -> AppResult<LikeToggle> {
        match self.repository.likes_insert(place_id, user_id).await {
            Ok(()) => {
                tracing::debug!(?place_id, ?user_id, "Place liked");
                Ok(LikeToggle::Liked)
            }
            Err(e) if e.is_unique_violation() => {
                self.repository
                    .likes_delete(place_id, user_id)
                    .await
                    .storage_context("Failed to unlike place")?;
                tracing::debug!(?place_id, ?user_id, "Place unliked");
                Ok(LikeToggle::Unliked)
            }
            Err(e) => Err::<LikeToggle, _>(e).storage_context("Failed to like place"),
        }
    }

    pub async fn status(&self, place_id: i32, user_id: i32) -> AppResult<bool> {
        self.repository
            .likes_exists(place_id, user_id)
            .await
            .storage_context("Failed to check like status")
    }
}
