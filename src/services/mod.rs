//! Business logic services

pub mod agencies;
pub mod comments;
pub mod likes;
pub mod places;
pub mod uploads;
pub mod users;

use crate::{config::UploadsConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub places: places::PlacesService,
    pub agencies: agencies::AgenciesService,
    pub likes: likes::LikesService,
    pub comments: comments::CommentsService,
    pub uploads: uploads::UploadService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, uploads_config: &UploadsConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            places: places::PlacesService::new(repository.clone()),
            agencies: agencies::AgenciesService::new(repository.clone()),
            likes: likes::LikesService::new(repository.clone()),
            comments: comments::CommentsService::new(repository.clone()),
            uploads: uploads::UploadService::new(uploads_config),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
