//! Comments service

use crate::{
    error::{AppResult, StorageContext},
    models::comment::{CommentThread, CreateComment, CreateCommentReply},
    repository::Repository,
};

#[derive(Clone)]
pub struct CommentsService {
    repository: Repository,
}

impl CommentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Comments of a place, newest first, each with its replies oldest first
    pub async fn list_threads(&self, place_id: i32) -> AppResult<Vec<CommentThread>> {
        let rows = self
            .repository
            .comments_list_rows(place_id)
            .await
            .storage_context("Failed to fetch comments")?;
        Ok(CommentThread::from_rows(rows))
    }

    pub async fn add_comment(&self, data: &CreateComment) -> AppResult<i32> {
        self.repository
            .comments_create(data)
            .await
            .storage_context("Failed to add comment")
    }

    /// Add a reply; the caller has already checked the author is an admin
    pub async fn add_reply(&self, data: &CreateCommentReply) -> AppResult<i32> {
        self.repository
            .comments_create_reply(data)
            .await
            .storage_context("Failed to add reply")
    }
}
