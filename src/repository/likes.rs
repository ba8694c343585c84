//! Like domain methods on Repository

use super::Repository;
use crate::error::AppResult;

impl Repository {
    /// Insert a like; fails with a unique violation if the pair already exists
    pub async fn likes_insert(&self, place_id: Option<i32>, user_id: Option<i32>) -> AppResult<()> {
        sqlx::query("INSERT INTO likes (place_id, user_id) VALUES ($1, $2)")
            .bind(place_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete a like, returning the number of rows removed
    pub async fn likes_delete(&self, place_id: Option<i32>, user_id: Option<i32>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM likes WHERE place_id = $1 AND user_id = $2")
            .bind(place_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Whether the user likes the place
    pub async fn likes_exists(&self, place_id: i32, user_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE place_id = $1 AND user_id = $2)"
        )
        .bind(place_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
