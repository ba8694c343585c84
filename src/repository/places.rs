//! Place domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::place::{NewPlace, Place, PlaceWithLikes},
};

impl Repository {
    /// List all places with their like counts, newest first
    pub async fn places_list(&self) -> AppResult<Vec<PlaceWithLikes>> {
        let rows = sqlx::query_as::<_, PlaceWithLikes>(
            r#"
            SELECT p.*, COUNT(l.id) AS like_count
            FROM places p
            LEFT JOIN likes l ON p.id = l.place_id
            GROUP BY p.id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List places with more than 3 likes or a rating of at least 4.0
    pub async fn places_list_top(&self) -> AppResult<Vec<PlaceWithLikes>> {
        let rows = sqlx::query_as::<_, PlaceWithLikes>(
            r#"
            SELECT p.*, COUNT(l.id) AS like_count
            FROM places p
            LEFT JOIN likes l ON p.id = l.place_id
            GROUP BY p.id
            HAVING COUNT(l.id) > 3 OR p.rating >= 4.0
            ORDER BY p.rating DESC, COUNT(l.id) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a place
    pub async fn places_create(&self, data: &NewPlace) -> AppResult<Place> {
        let row = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (title, description, location, image, user_id, rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(&data.image)
        .bind(data.user_id)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a place, returning the number of rows removed
    pub async fn places_delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
