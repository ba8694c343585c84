//! Comment and reply domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::comment::{CommentRow, CreateComment, CreateCommentReply},
};

impl Repository {
    /// Comments of a place joined with their replies and authors.
    ///
    /// One row per reply, or a single row with NULL reply columns for a
    /// comment without replies. Newest comments first, replies oldest first.
    pub async fn comments_list_rows(&self, place_id: i32) -> AppResult<Vec<CommentRow>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.comment, c.user_id, u.username, c.created_at,
                   cr.id AS reply_id, cr.reply, cr.user_id AS reply_user_id,
                   ru.username AS reply_username, cr.created_at AS reply_created_at
            FROM comments c
            LEFT JOIN users u ON c.user_id = u.id
            LEFT JOIN comment_replies cr ON c.id = cr.comment_id
            LEFT JOIN users ru ON cr.user_id = ru.id
            WHERE c.place_id = $1
            ORDER BY c.created_at DESC, c.id DESC, cr.created_at ASC, cr.id ASC
            "#,
        )
        .bind(place_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a comment
    pub async fn comments_create(&self, data: &CreateComment) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO comments (place_id, comment, user_id) VALUES ($1, $2, $3) RETURNING id"
        )
        .bind(data.place_id)
        .bind(&data.comment)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Create a reply to a comment
    pub async fn comments_create_reply(&self, data: &CreateCommentReply) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO comment_replies (comment_id, reply, user_id) VALUES ($1, $2, $3) RETURNING id"
        )
        .bind(data.comment_id)
        .bind(&data.reply)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }
}
