//! Comment and reply models

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Create comment request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub place_id: Option<i32>,
    pub comment: Option<String>,
    pub user_id: Option<i32>,
}

/// Create comment reply request (admin only)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentReply {
    pub comment_id: Option<i32>,
    pub reply: Option<String>,
    /// Acting admin
    pub user_id: Option<i32>,
}

/// One row of the comment/reply join: a comment with at most one of its replies
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: i32,
    pub comment: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reply_id: Option<i32>,
    pub reply: Option<String>,
    pub reply_user_id: Option<i32>,
    pub reply_username: Option<String>,
    pub reply_created_at: Option<DateTime<Utc>>,
}

/// Reply to a comment, with its author's username
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentReply {
    pub id: i32,
    pub reply: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Comment with its author's username and its replies, oldest first
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentThread {
    pub id: i32,
    pub comment: String,
    pub user_id: i32,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<CommentReply>,
}

impl CommentThread {
    /// Fold join rows into threads keyed by comment id.
    ///
    /// Threads come out in the order their comment first appears and replies
    /// in row order, so the query's sort order carries through.
    pub fn from_rows(rows: Vec<CommentRow>) -> Vec<CommentThread> {
        let mut threads: IndexMap<i32, CommentThread> = IndexMap::new();

        for row in rows {
            let thread = threads.entry(row.id).or_insert_with(|| CommentThread {
                id: row.id,
                comment: row.comment.clone(),
                user_id: row.user_id,
                username: row.username.clone(),
                created_at: row.created_at,
                replies: Vec::new(),
            });

            // A comment without replies still yields one row with NULL reply columns
            if let (Some(id), Some(reply), Some(user_id), Some(created_at)) =
                (row.reply_id, row.reply, row.reply_user_id, row.reply_created_at)
            {
                thread.replies.push(CommentReply {
                    id,
                    reply,
                    user_id,
                    username: row.reply_username,
                    created_at,
                });
            }
        }

        threads.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap()
    }

    fn row(id: i32, minute: u32, reply: Option<(i32, u32)>) -> CommentRow {
        CommentRow {
            id,
            comment: format!("comment {}", id),
            user_id: 10,
            username: Some("traveler".to_string()),
            created_at: at(minute),
            reply_id: reply.map(|(rid, _)| rid),
            reply: reply.map(|(rid, _)| format!("reply {}", rid)),
            reply_user_id: reply.map(|_| 1),
            reply_username: reply.map(|_| "admin".to_string()),
            reply_created_at: reply.map(|(_, m)| at(m)),
        }
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(CommentThread::from_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_from_rows_groups_replies_in_order() {
        // Newest comment first, replies oldest first, as the query sorts them
        let rows = vec![
            row(2, 30, Some((7, 31))),
            row(2, 30, Some((9, 45))),
            row(1, 10, None),
        ];

        let threads = CommentThread::from_rows(rows);
        assert_eq!(threads.len(), 2);

        assert_eq!(threads[0].id, 2);
        let reply_ids: Vec<i32> = threads[0].replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![7, 9]);
        assert_eq!(threads[0].replies[0].username.as_deref(), Some("admin"));

        assert_eq!(threads[1].id, 1);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_from_rows_keeps_first_seen_order() {
        let rows = vec![
            row(5, 50, Some((1, 51))),
            row(3, 40, None),
            row(5, 50, Some((2, 52))),
        ];

        let threads = CommentThread::from_rows(rows);
        let ids: Vec<i32> = threads.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 3]);
        assert_eq!(threads[0].replies.len(), 2);
    }
}
