//! Data models for the travel server

pub mod agency;
pub mod comment;
pub mod like;
pub mod place;
pub mod tour_schedule;
pub mod user;

// Re-export commonly used types
pub use agency::Agency;
pub use comment::{CommentReply, CommentThread};
pub use like::{LikeStatus, LikeToggle};
pub use place::{Place, PlaceWithLikes};
pub use tour_schedule::{TourSchedule, TourScheduleWithPlace};
pub use user::{Role, User};

/// User id sent as a multipart text field
fn parse_acting_user(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse().ok())
}
