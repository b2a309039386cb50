//! Like and saved-post join records.
//!
//! Both relate a user to a post by `(post_id, user_email)`. They are created
//! and removed by the like/moodboard actions and only ever queried after that
//! — there is no update path.

use serde::{Deserialize, Serialize};

/// Fields a caller may filter join records on; everything else is ignored.
pub const ENGAGEMENT_FILTER_FIELDS: &[&str] = &["id", "post_id", "user_email"];

/// A user liked a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Like {
    pub id: String,
    pub post_id: String,
    pub user_email: String,
}

/// A user saved a post to their moodboard (server-side record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SavedPost {
    pub id: String,
    pub post_id: String,
    pub user_email: String,
}
