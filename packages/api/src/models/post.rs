//! # Post model — shared images with styles, tags and content warnings
//!
//! [`Post`] is the server row; [`PostInfo`] is the client projection with the
//! author's display name joined in and the creation time flattened to an
//! ISO-8601 string. [`PostPayload`] is the creation input — the id and
//! `created_by` may be omitted, in which case the server assigns them.
//!
//! The sensitivity and approval flags are **integers**, not booleans, and stay
//! integers all the way through serialization. Filter predicates compare the
//! persisted representation bit-for-bit, so `{"is_sensitive": 1}` only works
//! if the flag is written as `1`.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};

/// Fields a caller may filter posts on; everything else is ignored.
pub const POST_FILTER_FIELDS: &[&str] = &[
    "id",
    "title",
    "created_by",
    "photography_style",
    "is_sensitive",
    "is_approved",
];

/// A collaborator credited on a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaggedPerson {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub instagram: String,
}

/// Full post record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub photography_style: Option<String>,
    pub tags: Vec<String>,
    pub trigger_warnings: Vec<String>,
    pub tagged_people: sqlx::types::Json<Vec<TaggedPerson>>,
    pub created_by: String,
    pub is_sensitive: i32,
    pub is_approved: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Post {
    /// Convert to PostInfo, resolving the author's display name from the
    /// email → name map built by the caller.
    pub fn to_info(&self, author_names: &std::collections::HashMap<String, String>) -> PostInfo {
        PostInfo {
            id: self.id.clone(),
            title: self.title.clone(),
            caption: self.caption.clone(),
            image_url: self.image_url.clone(),
            photography_style: self.photography_style.clone(),
            tags: self.tags.clone(),
            trigger_warnings: self.trigger_warnings.clone(),
            tagged_people: self.tagged_people.0.clone(),
            created_by: self.created_by.clone(),
            author_name: author_names.get(&self.created_by).cloned(),
            is_sensitive: self.is_sensitive,
            is_approved: self.is_approved,
            created_date: self.created_at.to_rfc3339(),
        }
    }
}

/// Post record safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostInfo {
    pub id: String,
    pub title: String,
    pub caption: Option<String>,
    pub image_url: String,
    pub photography_style: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub trigger_warnings: Vec<String>,
    #[serde(default)]
    pub tagged_people: Vec<TaggedPerson>,
    pub created_by: String,
    pub author_name: Option<String>,
    pub is_sensitive: i32,
    pub is_approved: i32,
    pub created_date: String,
}

/// Creation input for a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostPayload {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub caption: String,
    pub image_url: String,
    pub photography_style: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub trigger_warnings: Vec<String>,
    #[serde(default)]
    pub tagged_people: Vec<TaggedPerson>,
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_sensitive: i32,
}

/// Content warnings implied by a photography style.
///
/// The creation flow adds these to a post's `trigger_warnings` before the
/// record is persisted; storage itself never applies them.
pub fn auto_trigger_warnings(style: &str) -> &'static [&'static str] {
    match style {
        "boudoir" => &["artistic_nudity"],
        "fine_art_nude" => &["artistic_nudity", "full_nudity"],
        "dark_art" => &["disturbing_imagery"],
        "horror" => &["disturbing_imagery", "gore"],
        "gothic" => &["dark_themes"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_trigger_lookup() {
        assert_eq!(auto_trigger_warnings("boudoir"), &["artistic_nudity"]);
        assert_eq!(
            auto_trigger_warnings("horror"),
            &["disturbing_imagery", "gore"]
        );
        assert!(auto_trigger_warnings("portrait").is_empty());
        assert!(auto_trigger_warnings("").is_empty());
    }
}
