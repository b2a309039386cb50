//! # Moodboard cache entry
//!
//! [`MoodboardEntry`] is the shape a saved post takes inside the local
//! moodboard cache. It is intentionally a *projection* of a post, not the full
//! record: just enough to render a moodboard card offline. The projection is
//! built by the gateway layer at save time; this crate only stores it.

use serde::{Deserialize, Serialize};

/// A locally cached saved post, keyed by `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodboardEntry {
    /// The saved post's id.
    pub id: String,
    /// Post title.
    pub title: String,
    /// Caption or description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Image to render on the card.
    pub image_url: String,
    /// Display name of the post's author.
    #[serde(default)]
    pub photographer_name: String,
    /// ISO-8601 creation date of the post.
    #[serde(default)]
    pub created_date: String,
    /// Tags carried over for card badges.
    #[serde(default)]
    pub tags: Vec<String>,
}
