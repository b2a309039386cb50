//! Community reference data.

use serde::{Deserialize, Serialize};

/// Categories communities are grouped under in the browse view.
pub const COMMUNITY_CATEGORIES: &[&str] = &["style", "location", "interest"];

/// A read-only community listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Community {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub member_count: i32,
}
