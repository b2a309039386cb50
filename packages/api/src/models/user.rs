//! # User model — accounts with roles, styles and affiliations
//!
//! Defines the two representations of an Exhibit user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries. Array columns
//! (`roles`, `styles`, the `linked_*` sets) map to Postgres `TEXT[]`. The
//! [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The client-safe subset that crosses the server/client boundary via server
//! functions. It omits the password hash and timestamps and converts the
//! `Uuid` to a `String` so it works in WASM. This is also the record the
//! Session Store caches.
//!
//! ## [`UserPatch`]
//!
//! A partial update: every field is optional, `None` meaning "leave as is".
//! The server merges a patch onto the row; clearing a free-text affiliation is
//! expressed as `Some(String::new())`.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

pub const ROLE_PHOTOGRAPHER: &str = "photographer";
pub const ROLE_MODEL: &str = "model";
pub const ROLE_AGENCY: &str = "agency";
pub const ROLE_COMPANY: &str = "company";
pub const ROLE_FAN: &str = "fan";

/// Fields a caller may filter users on; everything else is ignored.
pub const USER_FILTER_FIELDS: &[&str] = &["id", "email", "primary_role"];

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub roles: Vec<String>,
    pub primary_role: Option<String>,
    pub styles: Vec<String>,
    pub agency_affiliation: Option<String>,
    pub company_affiliation: Option<String>,
    pub linked_agencies: Vec<String>,
    pub linked_companies: Vec<String>,
    pub linked_models: Vec<String>,
    pub show_sensitive_content: bool,
    pub onboarding_complete: bool,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            bio: self.bio.clone(),
            roles: self.roles.clone(),
            primary_role: normalize_primary_role(&self.roles, self.primary_role.as_deref()),
            styles: self.styles.clone(),
            agency_affiliation: self.agency_affiliation.clone(),
            company_affiliation: self.company_affiliation.clone(),
            linked_agencies: self.linked_agencies.clone(),
            linked_companies: self.linked_companies.clone(),
            linked_models: self.linked_models.clone(),
            show_sensitive_content: self.show_sensitive_content,
            onboarding_complete: self.onboarding_complete,
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub primary_role: Option<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    pub agency_affiliation: Option<String>,
    pub company_affiliation: Option<String>,
    #[serde(default)]
    pub linked_agencies: Vec<String>,
    #[serde(default)]
    pub linked_companies: Vec<String>,
    #[serde(default)]
    pub linked_models: Vec<String>,
    #[serde(default)]
    pub show_sensitive_content: bool,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl UserInfo {
    /// Get display name, falling back to full name, then email.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.full_name
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or(&self.email)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Partial profile update merged onto the current user server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPatch {
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub roles: Option<Vec<String>>,
    pub primary_role: Option<String>,
    pub styles: Option<Vec<String>>,
    pub agency_affiliation: Option<String>,
    pub company_affiliation: Option<String>,
    pub linked_agencies: Option<Vec<String>>,
    pub linked_companies: Option<Vec<String>>,
    pub linked_models: Option<Vec<String>>,
    pub show_sensitive_content: Option<bool>,
    pub onboarding_complete: Option<bool>,
}

/// Pick a primary role that is guaranteed to be one of `roles`.
///
/// Keeps `primary` when it is still among the user's roles, otherwise
/// re-derives it as the first role. Empty roles yield `None`.
pub fn normalize_primary_role(roles: &[String], primary: Option<&str>) -> Option<String> {
    match primary {
        Some(p) if roles.iter().any(|r| r == p) => Some(p.to_string()),
        _ => roles.first().cloned(),
    }
}

/// Drop duplicate entries while keeping first-seen order.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_primary_role_kept_when_valid() {
        let roles = strings(&[ROLE_MODEL, ROLE_PHOTOGRAPHER]);
        assert_eq!(
            normalize_primary_role(&roles, Some(ROLE_PHOTOGRAPHER)),
            Some(ROLE_PHOTOGRAPHER.to_string())
        );
    }

    #[test]
    fn test_primary_role_rederived_when_stale() {
        let roles = strings(&[ROLE_MODEL]);
        assert_eq!(
            normalize_primary_role(&roles, Some(ROLE_AGENCY)),
            Some(ROLE_MODEL.to_string())
        );
        assert_eq!(normalize_primary_role(&roles, None), Some(ROLE_MODEL.to_string()));
        assert_eq!(normalize_primary_role(&[], Some(ROLE_AGENCY)), None);
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let deduped = dedup_preserving_order(strings(&["a", "b", "a", "c", "b"]));
        assert_eq!(deduped, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut user = UserInfo {
            id: "1".to_string(),
            email: "kai@exhibit.app".to_string(),
            full_name: Some("Kai Moreno".to_string()),
            display_name: Some("KM Studio".to_string()),
            avatar_url: None,
            bio: None,
            roles: Vec::new(),
            primary_role: None,
            styles: Vec::new(),
            agency_affiliation: None,
            company_affiliation: None,
            linked_agencies: Vec::new(),
            linked_companies: Vec::new(),
            linked_models: Vec::new(),
            show_sensitive_content: false,
            onboarding_complete: false,
        };
        assert_eq!(user.display_name(), "KM Studio");

        user.display_name = Some("  ".to_string());
        assert_eq!(user.display_name(), "Kai Moreno");

        user.full_name = None;
        assert_eq!(user.display_name(), "kai@exhibit.app");
    }
}
