//! # Client-side entity gateways
//!
//! Thin façades the UI talks to instead of calling server functions directly.
//! They own the two local stores — the Session Store cache of the signed-in
//! user and the moodboard — and the reconciliation that keeps local and
//! server state coherent:
//!
//! - [`UserGateway`] caches the session user and persists every profile merge
//!   back into the cache.
//! - [`save_profile`] resolves free-text affiliations and propagates the
//!   reciprocal link writes after the primary save is durable.
//! - [`MoodboardGateway`] projects posts into moodboard entries, mirrors
//!   saves to the server's saved-post records best-effort, and merges both
//!   sides into one view.
//! - [`load_communities`] applies the sample-data fallback policy.
//! - [`submit_post`] is the creation flow: validation and auto-trigger
//!   warnings happen here, before anything reaches the API.
//!
//! Stores are injected, never global, so every gateway runs against
//! [`store::MemoryStore`] in tests.

use dioxus::prelude::ServerFnError;
use serde_json::Value;
use thiserror::Error;

use store::{
    merge_moodboard_posts, KeyValueStore, Moodboard, MoodboardEntry, SessionStore,
};

use crate::affiliations::{plan_link_updates, relink, resolve_affiliation};
use crate::models::{
    auto_trigger_warnings, dedup_preserving_order, normalize_primary_role, Community,
    PostInfo, PostPayload, UserInfo, UserPatch, ROLE_AGENCY, ROLE_COMPANY,
};
use crate::sample_data::sample_communities;
use crate::query::Filter;

/// What a gateway operation can fail with.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The input was rejected before any API call was attempted. The message
    /// is user-facing.
    #[error("{0}")]
    Validation(String),
    /// A server function call failed; the transport error carries the status.
    #[error(transparent)]
    Request(#[from] ServerFnError),
}

/// Landing location after a successful login.
pub fn post_login_target(user: &UserInfo, from_url: Option<&str>) -> String {
    if !user.onboarding_complete {
        return "/onboarding".to_string();
    }
    from_url.unwrap_or("/feed").to_string()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// The current-user gateway: session cache in front of the remote record.
#[derive(Clone)]
pub struct UserGateway<S: KeyValueStore> {
    session: SessionStore<S>,
}

impl<S: KeyValueStore> UserGateway<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: SessionStore::new(store),
        }
    }

    /// The signed-in user. Served from the session cache when present; a
    /// cache miss falls through to the remote record and populates the
    /// cache. This is the only path that fills the cache outside of
    /// login/registration.
    pub async fn me(&self) -> Result<Option<UserInfo>, GatewayError> {
        if let Some(cached) = self.session.get::<UserInfo>().await {
            return Ok(Some(cached));
        }
        let user = crate::get_current_user().await?;
        if let Some(user) = &user {
            self.session.set(user).await;
        }
        Ok(user)
    }

    /// Merge a partial update onto the current user, persist the merged
    /// record into the session cache, and return it.
    pub async fn update_my_user_data(&self, patch: UserPatch) -> Result<UserInfo, GatewayError> {
        let merged = crate::update_current_user(patch).await?;
        self.session.set(&merged).await;
        Ok(merged)
    }

    /// Alias kept for call sites that use the short name; identical to
    /// [`Self::update_my_user_data`].
    pub async fn update(&self, patch: UserPatch) -> Result<UserInfo, GatewayError> {
        self.update_my_user_data(patch).await
    }

    /// Seed the cache after login/registration.
    pub async fn remember(&self, user: &UserInfo) {
        self.session.set(user).await;
    }

    /// Drop the cache. Always succeeds.
    pub async fn forget(&self) {
        self.session.clear().await;
    }
}

/// Save a profile edit, reconciling affiliation links on both sides.
///
/// The primary save always lands first. Reciprocal writes to the affiliated
/// accounts follow and are best-effort: a failure leaves the other account's
/// link stale, is logged, and is never surfaced to the editing user.
pub async fn save_profile<S: KeyValueStore>(
    gateway: &UserGateway<S>,
    mut patch: UserPatch,
) -> Result<UserInfo, GatewayError> {
    let current = gateway.me().await?.ok_or_else(|| {
        GatewayError::Validation("You need to be signed in to edit your profile".to_string())
    })?;

    if let Some(roles) = patch.roles.take() {
        let roles = dedup_preserving_order(roles);
        let requested = patch
            .primary_role
            .as_deref()
            .or(current.primary_role.as_deref());
        patch.primary_role = normalize_primary_role(&roles, requested);
        patch.roles = Some(roles);
    }

    let pool = crate::list_users().await.map_err(GatewayError::from)?;

    let agency_text = patch
        .agency_affiliation
        .as_deref()
        .or(current.agency_affiliation.as_deref());
    let company_text = patch
        .company_affiliation
        .as_deref()
        .or(current.company_affiliation.as_deref());

    let prev_agency = resolve_affiliation(current.agency_affiliation.as_deref(), ROLE_AGENCY, &pool)
        .map(|u| u.email.clone());
    let next_agency =
        resolve_affiliation(agency_text, ROLE_AGENCY, &pool).map(|u| u.email.clone());
    let prev_company =
        resolve_affiliation(current.company_affiliation.as_deref(), ROLE_COMPANY, &pool)
            .map(|u| u.email.clone());
    let next_company =
        resolve_affiliation(company_text, ROLE_COMPANY, &pool).map(|u| u.email.clone());

    patch.linked_agencies = Some(relink(
        &current.linked_agencies,
        prev_agency.as_deref(),
        next_agency.as_deref(),
    ));
    patch.linked_companies = Some(relink(
        &current.linked_companies,
        prev_company.as_deref(),
        next_company.as_deref(),
    ));

    let saved = gateway.update_my_user_data(patch).await?;

    let mut updates = plan_link_updates(prev_agency.as_deref(), next_agency.as_deref());
    updates.extend(plan_link_updates(prev_company.as_deref(), next_company.as_deref()));
    for update in updates {
        if let Err(err) =
            crate::set_model_link(update.target.clone(), saved.email.clone(), update.linked).await
        {
            tracing::error!(
                "reciprocal link update on {} failed; link left stale: {err}",
                update.target
            );
        }
    }

    Ok(saved)
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Validate and normalize a post before creation.
///
/// Auto-trigger warnings implied by the photography style are added here, in
/// the creation flow — storage never applies them. A validation failure means
/// the API call is not attempted.
pub fn prepare_post(mut payload: PostPayload) -> Result<PostPayload, GatewayError> {
    if payload.title.trim().is_empty() {
        return Err(GatewayError::Validation("A title is required".to_string()));
    }
    if payload.image_url.trim().is_empty() {
        return Err(GatewayError::Validation("An image is required".to_string()));
    }

    if let Some(style) = payload.photography_style.as_deref() {
        for warning in auto_trigger_warnings(style) {
            if !payload.trigger_warnings.iter().any(|w| w == warning) {
                payload.trigger_warnings.push(warning.to_string());
            }
        }
    }
    payload.tags = dedup_preserving_order(payload.tags);
    payload.trigger_warnings = dedup_preserving_order(payload.trigger_warnings);
    if !payload.trigger_warnings.is_empty() {
        payload.is_sensitive = 1;
    }
    Ok(payload)
}

/// The full creation flow: prepare, then persist, returning the stored
/// record.
pub async fn submit_post(payload: PostPayload) -> Result<PostInfo, GatewayError> {
    let payload = prepare_post(payload)?;
    Ok(crate::create_post(payload).await?)
}

// ---------------------------------------------------------------------------
// Moodboard
// ---------------------------------------------------------------------------

/// Project a post into the shape the moodboard caches.
pub fn project_post(post: &PostInfo) -> MoodboardEntry {
    MoodboardEntry {
        id: post.id.clone(),
        title: post.title.clone(),
        description: post.caption.clone().unwrap_or_default(),
        image_url: post.image_url.clone(),
        photographer_name: post
            .author_name
            .clone()
            .unwrap_or_else(|| post.created_by.clone()),
        created_date: post.created_date.clone(),
        tags: post.tags.clone(),
    }
}

/// The moodboard gateway: local-first saves mirrored to the server.
#[derive(Clone)]
pub struct MoodboardGateway<S: KeyValueStore> {
    board: Moodboard<S>,
}

impl<S: KeyValueStore> MoodboardGateway<S> {
    pub fn new(store: S) -> Self {
        Self {
            board: Moodboard::new(store),
        }
    }

    /// The underlying store, for observers.
    pub fn board(&self) -> &Moodboard<S> {
        &self.board
    }

    pub async fn local(&self) -> Vec<MoodboardEntry> {
        self.board.load().await
    }

    pub async fn is_saved(&self, post_id: &str) -> bool {
        self.board.contains(post_id).await
    }

    /// Save locally, then mirror to the server's saved-post records. The
    /// local save is already durable when the mirror fails.
    pub async fn save(&self, post: &PostInfo) -> Vec<MoodboardEntry> {
        let list = self.board.add(project_post(post)).await;
        if let Err(err) = crate::create_saved_post(post.id.clone()).await {
            tracing::warn!("saved post {} not mirrored to server: {err}", post.id);
        }
        list
    }

    /// Remove locally, then mirror the removal.
    pub async fn unsave(&self, post_id: &str) -> Vec<MoodboardEntry> {
        let list = self.board.remove(post_id).await;
        if let Err(err) = crate::remove_saved_post(post_id.to_string()).await {
            tracing::warn!("saved post {post_id} removal not mirrored to server: {err}");
        }
        list
    }

    /// The reconciled view: server-side saved posts merged with the local
    /// cache, local entries first and winning collisions. An unreachable
    /// server degrades to the local list.
    pub async fn merged(&self, user_email: &str) -> Vec<MoodboardEntry> {
        let local = self.local().await;
        match self.server_entries(user_email).await {
            Ok(server) => merge_moodboard_posts(&server, &local),
            Err(err) => {
                tracing::warn!("moodboard server merge skipped: {err}");
                local
            }
        }
    }

    async fn server_entries(&self, user_email: &str) -> Result<Vec<MoodboardEntry>, GatewayError> {
        let saved =
            crate::filter_saved_posts(Filter::new().field("user_email", user_email)).await?;
        if saved.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Value> = saved
            .iter()
            .map(|record| Value::String(record.post_id.clone()))
            .collect();
        let posts = crate::filter_posts(Filter::new().any_of("id", ids)).await?;
        Ok(posts.iter().map(project_post).collect())
    }
}

// ---------------------------------------------------------------------------
// Communities
// ---------------------------------------------------------------------------

/// Apply the sample-data fallback policy to a community list result.
///
/// With the flag set, a failure or an empty result is replaced by the static
/// reference list and never reaches the caller as an error. With the flag
/// unset, failures propagate and empty stays empty.
pub fn communities_or_fallback(
    result: Result<Vec<Community>, ServerFnError>,
    sample_data_enabled: bool,
) -> Result<Vec<Community>, ServerFnError> {
    match result {
        Ok(list) if !list.is_empty() => Ok(list),
        Ok(list) => {
            if sample_data_enabled {
                Ok(sample_communities())
            } else {
                Ok(list)
            }
        }
        Err(err) => {
            if sample_data_enabled {
                tracing::warn!("community list unavailable, using sample data: {err}");
                Ok(sample_communities())
            } else {
                Err(err)
            }
        }
    }
}

/// Fetch the community list, applying the fallback policy.
pub async fn load_communities(
    sample_data_enabled: bool,
) -> Result<Vec<Community>, GatewayError> {
    let result = crate::list_communities().await;
    communities_or_fallback(result, sample_data_enabled).map_err(GatewayError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> PostPayload {
        PostPayload {
            id: None,
            title: "T".to_string(),
            caption: String::new(),
            image_url: "u".to_string(),
            photography_style: Some("boudoir".to_string()),
            tags: Vec::new(),
            trigger_warnings: Vec::new(),
            tagged_people: Vec::new(),
            created_by: None,
            is_sensitive: 0,
        }
    }

    fn post(id: &str) -> PostInfo {
        PostInfo {
            id: id.to_string(),
            title: "Golden hour".to_string(),
            caption: Some("rooftop set".to_string()),
            image_url: "https://img.exhibit.app/p1.jpg".to_string(),
            photography_style: Some("portrait".to_string()),
            tags: vec!["portrait".to_string()],
            trigger_warnings: Vec::new(),
            tagged_people: Vec::new(),
            created_by: "kai.moreno@exhibit.app".to_string(),
            author_name: Some("Kai Moreno".to_string()),
            is_sensitive: 0,
            is_approved: 1,
            created_date: "2025-06-01T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_prepare_post_applies_auto_triggers() {
        let prepared = prepare_post(payload()).unwrap();
        assert!(prepared
            .trigger_warnings
            .iter()
            .any(|w| w == "artistic_nudity"));
        assert_eq!(prepared.is_sensitive, 1);
    }

    #[test]
    fn test_prepare_post_does_not_duplicate_existing_warning() {
        let mut input = payload();
        input.trigger_warnings = vec!["artistic_nudity".to_string()];
        let prepared = prepare_post(input).unwrap();
        assert_eq!(
            prepared
                .trigger_warnings
                .iter()
                .filter(|w| *w == "artistic_nudity")
                .count(),
            1
        );
    }

    #[test]
    fn test_prepare_post_rejects_missing_fields() {
        let mut input = payload();
        input.title = "  ".to_string();
        assert!(matches!(
            prepare_post(input),
            Err(GatewayError::Validation(_))
        ));

        let mut input = payload();
        input.image_url = String::new();
        assert!(matches!(
            prepare_post(input),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn test_project_post_is_a_subset() {
        let entry = project_post(&post("p1"));
        assert_eq!(entry.id, "p1");
        assert_eq!(entry.description, "rooftop set");
        assert_eq!(entry.photographer_name, "Kai Moreno");

        // Falls back to the author email when no name is known.
        let mut anonymous = post("p2");
        anonymous.author_name = None;
        assert_eq!(
            project_post(&anonymous).photographer_name,
            "kai.moreno@exhibit.app"
        );
    }

    #[test]
    fn test_communities_fallback_on_error_with_flag() {
        let out = communities_or_fallback(Err(ServerFnError::new("boom")), true).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_communities_error_propagates_without_flag() {
        assert!(communities_or_fallback(Err(ServerFnError::new("boom")), false).is_err());
    }

    #[test]
    fn test_communities_fallback_on_empty_only_with_flag() {
        assert!(!communities_or_fallback(Ok(Vec::new()), true)
            .unwrap()
            .is_empty());
        assert!(communities_or_fallback(Ok(Vec::new()), false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_communities_nonempty_result_passes_verbatim() {
        let listed = vec![Community {
            id: "c1".to_string(),
            name: "Portrait Collective".to_string(),
            category: "style".to_string(),
            description: None,
            member_count: 10,
        }];
        let out = communities_or_fallback(Ok(listed.clone()), true).unwrap();
        assert_eq!(out, listed);
    }

    #[test]
    fn test_post_login_target() {
        let mut user = UserInfo {
            id: "1".to_string(),
            email: "ava@exhibit.app".to_string(),
            full_name: None,
            display_name: None,
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
        assert_eq!(post_login_target(&user, Some("/feed")), "/onboarding");

        user.onboarding_complete = true;
        assert_eq!(post_login_target(&user, None), "/feed");
        assert_eq!(
            post_login_target(&user, Some("/communities")),
            "/communities"
        );
    }
}
