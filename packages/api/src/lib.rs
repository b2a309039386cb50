//! # API crate — shared fullstack server functions for Exhibit
//!
//! This crate is the backbone of the Exhibit fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`affiliations`] | — | Free-text agency/company resolution and reciprocal link planning |
//! | [`auth`] | partly `server` | Demo credential roster, Argon2 password hashing, session keys |
//! | [`client`] | — | Entity gateways: session-cached user, moodboard reconciliation, creation flow, sample-data fallback |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows and their client-safe projections |
//! | [`query`] | — | The declarative filter engine shared by every `/filter` endpoint |
//! | [`sample_data`] | — | Static community reference data |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as a
//! thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `login`, `register`, `logout`, `get_current_user`
//! - **Users**: `update_current_user`, `list_users`, `set_model_link`
//! - **Posts**: `filter_posts`, `create_post`
//! - **Engagement**: `filter_likes`, `create_like`, `remove_like`,
//!   `filter_saved_posts`, `create_saved_post`, `remove_saved_post`
//! - **Communities**: `list_communities`
//! - **Uploads**: `upload_image`
//!
//! Transport failures surface uniformly as [`ServerFnError`]; an empty result
//! is an empty collection, never an error. Nothing here retries.

use dioxus::prelude::*;

pub mod affiliations;
pub mod auth;
pub mod client;
pub mod db;
pub mod models;
pub mod query;
pub mod sample_data;

pub use client::{GatewayError, MoodboardGateway, UserGateway};
pub use models::{Community, Like, PostInfo, PostPayload, SavedPost, TaggedPerson, UserInfo, UserPatch};
pub use query::Filter;

#[cfg(feature = "server")]
use models::{Post, User, ENGAGEMENT_FILTER_FIELDS, POST_FILTER_FIELDS, USER_FILTER_FIELDS};

/// Resolve the session to a full user row, or fail as unauthenticated.
#[cfg(feature = "server")]
async fn current_user_row(
    session: &tower_sessions::Session,
) -> Result<User, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// email → preferred display name, for labelling posts with their author.
#[cfg(feature = "server")]
async fn author_name_map(
    pool: &sqlx::PgPool,
) -> Result<std::collections::HashMap<String, String>, ServerFnError> {
    let rows: Vec<(String, Option<String>, Option<String>)> =
        sqlx::query_as("SELECT email, display_name, full_name FROM users")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(email, display_name, full_name)| {
            let name = display_name
                .filter(|s| !s.trim().is_empty())
                .or(full_name)
                .unwrap_or_else(|| email.clone());
            (email, name)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/users/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with an email and secret.
///
/// The identifier is matched against the demo roster by case-insensitive
/// email with an exact secret comparison; self-registered accounts verify
/// against their stored password hash instead.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(identifier: String, secret: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = identifier.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE lower(email) = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = if auth::match_credentials(&identifier, &secret).is_some() {
        user.ok_or_else(|| ServerFnError::new("Demo account is not provisioned"))?
    } else {
        let Some(user) = user else {
            return Err(ServerFnError::new("Invalid email or password"));
        };
        let Some(ref hash) = user.password_hash else {
            return Err(ServerFnError::new("Invalid email or password"));
        };
        let valid = auth::verify_password(&secret, hash).map_err(|e| ServerFnError::new(e))?;
        if !valid {
            return Err(ServerFnError::new("Invalid email or password"));
        }
        user
    };

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(identifier: String, secret: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new account. The created record is marked onboarded and the
/// session is populated, so the caller lands straight in the app.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let full_name = full_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if full_name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if role.trim().is_empty() {
        return Err(ServerFnError::new("Pick a role to continue"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE lower(email) = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, full_name, roles, primary_role, onboarding_complete, password_hash)
         VALUES ($1, $2, $3, $4, TRUE, $5) RETURNING *",
    )
    .bind(&email)
    .bind(&full_name)
    .bind(vec![role.clone()])
    .bind(&role)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Merge a partial update onto the current user and return the stored
/// record. The primary role is re-derived so it is always one of the roles.
#[cfg(feature = "server")]
#[post("/api/users/me", session: tower_sessions::Session)]
pub async fn update_current_user(patch: UserPatch) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use models::{dedup_preserving_order, normalize_primary_role};

    let mut user = current_user_row(&session).await?;

    if let Some(v) = patch.full_name {
        user.full_name = Some(v);
    }
    if let Some(v) = patch.display_name {
        user.display_name = Some(v);
    }
    if let Some(v) = patch.avatar_url {
        user.avatar_url = Some(v);
    }
    if let Some(v) = patch.bio {
        user.bio = Some(v);
    }
    if let Some(v) = patch.roles {
        user.roles = dedup_preserving_order(v);
    }
    if let Some(v) = patch.primary_role {
        user.primary_role = Some(v);
    }
    if let Some(v) = patch.styles {
        user.styles = dedup_preserving_order(v);
    }
    if let Some(v) = patch.agency_affiliation {
        user.agency_affiliation = Some(v);
    }
    if let Some(v) = patch.company_affiliation {
        user.company_affiliation = Some(v);
    }
    if let Some(v) = patch.linked_agencies {
        user.linked_agencies = dedup_preserving_order(v);
    }
    if let Some(v) = patch.linked_companies {
        user.linked_companies = dedup_preserving_order(v);
    }
    if let Some(v) = patch.linked_models {
        user.linked_models = dedup_preserving_order(v);
    }
    if let Some(v) = patch.show_sensitive_content {
        user.show_sensitive_content = v;
    }
    if let Some(v) = patch.onboarding_complete {
        user.onboarding_complete = v;
    }
    user.primary_role = normalize_primary_role(&user.roles, user.primary_role.as_deref());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: User = sqlx::query_as(
        "UPDATE users SET
            full_name = $2, display_name = $3, avatar_url = $4, bio = $5,
            roles = $6, primary_role = $7, styles = $8,
            agency_affiliation = $9, company_affiliation = $10,
            linked_agencies = $11, linked_companies = $12, linked_models = $13,
            show_sensitive_content = $14, onboarding_complete = $15,
            updated_at = NOW()
         WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .bind(&user.full_name)
    .bind(&user.display_name)
    .bind(&user.avatar_url)
    .bind(&user.bio)
    .bind(&user.roles)
    .bind(&user.primary_role)
    .bind(&user.styles)
    .bind(&user.agency_affiliation)
    .bind(&user.company_affiliation)
    .bind(&user.linked_agencies)
    .bind(&user.linked_companies)
    .bind(&user.linked_models)
    .bind(user.show_sensitive_content)
    .bind(user.onboarding_complete)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/me")]
pub async fn update_current_user(patch: UserPatch) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List all users — the resolution pool for affiliation matching and name
/// search. Small community, no pagination in scope.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY created_at")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(|u| u.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Filter users with the shared engine. Only identity fields are
/// filterable; everything else is ignored.
#[cfg(feature = "server")]
#[post("/api/users/filter")]
pub async fn filter_users(filter: Filter) -> Result<Vec<UserInfo>, ServerFnError> {
    let users = list_users().await?;
    Ok(query::apply_filter(&users, &filter, USER_FILTER_FIELDS))
}

#[cfg(not(feature = "server"))]
#[post("/api/users/filter")]
pub async fn filter_users(filter: Filter) -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Add or remove a model on an agency/company account's `linked_models`.
/// Idempotent: the set never holds duplicates and removing an absent entry
/// is a no-op.
#[cfg(feature = "server")]
#[post("/api/users/linked-models")]
pub async fn set_model_link(
    target_email: String,
    model_email: String,
    linked: bool,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let target: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&target_email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(target) = target else {
        return Err(ServerFnError::new("No such account"));
    };

    let models = affiliations::apply_link(&target.linked_models, &model_email, linked);

    sqlx::query("UPDATE users SET linked_models = $2, updated_at = NOW() WHERE id = $1")
        .bind(target.id)
        .bind(&models)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/linked-models")]
pub async fn set_model_link(
    target_email: String,
    model_email: String,
    linked: bool,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Posts matching the filter, most recent first.
#[cfg(feature = "server")]
#[post("/api/posts/filter")]
pub async fn filter_posts(filter: Filter) -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<Post> = sqlx::query_as("SELECT * FROM posts ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let names = author_name_map(pool).await?;
    let posts: Vec<PostInfo> = rows.iter().map(|r| r.to_info(&names)).collect();

    Ok(query::apply_filter(&posts, &filter, POST_FILTER_FIELDS))
}

#[cfg(not(feature = "server"))]
#[post("/api/posts/filter")]
pub async fn filter_posts(filter: Filter) -> Result<Vec<PostInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a post. Assigns an id when the payload carries none, defaults the
/// author to the session user, and returns the record as stored — one
/// INSERT .. RETURNING, so the caller sees either a complete post or an
/// error.
#[cfg(feature = "server")]
#[post("/api/posts", session: tower_sessions::Session)]
pub async fn create_post(payload: PostPayload) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;

    let created_by = match payload.created_by.filter(|s| !s.trim().is_empty()) {
        Some(email) => email,
        None => current_user_row(&session).await?.email,
    };

    let id = payload
        .id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let caption = Some(payload.caption).filter(|s| !s.trim().is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Post = sqlx::query_as(
        "INSERT INTO posts
            (id, title, caption, image_url, photography_style, tags,
             trigger_warnings, tagged_people, created_by, is_sensitive, is_approved)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 1)
         RETURNING *",
    )
    .bind(&id)
    .bind(&payload.title)
    .bind(&caption)
    .bind(&payload.image_url)
    .bind(&payload.photography_style)
    .bind(&payload.tags)
    .bind(&payload.trigger_warnings)
    .bind(sqlx::types::Json(payload.tagged_people))
    .bind(&created_by)
    .bind(payload.is_sensitive)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let names = author_name_map(pool).await?;
    Ok(row.to_info(&names))
}

#[cfg(not(feature = "server"))]
#[post("/api/posts")]
pub async fn create_post(payload: PostPayload) -> Result<PostInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Likes and saved posts
// ---------------------------------------------------------------------------

/// Like records matching the filter. Read-only.
#[cfg(feature = "server")]
#[post("/api/likes/filter")]
pub async fn filter_likes(filter: Filter) -> Result<Vec<Like>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<Like> = sqlx::query_as("SELECT id, post_id, user_email FROM likes")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(query::apply_filter(&rows, &filter, ENGAGEMENT_FILTER_FIELDS))
}

#[cfg(not(feature = "server"))]
#[post("/api/likes/filter")]
pub async fn filter_likes(filter: Filter) -> Result<Vec<Like>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/likes", session: tower_sessions::Session)]
pub async fn create_like(post_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = current_user_row(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO likes (post_id, user_email) VALUES ($1, $2)
         ON CONFLICT (post_id, user_email) DO NOTHING",
    )
    .bind(&post_id)
    .bind(&user.email)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/likes")]
pub async fn create_like(post_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/likes/remove", session: tower_sessions::Session)]
pub async fn remove_like(post_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = current_user_row(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_email = $2")
        .bind(&post_id)
        .bind(&user.email)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/likes/remove")]
pub async fn remove_like(post_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Saved-post records matching the filter. Read-only.
#[cfg(feature = "server")]
#[post("/api/saved-posts/filter")]
pub async fn filter_saved_posts(filter: Filter) -> Result<Vec<SavedPost>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<SavedPost> =
        sqlx::query_as("SELECT id, post_id, user_email FROM saved_posts")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(query::apply_filter(&rows, &filter, ENGAGEMENT_FILTER_FIELDS))
}

#[cfg(not(feature = "server"))]
#[post("/api/saved-posts/filter")]
pub async fn filter_saved_posts(filter: Filter) -> Result<Vec<SavedPost>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/saved-posts", session: tower_sessions::Session)]
pub async fn create_saved_post(post_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = current_user_row(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO saved_posts (post_id, user_email) VALUES ($1, $2)
         ON CONFLICT (post_id, user_email) DO NOTHING",
    )
    .bind(&post_id)
    .bind(&user.email)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/saved-posts")]
pub async fn create_saved_post(post_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/saved-posts/remove", session: tower_sessions::Session)]
pub async fn remove_saved_post(post_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = current_user_row(&session).await?;
    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM saved_posts WHERE post_id = $1 AND user_email = $2")
        .bind(&post_id)
        .bind(&user.email)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/saved-posts/remove")]
pub async fn remove_saved_post(post_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Communities
// ---------------------------------------------------------------------------

/// The community reference list, largest first.
#[cfg(feature = "server")]
#[get("/api/communities")]
pub async fn list_communities() -> Result<Vec<Community>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<Community> = sqlx::query_as(
        "SELECT id, name, category, description, member_count
         FROM communities ORDER BY member_count DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows)
}

#[cfg(not(feature = "server"))]
#[get("/api/communities")]
pub async fn list_communities() -> Result<Vec<Community>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

/// Store an uploaded image and return the URL path it is served under.
#[cfg(feature = "server")]
#[post("/api/uploads")]
pub async fn upload_image(file_name: String, data: Vec<u8>) -> Result<String, ServerFnError> {
    if data.is_empty() {
        return Err(ServerFnError::new("Empty upload"));
    }

    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let stored_name = format!("{}-{}", uuid::Uuid::new_v4(), safe);

    let dir = std::env::var("EXHIBIT_UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    std::fs::create_dir_all(&dir).map_err(|e| ServerFnError::new(e.to_string()))?;
    std::fs::write(std::path::Path::new(&dir).join(&stored_name), &data)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(format!("/uploads/{stored_name}"))
}

#[cfg(not(feature = "server"))]
#[post("/api/uploads")]
pub async fn upload_image(file_name: String, data: Vec<u8>) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
