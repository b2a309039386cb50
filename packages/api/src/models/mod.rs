//! Data models for the application.

mod community;
mod engagement;
mod post;
mod user;

pub use community::{Community, COMMUNITY_CATEGORIES};
pub use engagement::{Like, SavedPost, ENGAGEMENT_FILTER_FIELDS};
pub use post::{
    auto_trigger_warnings, PostInfo, PostPayload, TaggedPerson, POST_FILTER_FIELDS,
};
#[cfg(feature = "server")]
pub use post::Post;
pub use user::{
    dedup_preserving_order, normalize_primary_role, UserInfo, UserPatch, ROLE_AGENCY,
    ROLE_COMPANY, ROLE_FAN, ROLE_MODEL, ROLE_PHOTOGRAPHER, USER_FILTER_FIELDS,
};
#[cfg(feature = "server")]
pub use user::User;
