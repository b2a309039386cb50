//! This crate contains the shared UI state for the workspace: the auth and
//! moodboard context providers and the components built on them.

mod platform;
pub use platform::{platform_store, PlatformStore};

mod auth;
pub use auth::{
    complete_login, redirect, sign_out, use_auth, use_user_gateway, AuthProvider, AuthState,
    LogoutButton,
};

mod moodboard;
pub use moodboard::{
    use_moodboard, use_moodboard_gateway, MoodboardProvider, MoodboardState, SaveButton,
};

mod navbar;
pub use navbar::Navbar;
