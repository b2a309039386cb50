//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the signed-in-user signal and the session-cached
//! [`UserGateway`]. The gateway serves `me()` from the local session cache
//! first, so a reload shows the profile immediately and the remote fetch only
//! runs on a cache miss.

use api::{UserGateway, UserInfo};
use dioxus::prelude::*;

use crate::platform::{platform_store, PlatformStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared user gateway (session-cached profile access).
pub fn use_user_gateway() -> UserGateway<PlatformStore> {
    use_context::<UserGateway<PlatformStore>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let gateway = use_context_provider(|| UserGateway::new(platform_store()));
    let mut auth_state = use_signal(AuthState::default);

    // Resolve the current user on mount: cache first, then remote.
    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match gateway.me().await {
                Ok(user) => auth_state.set(AuthState {
                    user,
                    loading: false,
                }),
                Err(err) => {
                    tracing::warn!("could not resolve current user: {err}");
                    auth_state.set(AuthState {
                        user: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Seed the session cache and auth state after a successful login or
/// registration.
pub async fn complete_login(
    mut auth: Signal<AuthState>,
    gateway: &UserGateway<PlatformStore>,
    user: UserInfo,
) {
    gateway.remember(&user).await;
    auth.set(AuthState {
        user: Some(user),
        loading: false,
    });
}

/// Clear the session unconditionally and route to the login page. The remote
/// logout is best-effort; its outcome never blocks the local sign-out.
pub async fn sign_out(mut auth: Signal<AuthState>, gateway: &UserGateway<PlatformStore>) {
    if let Err(err) = api::logout().await {
        tracing::warn!("remote logout failed, clearing local session anyway: {err}");
    }
    gateway.forget().await;
    auth.set(AuthState {
        user: None,
        loading: false,
    });
    redirect("/login");
}

/// Navigate the browser to a path.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate to {path}");
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let gateway = use_user_gateway();

    let onclick = move |_| {
        let gateway = gateway.clone();
        async move {
            sign_out(auth, &gateway).await;
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
