//! Moodboard context: one shared gateway plus a signal kept current by the
//! store's update broadcasts.
//!
//! Any component that mutates the moodboard goes through the shared gateway,
//! so every observer (navbar badge, profile view) sees the new list without a
//! reload — the store notifies its subscribers synchronously after each
//! successful add or remove.

use api::{MoodboardGateway, PostInfo};
use dioxus::prelude::*;
use store::MoodboardEntry;

use crate::platform::{platform_store, PlatformStore};

/// Moodboard state shared across the app.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodboardState {
    pub entries: Vec<MoodboardEntry>,
    pub loading: bool,
}

/// Get the current moodboard state.
pub fn use_moodboard() -> Signal<MoodboardState> {
    use_context::<Signal<MoodboardState>>()
}

/// Get the shared moodboard gateway.
pub fn use_moodboard_gateway() -> MoodboardGateway<PlatformStore> {
    use_context::<MoodboardGateway<PlatformStore>>()
}

/// Provider component that owns the moodboard gateway and its state signal.
#[component]
pub fn MoodboardProvider(children: Element) -> Element {
    let gateway = use_context_provider(|| MoodboardGateway::new(platform_store()));
    let state = use_signal(|| MoodboardState {
        entries: Vec::new(),
        loading: true,
    });

    // Subscribe once; the store calls back after every mutation.
    use_hook(|| {
        gateway.board().subscribe(move |entries| {
            let mut state = state;
            state.set(MoodboardState {
                entries: entries.to_vec(),
                loading: false,
            });
        });
    });

    // Initial load from storage.
    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let entries = gateway.local().await;
            let mut state = state;
            state.set(MoodboardState {
                entries,
                loading: false,
            });
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Toggle button that saves a post to the moodboard or removes it.
#[component]
pub fn SaveButton(post: PostInfo, #[props(default = "".to_string())] class: String) -> Element {
    let state = use_moodboard();
    let gateway = use_moodboard_gateway();

    let saved = state().entries.iter().any(|e| e.id == post.id);

    let onclick = move |_| {
        let gateway = gateway.clone();
        let post = post.clone();
        async move {
            if gateway.is_saved(&post.id).await {
                gateway.unsave(&post.id).await;
            } else {
                gateway.save(&post).await;
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            if saved { "Saved" } else { "Save" }
        }
    }
}
