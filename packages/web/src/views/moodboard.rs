//! The moodboard view: the local cache merged with the server's saved-post
//! records. Works offline — an unreachable server just shows the local list.

use dioxus::prelude::*;
use store::MoodboardEntry;
use ui::{use_auth, use_moodboard_gateway, Navbar};

/// Moodboard page component.
#[component]
pub fn Moodboard() -> Element {
    let auth = use_auth();
    let gateway = use_moodboard_gateway();

    let merge_gateway = gateway.clone();
    let mut merged = use_resource(move || {
        let gateway = merge_gateway.clone();
        let user = auth().user;
        async move {
            match user {
                Some(user) => gateway.merged(&user.email).await,
                None => gateway.local().await,
            }
        }
    });

    let content = match merged() {
        Some(entries) if entries.is_empty() => rsx! {
            p { class: "empty-note", "Save posts from the feed to collect them here." }
        },
        Some(entries) => rsx! {
            div {
                class: "post-grid",
                {entries.into_iter().map(|entry| {
                    let gateway = gateway.clone();
                    let id = entry.id.clone();
                    let on_remove = move |_| {
                        let gateway = gateway.clone();
                        let id = id.clone();
                        spawn(async move {
                            gateway.unsave(&id).await;
                            merged.restart();
                        });
                    };
                    let key = entry.id.clone();
                    rsx! {
                        MoodboardCard {
                            key: "{key}",
                            entry,
                            on_remove,
                        }
                    }
                })}
            }
        },
        None => rsx! {
            p { class: "empty-note", "Loading..." }
        },
    };

    rsx! {
        Navbar {}
        div {
            class: "page moodboard-page",

            h1 { "Moodboard" }

            {content}
        }
    }
}

/// One saved entry.
#[component]
fn MoodboardCard(entry: MoodboardEntry, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "post-card",
            img { class: "post-image", src: "{entry.image_url}", alt: "{entry.title}" }
            div {
                class: "post-body",
                h3 { "{entry.title}" }
                if !entry.photographer_name.is_empty() {
                    p { class: "post-author", "by {entry.photographer_name}" }
                }
                if !entry.description.is_empty() {
                    p { class: "post-caption", "{entry.description}" }
                }
                button {
                    class: "remove-button",
                    onclick: move |_| on_remove.call(()),
                    "Remove"
                }
            }
        }
    }
}
