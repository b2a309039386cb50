//! Browse communities. With sample data enabled, an unreachable or empty
//! remote list falls back to the static reference set instead of erroring.

use dioxus::prelude::*;
use ui::Navbar;

use api::client::load_communities;

/// Demo environments keep this on so the page is never blank offline.
const SAMPLE_DATA_ENABLED: bool = true;

/// Communities page component.
#[component]
pub fn Communities() -> Element {
    let communities = use_resource(|| load_communities(SAMPLE_DATA_ENABLED));

    let content = match communities() {
        Some(Ok(list)) => rsx! {
            div {
                class: "community-list",
                {list.into_iter().map(|community| rsx! {
                    div {
                        key: "{community.id}",
                        class: "community-card",
                        h3 { "{community.name}" }
                        span { class: "community-category", "{community.category}" }
                        if let Some(description) = &community.description {
                            p { "{description}" }
                        }
                        p { class: "community-members", "{community.member_count} members" }
                    }
                })}
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "form-error", "Could not load communities: {err}" }
        },
        None => rsx! {
            p { class: "empty-note", "Loading..." }
        },
    };

    rsx! {
        Navbar {}
        div {
            class: "page communities-page",

            h1 { "Communities" }

            {content}
        }
    }
}
