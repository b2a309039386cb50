use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::moodboard::use_moodboard;
use crate::LogoutButton;

/// Top navigation: section links, the moodboard badge, and sign-out.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let moodboard = use_moodboard();

    let saved_count = moodboard().entries.len();

    rsx! {
        div {
            class: "navbar",
            a { class: "navbar-brand", href: "/feed", "Exhibit" }
            a { href: "/feed", "Feed" }
            a { href: "/posts/new", "Share" }
            a { href: "/communities", "Communities" }
            a { href: "/moodboard",
                if saved_count > 0 {
                    "Moodboard ({saved_count})"
                } else {
                    "Moodboard"
                }
            }
            a { href: "/profile", "Profile" }
            if let Some(user) = auth().user {
                span { class: "navbar-user", "{user.display_name()}" }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
