//! The main feed: approved posts, most recent first, with like and save
//! actions. Sensitive posts are hidden unless the viewer opted in.

use std::collections::HashSet;

use api::{Filter, PostInfo};
use dioxus::prelude::*;
use ui::{use_auth, Navbar, SaveButton};

/// Feed page component.
#[component]
pub fn Feed() -> Element {
    let auth = use_auth();

    let posts = use_resource(|| async {
        api::filter_posts(Filter::new().field("is_approved", 1)).await
    });

    let liked = use_resource(move || {
        let user = auth().user;
        async move {
            let Some(user) = user else {
                return HashSet::new();
            };
            match api::filter_likes(Filter::new().field("user_email", user.email.as_str())).await
            {
                Ok(likes) => likes.into_iter().map(|l| l.post_id).collect(),
                Err(err) => {
                    tracing::warn!("could not load likes: {err}");
                    HashSet::new()
                }
            }
        }
    });

    let show_sensitive = auth()
        .user
        .map(|u| u.show_sensitive_content)
        .unwrap_or(false);

    let content = match posts() {
        Some(Ok(list)) => {
            let visible: Vec<PostInfo> = list
                .into_iter()
                .filter(|p| show_sensitive || p.is_sensitive == 0)
                .collect();
            let liked_ids = liked().unwrap_or_default();
            if visible.is_empty() {
                rsx! {
                    p { class: "empty-note", "Nothing here yet. Share the first post." }
                }
            } else {
                rsx! {
                    div {
                        class: "post-grid",
                        {visible.into_iter().map(|post| {
                            let initially_liked = liked_ids.contains(&post.id);
                            let key = post.id.clone();
                            rsx! {
                                PostCard {
                                    key: "{key}",
                                    post,
                                    initially_liked,
                                }
                            }
                        })}
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            p { class: "form-error", "Could not load the feed: {err}" }
        },
        None => rsx! {
            p { class: "empty-note", "Loading..." }
        },
    };

    rsx! {
        Navbar {}
        div {
            class: "page feed-page",
            {content}
        }
    }
}

/// One post in the grid.
#[component]
fn PostCard(post: PostInfo, initially_liked: bool) -> Element {
    let mut liked = use_signal(move || initially_liked);

    let post_id = post.id.clone();
    let toggle_like = move |_| {
        let post_id = post_id.clone();
        async move {
            let result = if liked() {
                api::remove_like(post_id).await
            } else {
                api::create_like(post_id).await
            };
            match result {
                Ok(()) => liked.set(!liked()),
                Err(err) => tracing::warn!("like toggle failed: {err}"),
            }
        }
    };

    rsx! {
        div {
            class: "post-card",
            img { class: "post-image", src: "{post.image_url}", alt: "{post.title}" }
            div {
                class: "post-body",
                h3 { "{post.title}" }
                if let Some(name) = &post.author_name {
                    p { class: "post-author", "by {name}" }
                }
                if !post.trigger_warnings.is_empty() {
                    p { class: "post-warnings", "CW: {post.trigger_warnings.join(\", \")}" }
                }
                div {
                    class: "post-actions",
                    button {
                        class: "like-button",
                        onclick: toggle_like,
                        if liked() { "Liked" } else { "Like" }
                    }
                    SaveButton { post: post.clone(), class: "save-button" }
                }
            }
        }
    }
}
