//! Onboarding: pick roles and styles before entering the app.

use api::client::save_profile;
use api::models::{ROLE_AGENCY, ROLE_COMPANY, ROLE_FAN, ROLE_MODEL, ROLE_PHOTOGRAPHER};
use api::UserPatch;
use dioxus::prelude::*;
use ui::{redirect, use_auth, use_user_gateway, AuthState};

const STYLE_CHOICES: &[&str] = &[
    "portrait",
    "editorial",
    "street",
    "fine_art",
    "boudoir",
    "cosplay",
    "landscape",
];

/// Onboarding page component.
#[component]
pub fn Onboarding() -> Element {
    let mut auth = use_auth();
    let gateway = use_user_gateway();
    let mut roles = use_signal(Vec::<String>::new);
    let mut styles = use_signal(Vec::<String>::new);
    let mut show_sensitive = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let toggle = move |list: &mut Signal<Vec<String>>, value: String| {
        let mut current = list();
        if let Some(idx) = current.iter().position(|v| *v == value) {
            current.remove(idx);
        } else {
            current.push(value);
        }
        list.set(current);
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);

            if roles().is_empty() {
                error.set(Some("Pick at least one role".to_string()));
                return;
            }

            loading.set(true);
            let patch = UserPatch {
                roles: Some(roles()),
                styles: Some(styles()),
                show_sensitive_content: Some(show_sensitive()),
                onboarding_complete: Some(true),
                ..Default::default()
            };

            match save_profile(&gateway, patch).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    redirect("/feed");
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page onboarding-page",

            h1 { "Welcome to Exhibit" }
            p { class: "page-subtitle", "Tell the community what you do." }

            form {
                onsubmit: handle_save,
                class: "stacked-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                fieldset {
                    legend { "Your roles" }
                    for role in [ROLE_PHOTOGRAPHER, ROLE_MODEL, ROLE_AGENCY, ROLE_COMPANY, ROLE_FAN] {
                        label {
                            class: "check-option",
                            input {
                                r#type: "checkbox",
                                checked: roles().iter().any(|r| r == role),
                                onchange: move |_| toggle(&mut roles, role.to_string()),
                            }
                            "{role}"
                        }
                    }
                }

                fieldset {
                    legend { "Styles you work in" }
                    for style in STYLE_CHOICES {
                        label {
                            class: "check-option",
                            input {
                                r#type: "checkbox",
                                checked: styles().iter().any(|s| s == style),
                                onchange: move |_| toggle(&mut styles, style.to_string()),
                            }
                            "{style}"
                        }
                    }
                }

                label {
                    class: "check-option",
                    input {
                        r#type: "checkbox",
                        checked: show_sensitive(),
                        onchange: move |_| show_sensitive.set(!show_sensitive()),
                    }
                    "Show content marked sensitive"
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Enter Exhibit" }
                }
            }
        }
    }
}
