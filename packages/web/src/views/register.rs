//! Registration page view with email/password form.

use api::client::post_login_target;
use api::models::{ROLE_AGENCY, ROLE_COMPANY, ROLE_FAN, ROLE_MODEL, ROLE_PHOTOGRAPHER};
use dioxus::prelude::*;
use ui::{complete_login, redirect, use_auth, use_user_gateway};

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let gateway = use_user_gateway();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| ROLE_PHOTOGRAPHER.to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the feed
    if !auth().loading && auth().user.is_some() {
        redirect("/feed");
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);

            let n = full_name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p, n, role()).await {
                Ok(user) => {
                    let target = post_login_target(&user, None);
                    complete_login(auth, &gateway, user).await;
                    redirect(&target);
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
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Join Exhibit" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                select {
                    class: "form-input",
                    value: role(),
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                    option { value: ROLE_PHOTOGRAPHER, "I'm a photographer" }
                    option { value: ROLE_MODEL, "I'm a model" }
                    option { value: ROLE_AGENCY, "We're an agency" }
                    option { value: ROLE_COMPANY, "We're a company" }
                    option { value: ROLE_FAN, "I'm here to browse" }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "auth-footnote",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
