//! Login page view with the demo credential form.

use api::client::post_login_target;
use dioxus::prelude::*;
use ui::{complete_login, redirect, use_auth, use_user_gateway};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let gateway = use_user_gateway();
    let mut identifier = use_signal(String::new);
    let mut secret = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the feed
    if !auth().loading && auth().user.is_some() {
        redirect("/feed");
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match api::login(identifier(), secret()).await {
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

            h1 { class: "auth-title", "Exhibit" }
            p { class: "auth-subtitle", "Sign in to share and collect work" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: identifier(),
                    oninput: move |evt: FormEvent| identifier.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: secret(),
                    oninput: move |evt: FormEvent| secret.set(evt.value()),
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p { class: "auth-footnote",
                "Demo accounts use the exhibit-demo-* passwords."
            }
            p { class: "auth-footnote",
                "New here? "
                a { href: "/register", "Create an account" }
            }
        }
    }
}
