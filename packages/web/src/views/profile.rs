//! Profile editing. Saving resolves the free-text agency/company affiliations
//! and keeps the reciprocal linked-talent sets in sync.

use api::client::save_profile;
use api::models::{ROLE_AGENCY, ROLE_COMPANY};
use api::UserPatch;
use dioxus::prelude::*;
use ui::{use_auth, use_user_gateway, AuthState, Navbar};

/// Profile page component.
#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();
    let gateway = use_user_gateway();
    let mut display_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut styles = use_signal(String::new);
    let mut agency = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut show_sensitive = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut seeded = use_signal(|| false);

    // Seed the form once the user record is available.
    use_effect(move || {
        if seeded() {
            return;
        }
        if let Some(user) = auth().user {
            display_name.set(user.display_name.unwrap_or_default());
            bio.set(user.bio.unwrap_or_default());
            styles.set(user.styles.join(", "));
            agency.set(user.agency_affiliation.unwrap_or_default());
            company.set(user.company_affiliation.unwrap_or_default());
            show_sensitive.set(user.show_sensitive_content);
            seeded.set(true);
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            message.set(None);
            loading.set(true);

            let patch = UserPatch {
                display_name: Some(display_name().trim().to_string()),
                bio: Some(bio().trim().to_string()),
                styles: Some(
                    styles()
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                ),
                agency_affiliation: Some(agency().trim().to_string()),
                company_affiliation: Some(company().trim().to_string()),
                show_sensitive_content: Some(show_sensitive()),
                ..Default::default()
            };

            match save_profile(&gateway, patch).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    message.set(Some("Profile saved".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let user = auth().user;

    rsx! {
        Navbar {}
        div {
            class: "page profile-page",

            h1 { "Profile" }

            if let Some(user) = &user {
                p { class: "page-subtitle", "{user.email}" }

                if user.has_role(ROLE_AGENCY) || user.has_role(ROLE_COMPANY) {
                    div {
                        class: "linked-talent",
                        h2 { "Linked talent" }
                        if user.linked_models.is_empty() {
                            p { class: "empty-note", "No models have linked to you yet." }
                        }
                        ul {
                            for model in user.linked_models.clone() {
                                li { "{model}" }
                            }
                        }
                    }
                }
            }

            form {
                onsubmit: handle_save,
                class: "stacked-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                if let Some(msg) = message() {
                    div { class: "form-success", "{msg}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Display name",
                    value: display_name(),
                    oninput: move |evt: FormEvent| display_name.set(evt.value()),
                }

                textarea {
                    class: "form-input",
                    placeholder: "Bio",
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Styles, comma separated",
                    value: styles(),
                    oninput: move |evt: FormEvent| styles.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Agency affiliation",
                    value: agency(),
                    oninput: move |evt: FormEvent| agency.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Company affiliation",
                    value: company(),
                    oninput: move |evt: FormEvent| company.set(evt.value()),
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
                    if loading() { "Saving..." } else { "Save profile" }
                }
            }
        }
    }
}
