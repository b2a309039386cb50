//! Share a new post. Validation and auto-trigger warnings are applied by the
//! creation flow before anything reaches the API.

use api::client::submit_post;
use api::models::TaggedPerson;
use api::PostPayload;
use dioxus::prelude::*;
use ui::{redirect, Navbar};

const STYLE_OPTIONS: &[&str] = &[
    "portrait",
    "editorial",
    "street",
    "fine_art",
    "fine_art_nude",
    "boudoir",
    "dark_art",
    "gothic",
    "horror",
    "cosplay",
    "landscape",
];

/// New-post page component.
#[component]
pub fn NewPost() -> Element {
    let mut title = use_signal(String::new);
    let mut caption = use_signal(String::new);
    let mut style = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut model_name = use_signal(String::new);
    let mut model_instagram = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_upload = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();

        uploading.set(true);
        error.set(None);
        let Ok(bytes) = file.read_bytes().await else {
            uploading.set(false);
            error.set(Some("Could not read the selected file".to_string()));
            return;
        };

        match api::upload_image(name, bytes.to_vec()).await {
            Ok(file_url) => image_url.set(file_url),
            Err(err) => error.set(Some(err.to_string())),
        }
        uploading.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let tagged_people = if model_name().trim().is_empty() {
                Vec::new()
            } else {
                vec![TaggedPerson {
                    name: model_name().trim().to_string(),
                    role: "model".to_string(),
                    instagram: model_instagram().trim().to_string(),
                }]
            };

            let payload = PostPayload {
                id: None,
                title: title(),
                caption: caption(),
                image_url: image_url(),
                photography_style: Some(style()).filter(|s| !s.is_empty()),
                tags: tags()
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
                trigger_warnings: Vec::new(),
                tagged_people,
                created_by: None,
                is_sensitive: 0,
            };

            match submit_post(payload).await {
                Ok(_) => redirect("/feed"),
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        Navbar {}
        div {
            class: "page new-post-page",

            h1 { "Share work" }

            form {
                onsubmit: handle_submit,
                class: "stacked-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                textarea {
                    class: "form-input",
                    placeholder: "Caption",
                    value: caption(),
                    oninput: move |evt: FormEvent| caption.set(evt.value()),
                }

                input {
                    r#type: "file",
                    accept: "image/*",
                    onchange: handle_upload,
                }
                if uploading() {
                    p { class: "empty-note", "Uploading..." }
                } else if !image_url().is_empty() {
                    img { class: "upload-preview", src: "{image_url}" }
                }

                select {
                    class: "form-input",
                    value: style(),
                    onchange: move |evt: FormEvent| style.set(evt.value()),
                    option { value: "", "Photography style" }
                    for choice in STYLE_OPTIONS {
                        option { value: *choice, "{choice}" }
                    }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Tags, comma separated",
                    value: tags(),
                    oninput: move |evt: FormEvent| tags.set(evt.value()),
                }

                fieldset {
                    legend { "Tag a collaborator" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Name",
                        value: model_name(),
                        oninput: move |evt: FormEvent| model_name.set(evt.value()),
                    }
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Instagram (optional)",
                        value: model_instagram(),
                        oninput: move |evt: FormEvent| model_instagram.set(evt.value()),
                    }
                }

                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: loading() || uploading(),
                    if loading() { "Publishing..." } else { "Publish" }
                }
            }
        }
    }
}
