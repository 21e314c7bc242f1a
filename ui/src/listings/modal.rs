use api::{ImageUpload, Listing};
use dioxus::prelude::*;
use tracing::warn;

use crate::core::{
    backend::use_api,
    dialog,
    session::use_session,
    validation::ListingForm,
};
use crate::t;

use super::{preview_url, upload_from_file};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(Listing),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome {
    /// The backend accepted a new listing; callers re-fetch.
    Created,
    /// The backend returned the edited listing; callers patch locally.
    Updated(Listing),
}

/// Create/edit form shown over the page. Validates before any request and
/// closes itself once the backend accepted the change.
#[component]
pub fn ListingModal(
    mode: ModalMode,
    on_saved: EventHandler<ModalOutcome>,
    on_close: EventHandler<()>,
) -> Element {
    let client = use_api();
    let session = use_session();
    let mut form = use_signal(|| match &mode {
        ModalMode::Create => ListingForm::default(),
        ModalMode::Edit(listing) => ListingForm::from_listing(listing),
    });
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let is_edit = matches!(mode, ModalMode::Edit(_));
    let current_image = match &mode {
        ModalMode::Edit(listing) => listing.image.as_deref().map(|p| client.image_url(p)),
        ModalMode::Create => None,
    };
    let preview = image.read().as_ref().map(preview_url);

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => image.set(Some(upload_from_file(&name, bytes))),
            None => warn!("Couldn't read picked file {name}"),
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }

        let draft = match form().into_draft(image()) {
            Ok(draft) => draft,
            Err(err) => {
                error.set(Some(err.localized()));
                return;
            }
        };
        error.set(None);

        let client = client.clone();
        let mode = mode.clone();
        let publisher_id = session.current().map(|user| user.id);
        saving.set(true);

        spawn(async move {
            match mode {
                ModalMode::Create => {
                    let Some(publisher_id) = publisher_id else {
                        saving.set(false);
                        error.set(Some(t!("modal-error-session")));
                        return;
                    };
                    let result = client.create_listing(&draft, &publisher_id).await;
                    saving.set(false);
                    match result {
                        Ok(_) => {
                            on_saved.call(ModalOutcome::Created);
                            on_close.call(());
                        }
                        Err(err) => {
                            warn!("Creating listing failed: {err}");
                            let message = if err.is_network() {
                                t!("modal-connection-error")
                            } else {
                                t!("modal-create-error")
                            };
                            error.set(Some(message));
                        }
                    }
                }
                ModalMode::Edit(listing) => {
                    let result = client.edit_listing(&listing.id, &draft).await;
                    saving.set(false);
                    match result {
                        Ok(updated) => {
                            on_saved.call(ModalOutcome::Updated(updated));
                            on_close.call(());
                        }
                        Err(err) => {
                            warn!("Updating listing {} failed: {err}", listing.id);
                            dialog::alert(&t!("modal-update-error"));
                        }
                    }
                }
            }
        });
    };

    let title = if is_edit {
        t!("modal-edit-title")
    } else {
        t!("modal-create-title")
    };
    let submit_label = if saving() {
        t!("modal-saving")
    } else if is_edit {
        t!("modal-edit-submit")
    } else {
        t!("modal-create-submit")
    };

    rsx! {
        div { class: "modal",
            div { class: "modal__panel", role: "dialog", aria_modal: "true",
                h2 { class: "modal__title", "{title}" }
                if let Some(message) = error() {
                    p { class: "notice notice--error", "{message}" }
                }
                form { class: "form", onsubmit: submit,
                    div { class: "form__field",
                        label { r#for: "listing-description", {t!("form-description")} }
                        input {
                            r#type: "text",
                            id: "listing-description",
                            required: true,
                            value: "{form.read().description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    div { class: "form__field",
                        label { r#for: "listing-location", {t!("form-location")} }
                        input {
                            r#type: "text",
                            id: "listing-location",
                            required: true,
                            value: "{form.read().location}",
                            oninput: move |evt| form.write().location = evt.value(),
                        }
                    }
                    div { class: "form__field",
                        label { r#for: "listing-price", {t!("form-price")} }
                        input {
                            r#type: "number",
                            id: "listing-price",
                            required: true,
                            min: "0",
                            step: "any",
                            value: "{form.read().price}",
                            oninput: move |evt| form.write().price = evt.value(),
                        }
                    }
                    div { class: "form__field",
                        label { r#for: "listing-image", {t!("form-image")} }
                        if let Some(src) = current_image.filter(|_| preview.is_none()) {
                            img { class: "modal__preview", src: "{src}", alt: t!("listing-image-alt") }
                        }
                        input {
                            r#type: "file",
                            id: "listing-image",
                            accept: "image/*",
                            multiple: false,
                            onchange: on_file,
                        }
                        if let Some(src) = preview {
                            img { class: "modal__preview", src: "{src}", alt: t!("modal-preview-alt") }
                        }
                    }
                    div { class: "modal__actions",
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| on_close.call(()),
                            {t!("modal-cancel")}
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary",
                            disabled: saving(),
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
