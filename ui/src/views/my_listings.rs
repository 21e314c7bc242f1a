use api::Listing;
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::{backend::use_api, dialog, session::use_session};
use crate::listings::{ListingCard, ListingModal, ListingsState, ModalMode, ModalOutcome};
use crate::t;

/// Listings published by the signed-in user, with edit and delete.
#[component]
pub fn MyListingsPage() -> Element {
    let client = use_api();
    let delete_client = client.clone();
    let session = use_session();
    let mut state = use_signal(ListingsState::default);
    let mut editing = use_signal(|| Option::<Listing>::None);

    // Re-runs whenever the session user changes.
    use_effect(move || {
        let Some(user) = session.current() else {
            state.set(ListingsState::failed(t!("my-listings-no-user")));
            return;
        };
        if !user.has_object_id() {
            warn!("Refusing to fetch listings for malformed user id {:?}", user.id);
            state.set(ListingsState::failed(t!("my-listings-invalid-user")));
            return;
        }

        state.set(ListingsState::loading());
        let client = client.clone();
        spawn(async move {
            let result = client.listings_by_owner(&user.id).await;
            state.set(ListingsState::loaded(result));
        });
    });

    let on_edit = use_callback(move |listing: Listing| editing.set(Some(listing)));

    let on_delete = use_callback(move |listing_id: String| {
        let client = delete_client.clone();
        spawn(async move {
            if !dialog::confirm(&t!("my-listings-confirm-delete")).await {
                return;
            }
            let token = session.current().and_then(|user| user.token);
            match client.delete_listing(&listing_id, token.as_deref()).await {
                Ok(()) => {
                    info!("Removed listing {listing_id} from view");
                    state.write().remove(&listing_id);
                }
                Err(err) => {
                    warn!("Deleting listing {listing_id} failed: {err}");
                    dialog::alert(&t!("my-listings-delete-error"));
                }
            }
        });
    });

    let current = state();

    rsx! {
        section { class: "page page-my-listings",
            h1 { {t!("my-listings-title")} }

            if current.loading {
                p { class: "notice", {t!("listings-loading")} }
            }
            if let Some(message) = current.error.as_ref() {
                p { class: "notice notice--error", "{message}" }
            }

            if !current.listings.is_empty() && !current.loading && current.error.is_none() {
                div { class: "listing-grid",
                    for listing in current.listings.iter().cloned() {
                        {render_owned_listing(listing, on_edit, on_delete)}
                    }
                }
            } else if current.is_empty() {
                p { class: "placeholder", {t!("listings-empty")} }
            }

            if let Some(listing) = editing() {
                ListingModal {
                    mode: ModalMode::Edit(listing),
                    on_saved: move |outcome| {
                        if let ModalOutcome::Updated(updated) = outcome {
                            state.write().replace(updated);
                        }
                    },
                    on_close: move |_| editing.set(None),
                }
            }
        }
    }
}

fn render_owned_listing(
    listing: Listing,
    on_edit: Callback<Listing>,
    on_delete: Callback<String>,
) -> Element {
    let key = listing.id.clone();
    let id = listing.id.clone();
    let for_edit = listing.clone();

    rsx! {
        ListingCard { key: "{key}", listing,
            button {
                r#type: "button",
                class: "button button--warning",
                onclick: move |_| on_edit.call(for_edit.clone()),
                {t!("my-listings-edit")}
            }
            button {
                r#type: "button",
                class: "button button--danger",
                onclick: move |_| on_delete.call(id.clone()),
                {t!("my-listings-delete")}
            }
        }
    }
}
