use dioxus::prelude::*;

use crate::core::{backend::use_api, session::use_session};
use crate::listings::{ListingCard, ListingModal, ListingsState, ModalMode};
use crate::t;

/// Public grid of every published listing.
#[component]
pub fn ListingsPage() -> Element {
    let client = use_api();
    let session = use_session();
    let mut state = use_signal(ListingsState::loading);
    let mut show_modal = use_signal(|| false);

    let reload = use_callback(move |_: ()| {
        let client = client.clone();
        spawn(async move {
            let result = client.list_listings().await;
            state.set(ListingsState::loaded(result));
        });
    });
    use_hook(move || reload.call(()));

    let current = state();

    rsx! {
        section { class: "page page-listings",
            h1 { {t!("listings-title")} }

            if session.is_authenticated() {
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: move |_| show_modal.set(true),
                    {t!("listings-add")}
                }
            }

            if show_modal() {
                ListingModal {
                    mode: ModalMode::Create,
                    on_saved: move |_| reload.call(()),
                    on_close: move |_| show_modal.set(false),
                }
            }

            if let Some(message) = current.error.as_ref() {
                p { class: "notice notice--error", "{message}" }
            }

            if current.loading {
                p { class: "notice", {t!("listings-loading")} }
            } else if current.is_empty() {
                p { class: "placeholder", {t!("listings-empty")} }
            } else {
                div { class: "listing-grid",
                    for listing in current.listings.iter() {
                        ListingCard {
                            key: "{listing.id}",
                            listing: listing.clone(),
                            show_publisher: true,
                            detail_href: format!("/parking/{}", listing.id),
                        }
                    }
                }
            }
        }
    }
}
