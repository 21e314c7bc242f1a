use dioxus::prelude::*;

use crate::core::{backend::use_api, format::display_price, session::use_session};
use crate::listings::{ListingsState, ReserveButton};
use crate::t;

/// One listing with its reservation action. The backend has no single-item
/// endpoint, so the public list is fetched and searched by id.
#[component]
pub fn ListingDetail(id: String) -> Element {
    let client = use_api();
    let image_client = client.clone();
    let session = use_session();
    let mut state = use_signal(ListingsState::loading);

    let reload = use_callback(move |_: ()| {
        let client = client.clone();
        spawn(async move {
            let result = client.list_listings().await;
            state.set(ListingsState::loaded(result));
        });
    });
    use_hook(move || reload.call(()));

    let current = state();
    let listing = current.find(&id).cloned();
    let image_src = listing
        .as_ref()
        .and_then(|l| l.image.as_deref())
        .map(|path| image_client.image_url(path));

    rsx! {
        section { class: "page page-detail",
            Link { class: "button button--ghost", to: "/", {t!("detail-back")} }

            if let Some(message) = current.error.as_ref() {
                p { class: "notice notice--error", "{message}" }
            }

            if current.loading {
                p { class: "notice", {t!("listings-loading")} }
            } else if let Some(listing) = listing {
                article { class: "listing-detail",
                    if let Some(src) = image_src {
                        img { class: "listing-detail__image", src: "{src}", alt: t!("listing-image-alt") }
                    }
                    h1 { "{listing.description}" }
                    dl { class: "listing-detail__facts",
                        dt { {t!("listing-location")} }
                        dd { "{listing.location}" }
                        dt { {t!("listing-price")} }
                        dd { {display_price(listing.price)} }
                        dt { {t!("listing-published-by")} }
                        dd {
                            {listing.publisher_name().map(str::to_string).unwrap_or_else(|| t!("listing-unknown-publisher"))}
                        }
                    }

                    if listing.available {
                        span { class: "listing-card__badge listing-card__badge--free", {t!("listing-available")} }
                        if session.is_authenticated() {
                            ReserveButton {
                                listing_id: listing.id.clone(),
                                on_reserved: move |_| reload.call(()),
                            }
                        } else {
                            p { class: "placeholder",
                                Link { to: "/login", {t!("detail-login-to-reserve")} }
                            }
                        }
                    } else {
                        span { class: "listing-card__badge listing-card__badge--taken", {t!("listing-reserved")} }
                    }
                }
            } else if current.error.is_none() {
                p { class: "placeholder", {t!("detail-not-found")} }
            }
        }
    }
}
