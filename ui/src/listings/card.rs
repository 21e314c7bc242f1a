use api::Listing;
use dioxus::prelude::*;

use crate::core::{backend::use_api, format::display_price};
use crate::t;

/// One listing in a grid. `children` are the card's action buttons.
#[component]
pub fn ListingCard(
    listing: Listing,
    #[props(default)] show_publisher: bool,
    detail_href: Option<String>,
    children: Element,
) -> Element {
    let client = use_api();
    let image_src = listing.image.as_deref().map(|path| client.image_url(path));
    let price = display_price(listing.price);
    let publisher = listing
        .publisher_name()
        .map(str::to_string)
        .unwrap_or_else(|| t!("listing-unknown-publisher"));
    let (badge_class, badge_label) = if listing.available {
        ("listing-card__badge listing-card__badge--free", t!("listing-available"))
    } else {
        ("listing-card__badge listing-card__badge--taken", t!("listing-reserved"))
    };

    rsx! {
        article { class: "listing-card",
            if let Some(src) = image_src {
                img {
                    class: "listing-card__image",
                    src: "{src}",
                    alt: t!("listing-image-alt"),
                }
            }
            div { class: "listing-card__body",
                h2 { class: "listing-card__title", "{listing.description}" }
                p { class: "listing-card__meta",
                    span { class: "listing-card__label", {t!("listing-location")} }
                    " {listing.location}"
                }
                p { class: "listing-card__meta",
                    span { class: "listing-card__label", {t!("listing-price")} }
                    " {price}"
                }
                if show_publisher {
                    p { class: "listing-card__meta",
                        span { class: "listing-card__label", {t!("listing-published-by")} }
                        " {publisher}"
                    }
                }
                span { class: "{badge_class}", "{badge_label}" }
            }
            div { class: "listing-card__actions",
                if let Some(href) = detail_href {
                    Link { class: "button button--ghost", to: href, {t!("listing-view")} }
                }
                {children}
            }
        }
    }
}
