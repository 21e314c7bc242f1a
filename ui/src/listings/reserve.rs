use dioxus::prelude::*;
use tracing::warn;

use crate::core::{backend::use_api, session::use_session};
use crate::t;

/// Reserve a listing for the signed-in user. Renders nothing when signed out.
#[component]
pub fn ReserveButton(listing_id: String, on_reserved: EventHandler<()>) -> Element {
    let client = use_api();
    let session = use_session();
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let Some(user) = session.current() else {
        return rsx! {};
    };

    let reserve = move |_: MouseEvent| {
        let client = client.clone();
        let listing_id = listing_id.clone();
        let user_id = user.id.clone();
        pending.set(true);
        spawn(async move {
            let result = client.reserve_listing(&listing_id, &user_id).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    error.set(None);
                    on_reserved.call(());
                }
                Err(err) => {
                    warn!("Reservation of {listing_id} failed: {err}");
                    let message = if err.is_network() {
                        t!("reserve-connection-error")
                    } else {
                        err.backend_message()
                            .map(str::to_string)
                            .unwrap_or_else(|| t!("reserve-error"))
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div { class: "reserve",
            if pending() {
                p { class: "reserve__pending", {t!("reserve-pending")} }
            } else {
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: reserve,
                    {t!("reserve-button")}
                }
            }
            if let Some(message) = error() {
                p { class: "notice notice--error", "{message}" }
            }
        }
    }
}
