use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{backend::use_api_provider, session::use_session_provider};
use ui::views::{ListingDetail, ListingsPage, LoginPage, MyListingsPage, RegisterPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    ListingsPage {},
    #[route("/parking/:id")]
    ListingDetail { id: String },
    #[route("/my-listings")]
    MyListingsPage {},
    #[route("/login")]
    LoginPage {},
    #[route("/register")]
    RegisterPage {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::ListingsPage {},
        "{label}"
    })
}
fn nav_my_listings(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MyListingsPage {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::LoginPage {},
        "{label}"
    })
}
fn nav_register(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::RegisterPage {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Language code shared with AppNavbar; keying the router on it remounts
    // every view with fresh strings after a switch.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_api_provider();
    use_session_provider();

    register_nav(NavBuilder {
        home: nav_home,
        my_listings: nav_my_listings,
        login: nav_login,
        register: nav_register,
    });

    rsx! {
        document::Title { "ParkAll" }
        document::Style { "{MAIN_CSS_INLINE}" }

        div { key: "{lang_code()}", class: "app",
            Router::<Route> {}
        }
    }
}

/// Web-specific layout around the shared `AppNavbar`, bound to this crate's
/// `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "app__main",
            Outlet::<Route> {}
        }
    }
}
