use crate::core::session::use_session;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so the shared navbar can render `Link`s
/// to their own `Route` enum without `ui` knowing it.
///
/// Each function receives the localized label and must return a link that
/// already contains it:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__brand-link", to: Route::ListingsPage {}, "{label}" } ),
///     my_listings: |label| rsx!( Link { class: "navbar__link", to: Route::MyListingsPage {}, "{label}" } ),
///     login: |label| rsx!( Link { class: "navbar__link", to: Route::LoginPage {}, "{label}" } ),
///     register: |label| rsx!( Link { class: "navbar__link", to: Route::RegisterPage {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the navbar falls back to plain path links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub my_listings: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
    pub register: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn fallback_link(class: &'static str, to: &'static str, label: &str) -> Element {
    rsx! { Link { class: class, to: to, "{label}" } }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut session = use_session();
    let router = navigator();
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val) {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_logout = move |_: MouseEvent| {
        session.logout();
        router.push("/");
    };

    let builder = NAV_BUILDER.get();
    let brand = match builder {
        Some(b) => (b.home)("ParkAll"),
        None => fallback_link("navbar__brand-link", "/", "ParkAll"),
    };

    let links = match session.current() {
        Some(user) => {
            let greeting = t!("nav-greeting", name = user.name.clone());
            let my_listings_label = t!("nav-my-listings");
            let my_listings = match builder {
                Some(b) => (b.my_listings)(&my_listings_label),
                None => fallback_link("navbar__link", "/my-listings", &my_listings_label),
            };
            rsx! {
                span { class: "navbar__greeting", "{greeting}" }
                {my_listings}
                button {
                    r#type: "button",
                    class: "navbar__link navbar__logout",
                    onclick: on_logout,
                    {t!("nav-logout")}
                }
            }
        }
        None => {
            let login_label = t!("nav-login");
            let register_label = t!("nav-register");
            let (login, register) = match builder {
                Some(b) => ((b.login)(&login_label), (b.register)(&register_label)),
                None => (
                    fallback_link("navbar__link", "/login", &login_label),
                    fallback_link("navbar__link", "/register", &register_label),
                ),
            };
            rsx! {
                {login}
                {register}
            }
        }
    };

    rsx! {
        // Shared navbar stylesheet (inlined in release native builds)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    {brand}
                }

                nav { class: "navbar__links", {links} }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
