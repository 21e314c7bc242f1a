//! Shared UI crate for ParkAll. Views, session handling and localization
//! live here; the platform crates only own the route table and launcher.

pub mod core;
pub mod i18n;
pub mod listings;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
