//! Localization for the ParkAll UI.
//!
//! Messages live in `i18n/<locale>/parkall-ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback every other locale is checked
//! against (`tests/i18n_keys.rs`).
//!
//! ```ignore
//! use crate::t;
//! let label = t!("nav-login");
//! let greeting = t!("nav-greeting", name = user.name.clone());
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

pub const FALLBACK_LANGUAGE: &str = "en-US";

// Must match the FTL file name in every locale folder.
const DOMAIN: &str = "parkall-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("fallback language tag is valid");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles matching the user's preferred languages. Safe to call
/// from every component; only the first call does work.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("Couldn't select languages {requested:?} ({err}); using {FALLBACK_LANGUAGE}");
        }
    });
}

/// Switch the active locale. Returns `false` and leaves the loader alone
/// when `tag` is not a language tag or its bundle fails to load.
pub fn set_language(tag: &str) -> bool {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!("Ignoring malformed language tag {tag:?}");
        return false;
    };
    match i18n_embed::select(&*LOADER, &Localizations, &[lang]) {
        Ok(_) => true,
        Err(err) => {
            warn!("Switching to {tag} failed: {err}");
            false
        }
    }
}

/// Tag of the locale currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Locale folders embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
