#![cfg(test)]
/*!
Selector lint for the shared theme.

Components in `ui` rely on these classes; a substring check against the
embedded `ui/assets/theme/main.css` catches renames before a packaged
build ships unstyled. Update REQUIRED_SELECTORS together with the markup.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".visually-hidden",
    ".app__main",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".button--warning",
    ".button--danger",
    ".button--block",
    // Feedback
    ".notice {",
    ".notice--error",
    ".placeholder",
    // Listings
    ".listing-grid",
    ".listing-card {",
    ".listing-card__image",
    ".listing-card__badge--free",
    ".listing-card__badge--taken",
    ".listing-card__actions",
    ".listing-detail {",
    ".listing-detail__facts",
    ".reserve__pending",
    // Modal & forms
    ".modal {",
    ".modal__panel",
    ".modal__actions",
    ".form__field",
    ".auth-card",
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-link",
    ".navbar__links",
    ".navbar__link",
    ".navbar__logout",
    ".navbar__greeting",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing navbar selectors:\n{}",
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
