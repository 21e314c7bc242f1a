//! Blocking browser dialogs, evaluated in the page so they work in both the
//! browser and the desktop webview.

use dioxus::prelude::*;
use tracing::warn;

/// `window.alert(message)`
pub fn alert(message: &str) {
    let _ = document::eval(&format!("alert({});", js_string(message)));
}

/// `window.confirm(message)`; any evaluation failure counts as "cancel".
pub async fn confirm(message: &str) -> bool {
    let script = format!("return confirm({});", js_string(message));
    match document::eval(&script).join::<bool>().await {
        Ok(answer) => answer,
        Err(err) => {
            warn!("confirm dialog failed: {err:?}");
            false
        }
    }
}

fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::js_string;

    #[test]
    fn messages_are_quoted_for_script() {
        assert_eq!(js_string("it's \"fine\""), r#""it's \"fine\"""#);
    }
}
