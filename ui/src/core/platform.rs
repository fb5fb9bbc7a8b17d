//! Platform detection and the few browser capabilities we reach through `eval`.
//!
//! Web and desktop both render inside a browser engine, so alerts and the
//! scroll watcher are plain JS snippets run through `document::eval`.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    tracing::info!(platform = ?Platform::current(), %message, "alert");
    let _ = document::eval(&alert_script(message));
}

pub fn alert_script(message: &str) -> String {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.alert({literal});")
}

/// Sends `true`/`false` whenever the page crosses `threshold_px` of vertical scroll.
pub fn scroll_watch_script(threshold_px: u32) -> String {
    format!(
        r#"
let last = null;
const report = () => {{
    const scrolled = window.scrollY > {threshold_px};
    if (scrolled !== last) {{
        last = scrolled;
        dioxus.send(scrolled);
    }}
}};
window.addEventListener("scroll", report, {{ passive: true }});
report();
await new Promise(() => {{}});
"#
    )
}
