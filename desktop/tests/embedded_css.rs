#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css` at compile time.
//! A truncated or moved theme would only show up as an unstyled window, so
//! check it here. If the theme moves, update this path and the `include_str!`
//! in `desktop/src/main.rs` together.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-primary",
        "body {",
        ".button--primary",
        ".seller-card",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
