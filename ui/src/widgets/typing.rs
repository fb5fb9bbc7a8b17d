use std::ops::ControlFlow;

use dioxus::prelude::*;

use crate::core::timing::use_interval;

/// Delay between revealed characters.
pub const TYPING_STEP_MS: u64 = 60;

/// First `step` characters of `text` (by `char`, not byte).
pub fn typed_prefix(text: &str, step: usize) -> &str {
    match text.char_indices().nth(step) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Headline that types itself out. Key the component on `text` so a new
/// text restarts the effect.
#[component]
pub fn TypingText(text: String) -> Element {
    let mut step = use_signal(|| 0usize);
    let total = text.chars().count();

    use_interval(TYPING_STEP_MS, move || {
        let next = step() + 1;
        step.set(next);
        if next >= total {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let shown = typed_prefix(&text, step());

    rsx! {
        h1 { class: "typing", "“{shown}”" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_grows_by_characters() {
        assert_eq!(typed_prefix("Grow", 0), "");
        assert_eq!(typed_prefix("Grow", 2), "Gr");
        assert_eq!(typed_prefix("Grow", 4), "Grow");
        assert_eq!(typed_prefix("Grow", 40), "Grow");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let hindi = "किसान";
        assert_eq!(typed_prefix(hindi, 1), "क");
        assert_eq!(typed_prefix(hindi, hindi.chars().count()), hindi);
    }
}
