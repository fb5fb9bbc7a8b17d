//! Localization for `agrigraud-ui`.
//!
//! Every page pulls its copy from one Fluent bundle per language:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/agrigraud-ui.ftl   (fallback/reference)
//!   hi-IN/agrigraud-ui.ftl
//!   te-IN/agrigraud-ui.ftl
//! ```
//!
//! The bundles are embedded with `rust-embed` and looked up through the
//! compile-time checked `fl!` macro (wrapped as `t!`), so a key missing from
//! the `en-US` file is a build error rather than a blank label.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-home");
//! ```
//!
//! Switching language (`set_language`) swaps the whole bundle. Components
//! that render copy call `use_language()` so they re-render on a switch
//! while keeping their local state.
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("market-found", count = 3)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "agrigraud-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Alerts and search messages are plain text; no bidi isolation marks.
    // Reapplied after every `select`, which loads fresh bundles.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    info!(lang = tag, "language switched");
    Ok(())
}

/// Language the loader resolved to (first of its current list).
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Subscribe the calling component to language switches.
///
/// Reads the platform's language signal when one is provided, so the caller
/// re-renders with the new bundle instead of being remounted.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
    }
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Short picker label: `en-US` -> `EN`.
pub fn language_label(tag: &str) -> String {
    tag.split('-')
        .next()
        .unwrap_or(tag)
        .to_ascii_uppercase()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn shipped_languages_are_embedded() {
        let langs = available_languages();
        for code in ["en-US", "hi-IN", "te-IN"] {
            assert!(langs.iter().any(|l| l == code), "{code} missing");
        }
    }

    #[test]
    fn picker_labels_are_short_codes() {
        assert_eq!(language_label("en-US"), "EN");
        assert_eq!(language_label("te-IN"), "TE");
        assert_eq!(language_label("hi"), "HI");
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language(FALLBACK_LANGUAGE);
        let s = fl!(&*LOADER, "nav-marketplace");
        assert_eq!(s, "Marketplace");
    }

    #[test]
    fn placeables_are_not_wrapped_in_isolation_marks() {
        init();
        let _ = set_language(FALLBACK_LANGUAGE);
        let empty = fl!(&*LOADER, "prices-empty", term = "okra");
        assert_eq!(empty, "No crops found matching \"okra\"");
        assert!(!empty.contains(['\u{2068}', '\u{2069}']));
    }

    #[test]
    fn current_language_is_an_embedded_one() {
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(current_language(), FALLBACK_LANGUAGE);
        assert!(available_languages().contains(&current_language()));
    }

    mod switching {
        use std::cell::Cell;
        use std::sync::atomic::{AtomicUsize, Ordering};

        use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
        use dioxus::prelude::*;
        use futures::executor::block_on;

        use super::super::{use_language, FALLBACK_LANGUAGE};

        static MOUNTS: AtomicUsize = AtomicUsize::new(0);
        static RENDERS: AtomicUsize = AtomicUsize::new(0);

        thread_local! {
            static CODE: Cell<Option<Signal<String>>> = const { Cell::new(None) };
        }

        #[component]
        fn Greeting() -> Element {
            use_hook(|| MOUNTS.fetch_add(1, Ordering::SeqCst));
            let code = use_language();
            RENDERS.fetch_add(1, Ordering::SeqCst);
            rsx! { p { "{code}" } }
        }

        #[component]
        fn Shell() -> Element {
            let code = use_context_provider(|| Signal::new(FALLBACK_LANGUAGE.to_string()));
            CODE.with(|slot| slot.set(Some(code)));
            rsx! { Greeting {} }
        }

        #[test]
        fn language_switch_rerenders_without_remounting() {
            let mut dom = VirtualDom::new(Shell);
            dom.rebuild_in_place();
            assert_eq!(MOUNTS.load(Ordering::SeqCst), 1);
            assert_eq!(RENDERS.load(Ordering::SeqCst), 1);

            let mut code = CODE.with(|slot| slot.get()).unwrap();
            dom.in_runtime(|| code.set("hi-IN".to_string()));
            block_on(dom.wait_for_work());
            dom.render_immediate(&mut NoOpMutations);

            assert_eq!(MOUNTS.load(Ordering::SeqCst), 1);
            assert_eq!(RENDERS.load(Ordering::SeqCst), 2);
        }
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let _ = set_language(FALLBACK_LANGUAGE);
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
