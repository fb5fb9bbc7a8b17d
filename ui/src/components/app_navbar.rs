use crate::core::platform;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

// Navbar stylesheet; inlined as well for release desktop builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Vertical scroll after which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: u32 = 50;

/// Every destination the shell links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Marketplace,
    Recommendations,
    Weather,
    Login,
    Signup,
}

impl NavTarget {
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Marketplace,
        NavTarget::Recommendations,
        NavTarget::Weather,
        NavTarget::Login,
        NavTarget::Signup,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Marketplace => "/marketplace",
            NavTarget::Recommendations => "/recommendations",
            NavTarget::Weather => "/weather",
            NavTarget::Login => "/login",
            NavTarget::Signup => "/signup",
        }
    }

    /// Match a router path, ignoring query, fragment and a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|target| target.path() == trimmed)
    }

    pub fn label(self) -> String {
        match self {
            NavTarget::Home => t!("nav-home"),
            NavTarget::Marketplace => t!("nav-marketplace"),
            NavTarget::Recommendations => t!("nav-recommendations"),
            NavTarget::Weather => t!("nav-weather"),
            NavTarget::Login => t!("nav-login"),
            NavTarget::Signup => t!("nav-signup"),
        }
    }
}

/// Platforms register a `NavBuilder` so shared views can produce router
/// `Link`s without knowing each platform's `Route` enum.
///
/// ```ignore
/// fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
///     let to = match target {
///         NavTarget::Home => Route::Home {},
///         // ...
///     };
///     rsx!(Link { class: "{class}", to, "{label}" })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a builder, plain anchors are rendered instead.
pub struct NavBuilder {
    pub link: fn(target: NavTarget, label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// A link to `target` through the registered builder.
pub fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, label, class),
        None => rsx! {
            a { class: "{class}", href: target.path(), "{label}" }
        },
    }
}

pub fn nav_link_class(current_path: &str, target: NavTarget) -> &'static str {
    let active = NavTarget::from_path(current_path) == Some(target);
    match (target, active) {
        (NavTarget::Signup, true) => "navbar__link navbar__link--cta navbar__link--active",
        (NavTarget::Signup, false) => "navbar__link navbar__link--cta",
        (_, true) => "navbar__link navbar__link--active",
        (_, false) => "navbar__link",
    }
}

pub fn navbar_class(scrolled: bool, menu_open: bool) -> &'static str {
    match (scrolled, menu_open) {
        (false, false) => "navbar",
        (true, false) => "navbar navbar--scrolled",
        (false, true) => "navbar navbar--open",
        (true, true) => "navbar navbar--scrolled navbar--open",
    }
}

/// Brand, route links, language picker and the mobile menu toggle.
///
/// `current_path` is the platform router's current route as a string; the
/// matching entry is highlighted and the mobile menu closes when it changes.
#[component]
pub fn AppNavbar(current_path: String) -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut local_lang = use_signal(i18n::current_language);
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| local_lang());
    let langs = use_signal(i18n::available_languages);

    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    use_effect(use_reactive((&current_path,), move |(_path,)| {
        menu_open.set(false);
    }));

    use_hook(move || {
        spawn(async move {
            let mut watcher =
                document::eval(&platform::scroll_watch_script(SCROLL_THRESHOLD_PX));
            loop {
                match watcher.recv::<bool>().await {
                    Ok(past) => scrolled.set(past),
                    Err(err) => {
                        warn!("scroll watcher stopped: {err:?}");
                        break;
                    }
                }
            }
        })
    });

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                info!(lang = %val, "language selected");
                local_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("failed switching language to {val}: {err}"),
        }
    };

    let links = NavTarget::ALL.map(|target| {
        let class = nav_link_class(&current_path, target);
        (target, class)
    });
    let open = menu_open();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: navbar_class(scrolled(), open),
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-icon", aria_hidden: "true", "🌾" }
                    {nav_link(NavTarget::Home, "AgriGraud", "navbar__brand-link")}
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: "{open}",
                    onclick: move |_| menu_open.set(!open),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                nav { class: "navbar__links",
                    for (target, class) in links {
                        span { key: "{target:?}", class: "navbar__item",
                            {nav_link(target, &target.label(), class)}
                        }
                    }
                }

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang}",
                        oninput: on_change,
                        for code in langs() {
                            option {
                                key: "{code}",
                                value: "{code}",
                                selected: code == current_lang,
                                {i18n::language_label(&code)}
                            }
                        }
                    }
                }
            }
        }
    }
}
