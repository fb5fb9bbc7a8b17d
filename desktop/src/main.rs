#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ui::components::app_navbar::{register_nav, NavBuilder, NavTarget};
use ui::components::AppNavbar;
use ui::views::{Home, Login, Marketplace, Recommendations, Signup, Weather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/marketplace")]
    Marketplace {},
    #[route("/recommendations")]
    Recommendations {},
    #[route("/weather")]
    Weather {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Marketplace => Route::Marketplace {},
            NavTarget::Recommendations => Route::Recommendations {},
            NavTarget::Weather => Route::Weather {},
            NavTarget::Login => Route::Login {},
            NavTarget::Signup => Route::Signup {},
        }
    }
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to init logging: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();
    info!(version = env!("CARGO_PKG_VERSION"), "starting agrigraud desktop");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("AgriGraud – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::from(target), "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar writes it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        // Always inline the theme; packaged builds ship no stylesheet on disk.
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop router layout around the shared `AppNavbar`.
#[component]
fn DesktopShell() -> Element {
    let current_path = use_route::<Route>().to_string();
    rsx! {
        AppNavbar { current_path }
        Outlet::<Route> {}
    }
}
