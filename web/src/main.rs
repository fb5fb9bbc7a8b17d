use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder, NavTarget};
use ui::components::AppNavbar;
use ui::views::{Home, Login, Marketplace, Recommendations, Signup, Weather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
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

fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::from(target),
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder { link: nav_link });
    }

    // Global language code; AppNavbar writes it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_hook(|| info!("agrigraud web started"));

    rsx! {
        document::Title { "AgriGraud" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web router layout around the shared `AppNavbar`.
#[component]
fn WebShell() -> Element {
    let current_path = use_route::<Route>().to_string();
    rsx! {
        AppNavbar { current_path }
        Outlet::<Route> {}
    }
}
