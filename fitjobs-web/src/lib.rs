pub mod api;
pub mod app_service;
pub mod auth;
pub mod config;
mod demo_data;
pub mod pages;

use app_service::AppService;
use config::Config;
use dioxus::prelude::*;
use pages::{AppLayout, JobBoard};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    JobBoard {},
}

#[component]
pub fn App() -> Element {
    let app = use_hook(|| {
        let app = AppService::new(Config::load());
        app.load_jobs();
        app
    });
    use_context_provider(|| app);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
