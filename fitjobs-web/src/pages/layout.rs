use crate::app_service::use_app;
use crate::Route;
use dioxus::prelude::*;
use fitjobs_common::OAuthProvider;
use fitjobs_ui::stores::{AppStateStoreExt, UiStateStoreExt};
use fitjobs_ui::{AppLayoutView, Header, NavItem};
use tracing::debug;

#[component]
pub fn AppLayout() -> Element {
    let app = use_app();
    let current_route = use_route::<Route>();
    let theme = *app.state.ui().theme().read();
    let sign_in_status = app.state.ui().sign_in().read().clone();

    let nav_items = vec![
        NavItem::new(
            "browse",
            "Browse Jobs",
            matches!(current_route, Route::JobBoard {}),
        ),
        NavItem::new("companies", "Companies", false),
        NavItem::new("resources", "Resources", false),
    ];

    let theme_app = app.clone();
    let post_app = app.clone();
    let sign_in_app = app.clone();

    rsx! {
        AppLayoutView {
            theme,
            header: rsx! {
                Header {
                    nav_items,
                    on_nav_click: move |id: String| {
                        if id == "browse" {
                            navigator().push(Route::JobBoard {});
                        } else {
                            debug!("Nav item {id} has no page");
                        }
                    },
                    theme,
                    on_toggle_theme: move |_| theme_app.toggle_theme(),
                    on_post_job: move |_| post_app.post_job(),
                    on_sign_in: move |_| sign_in_app.sign_in(OAuthProvider::Google),
                    sign_in_status,
                }
            },
            Outlet::<Route> {}
        }
    }
}
