use crate::app_service::use_app;
use dioxus::prelude::*;
use fitjobs_common::{DetailAction, FilterState, OAuthProvider};
use fitjobs_ui::stores::{AppStateStoreExt, UiStateStoreExt};
use fitjobs_ui::JobBoardView;

#[component]
pub fn JobBoard() -> Element {
    let app = use_app();
    let sign_in_status = app.state.ui().sign_in().read().clone();

    let filter_app = app.clone();
    let detail_app = app.clone();
    let sign_in_app = app.clone();

    rsx! {
        JobBoardView {
            state: app.state.board(),
            on_filter_change: move |filters: FilterState| filter_app.set_filters(filters),
            on_detail_action: move |action: DetailAction| detail_app.dispatch(action),
            sign_in_status,
            on_sign_in: move |provider: OAuthProvider| sign_in_app.sign_in(provider),
        }
    }
}
