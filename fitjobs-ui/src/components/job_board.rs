//! Job board view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<JobBoardState>` and uses lenses for granular reactivity.
//! All changes go back to the owner through callbacks: a replaced
//! `FilterState` for filter edits and a `DetailAction` for modal transitions.

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::SearchIcon;
use crate::components::job_card::JobCard;
use crate::components::job_detail::JobDetailModal;
use crate::components::search_filters::SearchFilters;
use crate::components::utils::format_results_summary;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::job_board::{JobBoardState, JobBoardStateStoreExt};
use dioxus::prelude::*;
use fitjobs_common::{DetailAction, FilterState, Job, OAuthProvider, SignInStatus};

/// Job board view component - pure rendering, no data fetching
#[component]
pub fn JobBoardView(
    state: ReadStore<JobBoardState>,
    on_filter_change: EventHandler<FilterState>,
    on_detail_action: EventHandler<DetailAction>,
    sign_in_status: SignInStatus,
    on_sign_in: EventHandler<OAuthProvider>,
) -> Element {
    // Read each lens once; the modal state is only read through the memos
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let filters = state.filters().read().clone();

    let visible = use_memo(move || state.read().visible_jobs());
    let active_job = use_memo(move || state.flow().read().active_job().cloned());
    let is_detail_open = use_memo(move || state.flow().read().is_detail_open());
    let is_application_open = use_memo(move || state.flow().read().is_application_open());

    let jobs = visible();
    let summary = format_results_summary(jobs.len(), filters.active_count());

    rsx! {
        div { class: "container mx-auto px-6 max-w-6xl py-8",
            SearchFilters { filters: filters.clone(), on_filter_change }

            if loading {
                LoadingSpinner { message: "Loading jobs...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if jobs.is_empty() {
                EmptyResults {
                    has_filters: !filters.is_empty(),
                    on_clear: move |_| on_filter_change.call(FilterState::cleared()),
                }
            } else {
                p { class: "text-xs text-gray-500 dark:text-gray-400 mb-4", "{summary}" }
                JobGrid {
                    jobs,
                    on_select: move |job: Job| on_detail_action.call(DetailAction::Select(job)),
                }
            }
        }

        if let Some(job) = active_job() {
            JobDetailModal {
                key: "{job.id}",
                is_open: is_detail_open,
                job,
                on_close: move |_| on_detail_action.call(DetailAction::CloseDetail),
                on_apply: move |_| on_detail_action.call(DetailAction::Apply),
                is_application_open,
                on_application_close: move |_| on_detail_action.call(DetailAction::CloseApplication),
                sign_in_status,
                on_sign_in,
            }
        }
    }
}

/// Responsive grid of job cards, in list order
#[component]
fn JobGrid(jobs: Vec<Job>, on_select: EventHandler<Job>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
            for job in jobs {
                JobCard { key: "{job.id}", job, on_click: on_select }
            }
        }
    }
}

#[component]
fn EmptyResults(has_filters: bool, on_clear: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-12",
            div { class: "text-gray-400 dark:text-gray-500 mb-4",
                SearchIcon { class: "w-12 h-12 mx-auto" }
            }
            if has_filters {
                h2 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-2",
                    "No jobs match your filters"
                }
                p { class: "text-sm text-gray-500 dark:text-gray-400 mb-4",
                    "Try a broader search or a different location."
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_clear.call(()),
                    "Clear filters"
                }
            } else {
                h2 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-2",
                    "No jobs posted yet"
                }
                p { class: "text-sm text-gray-500 dark:text-gray-400", "Check back soon." }
            }
        }
    }
}
