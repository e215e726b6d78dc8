//! Search filter bar - stateless, emits a replaced FilterState per edit

use crate::components::icons::{BriefcaseIcon, MapPinIcon, SearchIcon, TrendingUpIcon};
use crate::components::text_input::{IconSelect, IconTextInput};
use dioxus::prelude::*;
use fitjobs_common::{ExperienceLevel, FilterField, FilterState, JobType};

/// Filter bar for the job list
///
/// Holds no state of its own: every edit builds a new `FilterState` from the
/// `filters` prop with one field replaced and hands it to `on_filter_change`.
#[component]
pub fn SearchFilters(filters: FilterState, on_filter_change: EventHandler<FilterState>) -> Element {
    let edit = {
        let filters = filters.clone();
        move |field: FilterField, value: String| {
            on_filter_change.call(filters.with_field(field, value));
        }
    };

    let job_type_options: Vec<String> = JobType::ALL.iter().map(|t| t.label().to_string()).collect();
    let experience_options: Vec<String> = ExperienceLevel::ALL
        .iter()
        .map(|e| e.label().to_string())
        .collect();

    rsx! {
        div {
            class: "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 p-4 mb-6",
            "data-testid": "search-filters",
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-3",
                IconTextInput {
                    value: filters.search.clone(),
                    placeholder: "Job title or company",
                    icon: rsx! { SearchIcon { class: "w-3 h-3" } },
                    on_input: {
                        let edit = edit.clone();
                        move |v: String| edit(FilterField::Search, v)
                    },
                }
                IconTextInput {
                    value: filters.location.clone(),
                    placeholder: "Location",
                    icon: rsx! { MapPinIcon { class: "w-3 h-3" } },
                    on_input: {
                        let edit = edit.clone();
                        move |v: String| edit(FilterField::Location, v)
                    },
                }
                IconSelect {
                    value: filters.job_type.clone(),
                    any_label: "All Job Types",
                    options: job_type_options,
                    icon: rsx! { BriefcaseIcon { class: "w-3 h-3" } },
                    on_change: {
                        let edit = edit.clone();
                        move |v: String| edit(FilterField::JobType, v)
                    },
                }
                IconSelect {
                    value: filters.experience.clone(),
                    any_label: "All Experience",
                    options: experience_options,
                    icon: rsx! { TrendingUpIcon { class: "w-3 h-3" } },
                    on_change: {
                        let edit = edit.clone();
                        move |v: String| edit(FilterField::Experience, v)
                    },
                }
            }
        }
    }
}
