//! Job card component - pure view with callbacks

use crate::components::icons::{ArrowRightIcon, ClockIcon};
use crate::components::label_badge::{BadgeSize, LabelBadge, RemoteTag};
use dioxus::prelude::*;
use fitjobs_common::{posted_ago, Job};

/// Summary card for a single posting
///
/// Pure view component. Opening the detail view is handled via the on_click
/// callback, which receives the clicked job.
#[component]
pub fn JobCard(job: Job, on_click: EventHandler<Job>) -> Element {
    let initial = job.company_initial();
    let website = job.company_website();
    let posted = posted_ago(&job.posted_date);
    let category_style = job.sport_type.badge_style();
    let category = job.sport_type.label().to_string();

    let card_class = "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 hover:shadow-sm dark:hover:shadow-gray-900/20 transition-all duration-200 group cursor-pointer";

    rsx! {
        div {
            class: "{card_class}",
            "data-testid": "job-card",
            onclick: {
                let job = job.clone();
                move |_| on_click.call(job.clone())
            },
            div { class: "p-4",
                // Company
                div { class: "flex items-center justify-between mb-4",
                    div { class: "flex items-center space-x-2",
                        div { class: "w-5 h-5 bg-black dark:bg-white rounded-full flex items-center justify-center",
                            span { class: "text-white dark:text-black text-xs font-medium",
                                "{initial}"
                            }
                        }
                        span { class: "text-xs font-medium text-gray-900 dark:text-white",
                            "{job.company}"
                        }
                    }
                    if job.remote {
                        RemoteTag {}
                    }
                }

                div { class: "flex items-center justify-between mb-3",
                    LabelBadge {
                        label: category,
                        style: category_style,
                        size: BadgeSize::Compact,
                    }
                }

                h2 { class: "text-sm font-semibold text-gray-900 dark:text-white mb-3 leading-tight",
                    "{job.title}"
                }
                p { class: "text-gray-600 dark:text-gray-300 text-xs leading-relaxed mb-4",
                    "{job.description}"
                }

                div { class: "space-y-1 mb-4",
                    CardRow { label: "Location", value: job.location.clone() }
                    CardRow { label: "Website", value: website }
                }

                // Footer
                div { class: "flex items-center justify-between pt-2 border-t border-gray-100 dark:border-gray-700",
                    div { class: "flex items-center text-xs text-gray-500 dark:text-gray-400",
                        ClockIcon { class: "w-3 h-3 mr-1" }
                        span { "{posted}" }
                    }
                    ArrowRightIcon { class: "w-3 h-3 text-gray-400 dark:text-gray-500 group-hover:text-gray-600 dark:group-hover:text-gray-300 group-hover:translate-x-1 transition-all duration-200" }
                }
            }
        }
    }
}

#[component]
fn CardRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center",
            span { class: "text-gray-900 dark:text-white text-xs font-medium", "{label}" }
            span { class: "text-gray-600 dark:text-gray-300 text-xs", "{value}" }
        }
    }
}
