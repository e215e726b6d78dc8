//! Job detail modal - full posting with apply action

use super::application_modal::ApplicationModal;
use crate::components::icons::{
    Building2Icon, BriefcaseIcon, CheckCircleIcon, ClockIcon, DollarSignIcon, MapPinIcon,
    TrendingUpIcon, XIcon,
};
use crate::components::label_badge::{BadgeSize, LabelBadge, RemoteTag};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton, Modal};
use dioxus::prelude::*;
use fitjobs_common::{posted_ago, Job, OAuthProvider, SignInStatus};

/// Detail view for one job (props-based)
///
/// Visibility of both this modal and the nested application modal is owned by
/// the caller's detail flow; this component only reports close / apply.
#[component]
pub fn JobDetailModal(
    is_open: ReadSignal<bool>,
    job: Job,
    on_close: EventHandler<()>,
    on_apply: EventHandler<()>,
    // Application sub-flow
    is_application_open: ReadSignal<bool>,
    on_application_close: EventHandler<()>,
    sign_in_status: SignInStatus,
    on_sign_in: EventHandler<OAuthProvider>,
) -> Element {
    let initial = job.company_initial();
    let website = job.company_website();
    let posted = posted_ago(&job.posted_date);

    rsx! {
        Modal { is_open, on_close: move |_| on_close.call(()),
            div {
                class: "bg-white dark:bg-gray-800 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto shadow-2xl",
                "data-testid": "job-detail-modal",
                // Header
                div { class: "flex items-center justify-between p-6 border-b border-gray-200 dark:border-gray-700",
                    div { class: "flex items-center space-x-3",
                        div { class: "w-8 h-8 bg-black dark:bg-white rounded-full flex items-center justify-center",
                            span { class: "text-white dark:text-black text-sm font-medium",
                                "{initial}"
                            }
                        }
                        div {
                            h2 { class: "text-xl font-bold text-gray-900 dark:text-white",
                                "{job.title}"
                            }
                            p { class: "text-gray-600 dark:text-gray-300", "{job.company}" }
                        }
                    }
                    ChromelessButton {
                        class: Some(
                            "p-2 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-lg transition-colors"
                                .to_string(),
                        ),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-6 h-6 text-gray-500 dark:text-gray-400" }
                    }
                }

                div { class: "p-6 space-y-6",
                    div { class: "flex flex-wrap gap-2",
                        LabelBadge {
                            label: job.sport_type.label().to_string(),
                            style: job.sport_type.badge_style(),
                            size: BadgeSize::Large,
                        }
                        LabelBadge {
                            label: job.job_type.label().to_string(),
                            style: job.job_type.badge_style(),
                            size: BadgeSize::Large,
                        }
                        LabelBadge {
                            label: job.experience.label().to_string(),
                            style: job.experience.badge_style(),
                            size: BadgeSize::Large,
                        }
                        if job.remote {
                            RemoteTag { size: BadgeSize::Large }
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        DetailField {
                            label: "Location",
                            value: job.location.clone(),
                            icon: rsx! { MapPinIcon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                        DetailField {
                            label: "Salary",
                            value: job.salary.clone(),
                            icon: rsx! { DollarSignIcon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                        DetailField {
                            label: "Job Type",
                            value: job.job_type.label().to_string(),
                            icon: rsx! { BriefcaseIcon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                        DetailField {
                            label: "Experience",
                            value: job.experience.label().to_string(),
                            icon: rsx! { TrendingUpIcon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                        DetailField {
                            label: "Website",
                            value: website,
                            icon: rsx! { Building2Icon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                        DetailField {
                            label: "Posted",
                            value: posted,
                            icon: rsx! { ClockIcon { class: "w-5 h-5 text-gray-400 dark:text-gray-500" } },
                        }
                    }

                    div {
                        h3 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-3",
                            "About this role"
                        }
                        p { class: "text-gray-600 dark:text-gray-300 leading-relaxed",
                            "{job.description}"
                        }
                    }

                    div {
                        h3 { class: "text-lg font-semibold text-gray-900 dark:text-white mb-3",
                            "Requirements"
                        }
                        div { class: "space-y-2",
                            for (index, req) in job.requirements.iter().enumerate() {
                                div { key: "{index}", class: "flex items-start space-x-3",
                                    CheckCircleIcon { class: "w-5 h-5 text-emerald-500 dark:text-emerald-400 mt-0.5 flex-shrink-0" }
                                    span { class: "text-gray-600 dark:text-gray-300", "{req}" }
                                }
                            }
                        }
                    }

                    div { class: "flex flex-col sm:flex-row gap-3 pt-6 border-t border-gray-200 dark:border-gray-700",
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_apply.call(()),
                            "Apply for this position"
                        }
                    }
                }
            }
        }

        ApplicationModal {
            is_open: is_application_open,
            job: job.clone(),
            on_close: on_application_close,
            sign_in_status,
            on_sign_in,
        }
    }
}

/// Icon + label + value cell in the detail grid
#[component]
fn DetailField(label: &'static str, value: String, icon: Element) -> Element {
    rsx! {
        div { class: "flex items-center space-x-3",
            {icon}
            div {
                p { class: "text-sm font-medium text-gray-900 dark:text-white", "{label}" }
                p { class: "text-sm text-gray-600 dark:text-gray-300", "{value}" }
            }
        }
    }
}
