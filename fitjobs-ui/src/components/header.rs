//! Header view component
//!
//! Pure, props-based navigation chrome: brand, nav links, theme toggle,
//! "Post Job" and "Sign In". Sign In reflects the sign-in status: disabled
//! while redirecting, with the failure message shown under the bar.

use crate::components::icons::{AlertTriangleIcon, MoonIcon, PlusIcon, SunIcon};
use crate::components::utils::sign_in_label;
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;
use fitjobs_common::{SignInStatus, Theme};

/// Navigation link for the header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

impl NavItem {
    pub fn new(id: &str, label: &str, is_active: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            is_active,
        }
    }
}

/// Header view (pure, props-based)
#[component]
pub fn Header(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    theme: Theme,
    on_toggle_theme: EventHandler<()>,
    on_post_job: EventHandler<()>,
    on_sign_in: EventHandler<()>,
    sign_in_status: SignInStatus,
    #[props(default = "FitJobs".to_string())] brand: String,
) -> Element {
    let pending = sign_in_status.is_pending();
    let sign_in_text = sign_in_label(&sign_in_status);

    rsx! {
        header { class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800",
            div { class: "container mx-auto px-6 max-w-6xl",
                div { class: "flex items-center justify-between h-14",
                    div { class: "flex items-center space-x-8",
                        h1 { class: "text-lg font-semibold text-gray-900 dark:text-white",
                            "{brand}"
                        }
                        nav { class: "hidden md:flex items-center space-x-8",
                            for item in nav_items.iter() {
                                NavLink {
                                    key: "{item.id}",
                                    is_active: item.is_active,
                                    on_click: {
                                        let id = item.id.clone();
                                        move |_| on_nav_click.call(id.clone())
                                    },
                                    "{item.label}"
                                }
                            }
                        }
                    }

                    div { class: "flex items-center space-x-4",
                        ThemeToggle { theme, on_toggle: on_toggle_theme }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            onclick: move |_| on_post_job.call(()),
                            PlusIcon { class: "w-3 h-3" }
                            span { "Post Job" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            disabled: pending,
                            onclick: move |_| on_sign_in.call(()),
                            "{sign_in_text}"
                        }
                    }
                }
                if let Some(message) = sign_in_status.error() {
                    p {
                        class: "flex items-center justify-end gap-2 pb-2 text-xs text-red-600 dark:text-red-400",
                        role: "alert",
                        AlertTriangleIcon { class: "w-3 h-3 flex-shrink-0" }
                        "{message}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let class = if is_active {
        "text-gray-900 dark:text-white text-xs font-medium"
    } else {
        "text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white transition-colors text-xs"
    };

    rsx! {
        a {
            href: "#",
            class: "{class}",
            onclick: move |evt| {
                evt.prevent_default();
                on_click.call(());
            },
            {children}
        }
    }
}

/// Sun / moon button switching between light and dark theme
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let label = match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    rsx! {
        ChromelessButton {
            class: Some(
                "p-1.5 text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white transition-colors"
                    .to_string(),
            ),
            title: Some(label.to_string()),
            aria_label: Some(label.to_string()),
            onclick: move |_| on_toggle.call(()),
            match theme {
                Theme::Light => rsx! {
                    MoonIcon { class: "w-4 h-4" }
                },
                Theme::Dark => rsx! {
                    SunIcon { class: "w-4 h-4" }
                },
            }
        }
    }
}
