//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Generic error display box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-2 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-red-700 dark:text-red-300 px-4 py-3 rounded mb-4 text-sm",
            role: "alert",
            AlertTriangleIcon { class: "w-4 h-4 mt-0.5 flex-shrink-0" }
            p { "{message}" }
        }
    }
}
