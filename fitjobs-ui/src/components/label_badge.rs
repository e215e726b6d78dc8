//! Coloured label badges (category, job type, experience, REMOTE)

use dioxus::prelude::*;
use fitjobs_common::BadgeStyle;

/// Badge size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeSize {
    /// Square corners, text-xs; used on job cards
    #[default]
    Compact,
    /// Pill shape, text-sm; used in the detail modal
    Large,
}

impl BadgeSize {
    fn classes(self) -> &'static str {
        match self {
            BadgeSize::Compact => "px-2 py-1 rounded text-xs",
            BadgeSize::Large => "px-3 py-1 rounded-full text-sm",
        }
    }
}

/// Bordered badge coloured by `style`
#[component]
pub fn LabelBadge(label: String, style: BadgeStyle, #[props(default)] size: BadgeSize) -> Element {
    rsx! {
        span {
            class: "inline-block font-medium border {size.classes()} {style.classes()}",
            "data-testid": "label-badge",
            "{label}"
        }
    }
}

/// Grey "REMOTE" tag
#[component]
pub fn RemoteTag(#[props(default)] size: BadgeSize) -> Element {
    let text_size = match size {
        BadgeSize::Compact => "px-2 py-1 rounded text-[10px]",
        BadgeSize::Large => "px-3 py-1 rounded-full text-sm",
    };

    rsx! {
        span { class: "bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-300 font-medium {text_size}",
            "REMOTE"
        }
    }
}
