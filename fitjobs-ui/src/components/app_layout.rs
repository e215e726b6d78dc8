//! App layout view component
//!
//! Provides the overall page structure with slots for the header and main
//! content.

use dioxus::prelude::*;
use fitjobs_common::Theme;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Active theme; the `dark` class is applied at this root
    theme: Theme,
    /// Optional header at the top
    #[props(default)]
    header: Option<Element>,
) -> Element {
    rsx! {
        div { class: "{theme.root_class()}",
            div { class: "min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950",
                if let Some(h) = header {
                    {h}
                }
                main { class: "flex-1", {children} }
            }
        }
    }
}
