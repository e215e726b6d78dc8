//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - accessibility and disabled handling without
/// visual styling. Used by Button and by icon-only buttons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Black (white in dark mode) - primary actions like Apply, Post Job
    Primary,
    /// Bordered - secondary actions like Close
    Secondary,
    /// Text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Header chrome, text-xs
    Small,
    /// Modal actions
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "px-3 py-1.5 text-xs",
        ButtonSize::Medium => "px-6 py-3 rounded-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-black dark:bg-white text-white dark:text-black hover:bg-gray-800 dark:hover:bg-gray-100 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50"
        }
        ButtonVariant::Ghost => {
            "text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white"
        }
    };

    let base = "inline-flex items-center justify-center gap-2 font-medium transition-colors";
    let computed_class = format!("{base} {size_class} {variant_class}");

    rsx! {
        ChromelessButton { disabled, class: Some(computed_class), onclick, {children} }
    }
}
