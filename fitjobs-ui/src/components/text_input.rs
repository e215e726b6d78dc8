//! Filter inputs: text field and select, each with a leading icon

use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full pl-8 pr-3 py-1.5 border border-gray-200 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:border-gray-400 dark:focus:border-gray-500 transition-colors text-xs";

/// Text input with an icon slot on the left
#[component]
pub fn IconTextInput(
    value: String,
    on_input: EventHandler<String>,
    icon: Element,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        div { class: "relative",
            div { class: "absolute left-2 top-1/2 -translate-y-1/2 text-gray-400 dark:text-gray-500 pointer-events-none",
                {icon}
            }
            input {
                r#type: "text",
                class: "{FIELD_CLASS} placeholder-gray-500 dark:placeholder-gray-400",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Native select with an icon slot on the left.
///
/// The first option is always the "any" entry with an empty value.
#[component]
pub fn IconSelect(
    value: String,
    on_change: EventHandler<String>,
    icon: Element,
    /// Label of the empty-value option, e.g. "All Job Types"
    any_label: &'static str,
    /// Selectable values; each is used as both value and label
    options: Vec<String>,
) -> Element {
    rsx! {
        div { class: "relative",
            div { class: "absolute left-2 top-1/2 -translate-y-1/2 text-gray-400 dark:text-gray-500 pointer-events-none",
                {icon}
            }
            select {
                class: "{FIELD_CLASS} appearance-none cursor-pointer",
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                option { value: "", selected: value.is_empty(), "{any_label}" }
                for opt in options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == value,
                        "{opt}"
                    }
                }
            }
        }
    }
}
