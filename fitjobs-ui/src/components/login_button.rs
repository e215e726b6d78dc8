//! OAuth sign-in button

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;
use fitjobs_common::{OAuthProvider, SignInStatus};

/// "Sign in with {provider}" button
///
/// Starting the sign-in is the caller's job; this view disables itself while
/// the redirect is pending and shows the failure message if there is one.
#[component]
pub fn LoginButton(
    provider: OAuthProvider,
    status: SignInStatus,
    on_login: EventHandler<OAuthProvider>,
) -> Element {
    let pending = status.is_pending();
    let label = if pending {
        format!("Redirecting to {provider}...")
    } else {
        format!("Sign in with {provider}")
    };

    rsx! {
        div { class: "space-y-2",
            button {
                r#type: "button",
                class: "w-full bg-blue-600 hover:bg-blue-500 text-white px-4 py-2 rounded disabled:opacity-50 disabled:cursor-not-allowed",
                "data-testid": "login-button",
                disabled: pending,
                onclick: move |_| {
                    if !pending {
                        on_login.call(provider);
                    }
                },
                "{label}"
            }
            if let Some(message) = status.error() {
                p { class: "flex items-center gap-2 text-xs text-red-600 dark:text-red-400",
                    AlertTriangleIcon { class: "w-3 h-3 flex-shrink-0" }
                    "{message}"
                }
            }
        }
    }
}
