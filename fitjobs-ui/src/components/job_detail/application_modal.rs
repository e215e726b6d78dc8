//! Application modal
//!
//! Submitting an application is handled outside this crate; the modal tells
//! the applicant which posting they are applying for and asks them to sign in.

use crate::components::icons::XIcon;
use crate::components::login_button::LoginButton;
use crate::components::{ChromelessButton, Modal};
use dioxus::prelude::*;
use fitjobs_common::{Job, OAuthProvider, SignInStatus};

#[component]
pub fn ApplicationModal(
    is_open: ReadSignal<bool>,
    job: Job,
    on_close: EventHandler<()>,
    sign_in_status: SignInStatus,
    on_sign_in: EventHandler<OAuthProvider>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: move |_| on_close.call(()),
            div {
                class: "bg-white dark:bg-gray-800 rounded-lg max-w-md w-full shadow-2xl",
                "data-testid": "application-modal",
                div { class: "flex items-center justify-between p-6 border-b border-gray-200 dark:border-gray-700",
                    div {
                        h2 { class: "text-lg font-bold text-gray-900 dark:text-white",
                            "Apply for {job.title}"
                        }
                        p { class: "text-sm text-gray-600 dark:text-gray-300", "{job.company}" }
                    }
                    ChromelessButton {
                        class: Some(
                            "p-2 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-lg transition-colors"
                                .to_string(),
                        ),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5 text-gray-500 dark:text-gray-400" }
                    }
                }
                div { class: "p-6 space-y-4",
                    p { class: "text-sm text-gray-600 dark:text-gray-300",
                        "Sign in to send your profile to {job.company}."
                    }
                    LoginButton {
                        provider: OAuthProvider::Google,
                        status: sign_in_status,
                        on_login: on_sign_in,
                    }
                }
            }
        }
    }
}
