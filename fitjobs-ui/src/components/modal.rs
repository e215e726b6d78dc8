//! Modal component using native HTML `<dialog>` element
//!
//! `showModal()` puts the dialog in the browser's top layer, so a second modal
//! opened from inside the first (job detail -> application) stacks above it
//! without z-index juggling. The top-most dialog traps focus and receives
//! Escape.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks the
//! `open` attribute before calling it. Dialog's `oncancel` only fires from user
//! actions (Escape), never from our own `close()` calls.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

/// Counter for generating unique modal IDs
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method (`showModal` / `close`) on the dialog element
fn call_dialog_method(element: &web_sys::Element, method: &str) {
    let Ok(func) = js_sys::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = func.dyn_ref::<js_sys::Function>() {
        if let Err(e) = func.call0(element) {
            tracing::warn!("dialog.{method}() failed: {:?}", e);
        }
    }
}

/// Modal component that wraps content in a native `<dialog>` element
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called when the modal should close (Escape key or backdrop click)
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        // Effect may run more than once per state
        let is_dialog_open = element.has_attribute("open");
        match (is_open, is_dialog_open) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    // Do NOT put display classes (flex, block, grid) on the dialog itself: they
    // override the native display:none of a closed dialog. Layout goes on the
    // inner container.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent max-w-none max-h-none backdrop:bg-black/50 backdrop:backdrop-blur-sm",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    // Content clicks must not reach the backdrop handler
                    div {
                        class: "contents",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
