//! Modal component using native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape-to-close
//! for free. The dialog manages its own display, so no display classes go on
//! the `<dialog>` itself; layout lives on the inner container.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks
//! the `open` attribute first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on a DOM element by name
fn call_method(element: &web_sys_x::Element, name: &str) {
    if let Ok(method) = js_sys_x::Reflect::get(element, &name.into()) {
        if let Some(func) = method.dyn_ref::<js_sys_x::Function>() {
            let _ = func.call0(element);
        }
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Called on Escape or backdrop click
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");
        if is_open && !is_dialog_open {
            call_method(&element, "showModal");
        } else if !is_open && is_dialog_open {
            call_method(&element, "close");
        }
    });

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/60",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
