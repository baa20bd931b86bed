//! Right-click menu for a link card
//!
//! Rendered at the pointer position with `position: fixed`. While open it
//! listens on the document so any click or Escape dismisses it.

use crate::components::icons::{PencilIcon, TrashIcon};
use crate::components::ChromelessButton;
use crate::stores::{ContextMenuState, ContextMenuStateStoreExt};
use crate::wasm_utils::{event_key, DocumentEventListener};
use dioxus::prelude::*;

/// Dismiss listeners, removed when dropped
struct DismissListeners {
    _click: DocumentEventListener,
    _keydown: DocumentEventListener,
}

#[component]
pub fn LinkContextMenu(
    state: ReadStore<ContextMenuState>,
    /// Called with the link id
    on_edit: EventHandler<String>,
    /// Called with the link id
    on_delete: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut dismiss_listeners: Signal<Option<DismissListeners>> = use_signal(|| None);

    use_effect(move || {
        let is_open = state.read().is_open();

        if !is_open {
            dismiss_listeners.set(None);
            return;
        }

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        let click = DocumentEventListener::new(
            document.clone(),
            "click",
            move |_: wasm_bindgen_x::JsValue| on_close.call(()),
        );
        let keydown =
            DocumentEventListener::new(document, "keydown", move |e: wasm_bindgen_x::JsValue| {
                if event_key(&e).as_deref() == Some("Escape") {
                    on_close.call(());
                }
            });

        dismiss_listeners.set(Some(DismissListeners {
            _click: click,
            _keydown: keydown,
        }));
    });

    let Some(target) = state.target().read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed z-50 bg-white dark:bg-gray-800 rounded-lg shadow-lg border border-gray-200 dark:border-gray-700 p-1 min-w-40",
            style: "position: fixed; left: {target.x}px; top: {target.y}px;",
            role: "menu",
            "data-testid": "link-context-menu",
            MenuItem {
                onclick: {
                    let id = target.link_id.clone();
                    move |_| {
                        on_edit.call(id.clone());
                        on_close.call(());
                    }
                },
                PencilIcon { class: "w-4 h-4" }
                span { "Edit" }
            }
            MenuItem {
                danger: true,
                onclick: {
                    let id = target.link_id.clone();
                    move |_| {
                        on_delete.call(id.clone());
                        on_close.call(());
                    }
                },
                TrashIcon { class: "w-4 h-4" }
                span { "Delete" }
            }
        }
    }
}

#[component]
fn MenuItem(
    /// Destructive action (red text)
    #[props(default)]
    danger: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "w-full text-left px-3 py-2 text-sm rounded-md transition-colors flex items-center gap-2";
    let variant = if danger {
        "text-red-500 hover:bg-red-500/10"
    } else {
        "text-gray-700 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("{base} {variant}")),
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}
