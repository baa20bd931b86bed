//! Confirm dialog view component

use crate::components::{Button, ButtonVariant, Modal};
use dioxus::prelude::*;

/// Yes/no prompt. Blocks the page behind it until answered.
#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            div {
                class: "bg-white dark:bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 shadow-xl",
                role: "alertdialog",
                h2 { class: "text-xl font-bold text-gray-900 dark:text-white mb-4", "{title}" }
                p { class: "text-gray-600 dark:text-gray-300 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
