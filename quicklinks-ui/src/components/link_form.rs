//! Add/edit link modal
//!
//! Pure view over `LinkForm`: field edits come back through `on_change`
//! with the whole updated draft, and the parent decides what submit does.

use crate::components::icons::XIcon;
use crate::components::{Button, ButtonVariant, ChromelessButton, Modal, TextInput};
use dioxus::prelude::*;
use quicklinks_common::{LinkDraft, LinkForm};

#[component]
pub fn LinkFormModal(
    is_open: ReadSignal<bool>,
    form: LinkForm,
    on_change: EventHandler<LinkDraft>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let draft = form.draft.clone();
    let heading = form.heading();
    let submit_label = form.submit_label();

    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            form {
                class: "bg-white dark:bg-gray-800 rounded-lg p-6 w-[28rem] max-w-full mx-4 shadow-xl flex flex-col gap-4",
                "data-testid": "link-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "flex items-center justify-between",
                    h2 { class: "text-xl font-bold text-gray-900 dark:text-white",
                        "{heading}"
                    }
                    ChromelessButton {
                        class: Some("text-gray-400 hover:text-gray-600 dark:hover:text-gray-200".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_cancel.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }
                TextInput {
                    label: "Title",
                    required: true,
                    autofocus: true,
                    placeholder: Some("GitHub"),
                    value: draft.title.clone(),
                    on_input: {
                        let draft = draft.clone();
                        move |title: String| on_change.call(LinkDraft { title, ..draft.clone() })
                    },
                }
                TextInput {
                    label: "URL",
                    required: true,
                    placeholder: Some("github.com"),
                    value: draft.url.clone(),
                    on_input: {
                        let draft = draft.clone();
                        move |url: String| on_change.call(LinkDraft { url, ..draft.clone() })
                    },
                }
                TextInput {
                    label: "Description",
                    placeholder: Some("Optional"),
                    value: draft.description.clone(),
                    on_input: {
                        let draft = draft.clone();
                        move |description: String| {
                            on_change.call(LinkDraft { description, ..draft.clone() })
                        }
                    },
                }
                TextInput {
                    label: "Icon URL",
                    placeholder: Some("Leave blank to use the site's favicon"),
                    value: draft.icon.clone(),
                    on_input: {
                        let draft = draft.clone();
                        move |icon: String| on_change.call(LinkDraft { icon, ..draft.clone() })
                    },
                }
                if let Some(error) = form.error.clone() {
                    p { class: "text-sm text-red-500", role: "alert", "{error}" }
                }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: Some("submit"),
                        onclick: |_| {},
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
