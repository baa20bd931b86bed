//! Labelled text field used by the link form

use dioxus::prelude::*;

#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    let class = "w-full px-3 py-2 rounded-lg border border-gray-300 bg-white text-gray-900 placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500/50 dark:bg-gray-800 dark:border-gray-600 dark:text-gray-100";

    rsx! {
        label { class: "flex flex-col gap-1 text-sm font-medium text-gray-700 dark:text-gray-300",
            span {
                "{label}"
                if required {
                    span { class: "text-red-500 ml-0.5", "*" }
                }
            }
            // Plain text even for URLs: the browser's url validation would
            // reject scheme-less input that the store normalizes itself
            input {
                r#type: "text",
                class: "{class}",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}
