//! Dashboard header: title, add button and theme toggle

use crate::components::icons::{MoonIcon, PlusIcon, RefreshIcon, SunIcon};
use crate::components::{Button, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;
use quicklinks_common::{Theme, ThemeIcon};

#[component]
pub fn DashboardHeader(
    theme: Theme,
    on_add: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let icon_button = "w-10 h-10 rounded-full flex items-center justify-center text-gray-600 hover:bg-gray-200 dark:text-gray-300 dark:hover:bg-gray-700 transition-colors";

    rsx! {
        header { class: "flex items-center justify-between mb-8",
            h1 { class: "text-3xl font-bold text-gray-900 dark:text-white", "Quick Links" }
            div { class: "flex items-center gap-2",
                ChromelessButton {
                    class: Some(icon_button.to_string()),
                    title: Some("Restore default links".to_string()),
                    aria_label: Some("Restore default links".to_string()),
                    onclick: move |_| on_reset.call(()),
                    RefreshIcon { class: "w-5 h-5" }
                }
                ChromelessButton {
                    id: Some("dark-mode-toggle".to_string()),
                    class: Some(icon_button.to_string()),
                    title: Some("Toggle dark mode".to_string()),
                    aria_label: Some("Toggle dark mode".to_string()),
                    onclick: move |_| on_toggle_theme.call(()),
                    if theme.icon() == ThemeIcon::Sun {
                        SunIcon { class: "w-5 h-5" }
                    } else {
                        MoonIcon { class: "w-5 h-5" }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_add.call(()),
                    PlusIcon { class: "w-4 h-4" }
                    "Add Link"
                }
            }
        }
    }
}
