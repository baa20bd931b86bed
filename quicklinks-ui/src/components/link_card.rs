//! Link card component - pure view with callbacks

use crate::stores::ContextMenuTarget;
use dioxus::prelude::*;
use quicklinks_common::CardView;
use tracing::debug;

/// One bookmark in the grid.
///
/// Clicking calls `on_open` with the link id; right-clicking suppresses the
/// browser menu and reports the pointer position through `on_context_menu`.
#[component]
pub fn LinkCard(
    card: CardView,
    on_open: EventHandler<String>,
    on_context_menu: EventHandler<ContextMenuTarget>,
) -> Element {
    // Source that failed to load; compared against the current source so an
    // edited icon gets a fresh attempt
    let mut failed_src: Signal<Option<String>> = use_signal(|| None);

    let icon_src = if failed_src().as_deref() == Some(card.icon_src.as_str()) {
        card.fallback_icon_src.clone()
    } else {
        card.icon_src.clone()
    };

    let card_class = "bg-white dark:bg-gray-800 rounded-xl shadow hover:shadow-lg hover:-translate-y-0.5 transition-all duration-300 cursor-pointer p-5 flex flex-col items-center text-center gap-3";

    rsx! {
        div {
            class: "{card_class}",
            role: "link",
            title: "{card.href}",
            "data-testid": "link-card",
            onclick: {
                let id = card.id.clone();
                move |_| on_open.call(id.clone())
            },
            oncontextmenu: {
                let id = card.id.clone();
                move |evt: MouseEvent| {
                    evt.prevent_default();
                    let point = evt.client_coordinates();
                    on_context_menu
                        .call(ContextMenuTarget {
                            link_id: id.clone(),
                            x: point.x,
                            y: point.y,
                        });
                }
            },
            div { class: "w-12 h-12 rounded-lg bg-gray-100 dark:bg-gray-700 flex items-center justify-center overflow-hidden",
                img {
                    src: "{icon_src}",
                    alt: "{card.title} icon",
                    class: "w-8 h-8 object-contain",
                    onerror: {
                        let src = card.icon_src.clone();
                        move |_| {
                            if failed_src().as_deref() != Some(src.as_str()) {
                                debug!(src = %src, "Icon failed to load, using fallback");
                                failed_src.set(Some(src.clone()));
                            }
                        }
                    },
                }
            }
            h3 {
                class: "font-semibold text-gray-900 dark:text-white truncate w-full",
                "{card.title}"
            }
            p {
                class: "text-sm text-gray-500 dark:text-gray-400 truncate w-full",
                title: "{card.subtitle}",
                "{card.subtitle}"
            }
        }
    }
}
