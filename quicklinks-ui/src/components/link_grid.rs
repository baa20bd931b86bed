//! Link grid view component - pure rendering from the card view model
//!
//! Accepts `ReadStore<DashboardState>` and reads only the `grid` lens. The
//! grid is rebuilt from scratch whenever the view model changes.

use crate::components::icons::{LinkIcon, PlusIcon};
use crate::components::link_card::LinkCard;
use crate::components::{Button, ButtonVariant};
use crate::stores::{ContextMenuTarget, DashboardState, DashboardStateStoreExt};
use dioxus::prelude::*;
use quicklinks_common::{CardView, GridView};

#[component]
pub fn LinkGridView(
    state: ReadStore<DashboardState>,
    on_open: EventHandler<String>,
    on_context_menu: EventHandler<ContextMenuTarget>,
    // Empty state action (open the add form)
    on_empty_action: EventHandler<()>,
) -> Element {
    let grid = state.grid().read().clone();

    match grid {
        GridView::Empty => rsx! {
            EmptyState { on_action: on_empty_action }
        },
        GridView::Cards(cards) => rsx! {
            CardGrid { cards, on_open, on_context_menu }
        },
    }
}

#[component]
fn CardGrid(
    cards: Vec<CardView>,
    on_open: EventHandler<String>,
    on_context_menu: EventHandler<ContextMenuTarget>,
) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6",
            "data-testid": "link-grid",
            for card in cards {
                LinkCard {
                    key: "{card.id}",
                    card,
                    on_open,
                    on_context_menu,
                }
            }
        }
    }
}

/// Shown in place of the grid when there are no links
#[component]
pub fn EmptyState(on_action: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-16", "data-testid": "empty-state",
            div { class: "text-gray-400 mb-4",
                LinkIcon { class: "w-16 h-16 mx-auto" }
            }
            h2 { class: "text-2xl font-bold text-gray-700 dark:text-gray-300 mb-2",
                "No links yet"
            }
            p { class: "text-gray-500 mb-6", "Add your first link to get started." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_action.call(()),
                PlusIcon { class: "w-4 h-4" }
                "Add Link"
            }
        }
    }
}
