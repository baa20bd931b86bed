use crate::storage::LocalStorage;
use crate::theme::apply_theme;
use dioxus::prelude::*;
use quicklinks_common::{
    build_view, Bookmark, LinkForm, LinkStore, LinksConfig, ThemePreference,
};
use quicklinks_ui::stores::{
    ContextMenuState, ContextMenuTarget, DashboardState, DashboardStateStoreExt,
};
use quicklinks_ui::{
    ConfirmDialogView, DashboardHeader, LinkContextMenu, LinkFormModal, LinkGridView,
};
use tracing::{error, info, warn};

/// Send the browser to a link's URL
fn navigate_to(href: &str) {
    let Some(window) = web_sys_x::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        warn!("Failed to navigate to {}: {:?}", href, e);
    }
}

#[component]
pub fn Dashboard() -> Element {
    let config: LinksConfig = use_context();

    let mut links = use_signal({
        let config = config.clone();
        move || LinkStore::load(LocalStorage::new(), config)
    });
    let mut theme = use_signal({
        let config = config.clone();
        move || ThemePreference::load(LocalStorage::new(), &config)
    });

    let mut state = use_store(move || DashboardState {
        grid: build_view(links.peek().bookmarks(), &config),
        theme: theme.peek().theme(),
        pending_delete: None,
    });
    let mut menu = use_store(ContextMenuState::default);
    let mut form = use_signal(LinkForm::default);
    let mut confirm_reset = use_signal(|| false);

    // Rebuild the grid from the store after every mutation, and apply the
    // saved theme once on mount
    use_effect(move || {
        let config = links.peek().config().clone();
        links.write().subscribe(move |bookmarks: &[Bookmark]| {
            state.grid().set(build_view(bookmarks, &config));
        });
        apply_theme(theme.peek().theme());
    });

    let form_open = use_memo(move || form.read().is_open());
    let delete_open = use_memo(move || state.pending_delete().read().is_some());
    let pending_title = state
        .pending_delete()
        .read()
        .as_ref()
        .map(|pending| pending.title().to_string())
        .unwrap_or_default();

    let current_theme = *state.theme().read();
    let current_form = form.read().clone();

    rsx! {
        div { class: "container mx-auto px-4 py-10",
            DashboardHeader {
                theme: current_theme,
                on_add: move |_| form.write().open_add(),
                on_toggle_theme: move |_| {
                    let result = theme.write().toggle();
                    let new_theme = theme.peek().theme();
                    if let Err(e) = result {
                        warn!("Theme not saved: {}", e);
                    }
                    apply_theme(new_theme);
                    state.theme().set(new_theme);
                },
                on_reset: move |_| confirm_reset.set(true),
            }
            LinkGridView {
                state,
                on_open: move |id: String| {
                    let links = links.peek();
                    if let Some(link) = links.find_by_id(&id) {
                        info!("Navigating to {}", link.title);
                        navigate_to(&link.url);
                    }
                },
                on_context_menu: move |target: ContextMenuTarget| {
                    menu.write().open_at(target.link_id, target.x, target.y);
                },
                on_empty_action: move |_| form.write().open_add(),
            }
        }

        LinkContextMenu {
            state: menu,
            on_edit: move |id: String| {
                let links = links.peek();
                if let Some(link) = links.find_by_id(&id) {
                    form.write().open_edit(link);
                }
            },
            on_delete: move |id: String| {
                let pending = links.peek().request_delete(&id);
                if pending.is_some() {
                    state.pending_delete().set(pending);
                }
            },
            on_close: move |_| menu.write().close(),
        }

        LinkFormModal {
            is_open: form_open,
            form: current_form,
            on_change: move |draft| {
                let mut form = form.write();
                form.draft = draft;
                form.error = None;
            },
            on_submit: move |_| {
                let mut store = links.write();
                let result = form.write().submit(&mut *store);
                if let Err(e) = result {
                    warn!("Link not saved: {}", e);
                }
            },
            on_cancel: move |_| form.write().close(),
        }

        ConfirmDialogView {
            is_open: delete_open,
            title: "Delete link".to_string(),
            message: format!("Are you sure you want to delete \"{pending_title}\"?"),
            on_confirm: move |_| {
                let pending = state.pending_delete().read().clone();
                state.pending_delete().set(None);
                if let Some(token) = pending {
                    if let Err(e) = links.write().confirm_delete(token) {
                        error!("Failed to delete link: {}", e);
                    }
                }
            },
            on_cancel: move |_| state.pending_delete().set(None),
        }

        ConfirmDialogView {
            is_open: confirm_reset,
            title: "Restore default links".to_string(),
            message: "This replaces all of your links with the default set.".to_string(),
            confirm_label: "Restore".to_string(),
            on_confirm: move |_| {
                confirm_reset.set(false);
                if let Err(e) = links.write().reset_to_defaults() {
                    error!("Failed to restore defaults: {}", e);
                }
            },
            on_cancel: move |_| confirm_reset.set(false),
        }
    }
}
