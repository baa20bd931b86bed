//! Dashboard UI components

pub mod button;
pub mod confirm_dialog;
pub mod context_menu;
pub mod header;
pub mod icons;
pub mod link_card;
pub mod link_form;
pub mod link_grid;
pub mod modal;
pub mod text_input;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use confirm_dialog::ConfirmDialogView;
pub use context_menu::LinkContextMenu;
pub use header::DashboardHeader;
pub use icons::{
    LinkIcon, MoonIcon, PencilIcon, PlusIcon, RefreshIcon, SunIcon, TrashIcon, XIcon,
};
pub use link_card::LinkCard;
pub use link_form::LinkFormModal;
pub use link_grid::{EmptyState, LinkGridView};
pub use modal::Modal;
pub use text_input::TextInput;
