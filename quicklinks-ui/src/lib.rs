//! quicklinks-ui - Dioxus components for the quick links dashboard
//!
//! Pure view components driven by props and callbacks, plus the small
//! reactive stores they share. The web crate owns the `LinkStore` and wires
//! these components to it.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
