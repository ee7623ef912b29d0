//! This crate contains all shared UI for the workspace.

pub mod components;

mod back_link;
pub use back_link::{BackLink, BackTarget, PageHeader};

mod client;
pub use client::{use_api, use_ui_config, ApiProvider};

mod delete_confirm;
pub use delete_confirm::{
    confirm_window_ms, use_delete_confirm, ConfirmDeleteButton, DeleteConfirmHandle,
};

mod navbar;
pub use navbar::{nav_link_active, Navbar, NAV_LINKS};

mod sleep;
pub use sleep::sleep_ms;
