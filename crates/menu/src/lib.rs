//! Menus for devconsole
//!
//! A menu is an [`ActionRegistry`]: an ordered, immutable list of labelled
//! actions built with [`MenuBuilder`]. A [`MenuRunner`] presents it through a
//! [`Picker`] and dispatches the chosen actions until the user goes back.

pub mod action;
pub mod picker;
pub mod runner;

pub use action::{Action, ActionRegistry, MenuBuilder, Thunk};
pub use picker::{DialoguerPicker, Picker, PickerError};
pub use runner::MenuRunner;

/// Menu errors
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("no menu entry labelled '{0}'")]
    NotFound(String),
    #[error("duplicate menu label '{label}' in menu '{menu}'")]
    DuplicateLabel { menu: String, label: String },
    #[error("menu '{menu}' already has terminal entry '{existing}'")]
    DuplicateTerminal { menu: String, existing: String },
    #[error("picker failed: {0}")]
    Picker(#[from] PickerError),
}
