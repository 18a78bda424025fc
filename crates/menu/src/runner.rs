//! Menu execution
//!
//! Single-select menus loop until their terminal entry is chosen. Multi-select
//! menus loop until an empty selection comes back. Actions report their own
//! success or failure; the runner only dispatches.

use tracing::{debug, error, warn};

use crate::action::{Action, ActionRegistry};
use crate::picker::Picker;
use crate::MenuError;

/// Drives menus through a [`Picker`]
#[derive(Clone, Copy)]
pub struct MenuRunner<'p> {
    picker: &'p dyn Picker,
}

impl<'p> MenuRunner<'p> {
    pub fn new(picker: &'p dyn Picker) -> Self {
        Self { picker }
    }

    /// Run a single-select menu until its terminal entry is chosen.
    ///
    /// Only a picker failure ends the loop early; unknown labels are reported
    /// and the menu is shown again.
    pub fn run_single(&self, menu: &ActionRegistry<'_>) -> Result<(), MenuError> {
        let options = menu.get_options(true);
        if options.is_empty() {
            warn!("Menu '{}' has no entries", menu.title());
            return Ok(());
        }

        loop {
            let label = self.picker.pick_one(menu.title(), &options)?;
            debug!("Menu '{}': selected '{}'", menu.title(), label);

            match menu.get_action(&label) {
                Ok(Action::Terminal) => return Ok(()),
                Ok(Action::Call(thunk)) => thunk(),
                Err(e) => report_lookup_failure(menu, &e),
            }
        }
    }

    /// Run a multi-select menu until nothing is selected.
    ///
    /// Selected actions run in the order the picker returned them, each to
    /// completion, whatever the previous one reported.
    pub fn run_multi(&self, menu: &ActionRegistry<'_>) -> Result<(), MenuError> {
        let options = menu.get_options(false);
        if options.is_empty() {
            warn!("Menu '{}' has no selectable entries", menu.title());
            return Ok(());
        }

        loop {
            let labels = self.picker.pick_many(menu.title(), &options)?;
            if labels.is_empty() {
                return Ok(());
            }
            debug!("Menu '{}': selected {:?}", menu.title(), labels);

            for label in &labels {
                match menu.get_action(label) {
                    Ok(Action::Call(thunk)) => thunk(),
                    Ok(Action::Terminal) => {}
                    Err(e) => report_lookup_failure(menu, &e),
                }
            }
        }
    }
}

fn report_lookup_failure(menu: &ActionRegistry<'_>, e: &MenuError) {
    error!("Menu '{}': {}", menu.title(), e);
    println!("\n❌ Menu '{}': {}", menu.title(), e);
}
