//! Interactive selection
//!
//! The runner only needs something that, given a title and an ordered list of
//! labels, blocks until the user has chosen. [`DialoguerPicker`] is the
//! terminal implementation.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

/// Picker errors
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("terminal interaction failed: {0}")]
    Terminal(String),
    #[error("nothing to choose from in '{0}'")]
    NoOptions(String),
}

impl From<dialoguer::Error> for PickerError {
    fn from(e: dialoguer::Error) -> Self {
        PickerError::Terminal(e.to_string())
    }
}

/// Blocking selection among labels
pub trait Picker {
    /// Return exactly one of `options`
    fn pick_one(&self, title: &str, options: &[String]) -> Result<String, PickerError>;

    /// Return zero or more of `options`, in the order the picker decides
    fn pick_many(&self, title: &str, options: &[String]) -> Result<Vec<String>, PickerError>;
}

/// Terminal picker built on dialoguer's `Select` and `MultiSelect`
pub struct DialoguerPicker {
    theme: ColorfulTheme,
}

impl Default for DialoguerPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerPicker {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Picker for DialoguerPicker {
    fn pick_one(&self, title: &str, options: &[String]) -> Result<String, PickerError> {
        if options.is_empty() {
            return Err(PickerError::NoOptions(title.to_string()));
        }

        let selection = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(options)
            .default(0)
            .interact()?;

        Ok(options[selection].clone())
    }

    fn pick_many(&self, title: &str, options: &[String]) -> Result<Vec<String>, PickerError> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = format!("{} (space selects, enter confirms, none goes back)", title);
        let selection = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .interact()?;

        Ok(selection.into_iter().map(|i| options[i].clone()).collect())
    }
}
