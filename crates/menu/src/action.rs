//! Menu actions and their registry

use std::fmt;

use crate::MenuError;

/// Zero-argument callable run when its entry is chosen
pub type Thunk<'a> = Box<dyn Fn() + 'a>;

/// What a menu entry does
pub enum Action<'a> {
    /// Run a callable, then show the menu again
    Call(Thunk<'a>),
    /// Leave the menu ("Back" in a submenu, "Exit" at the top level)
    Terminal,
}

impl Action<'_> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Terminal)
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Call(_) => f.write_str("Call(..)"),
            Action::Terminal => f.write_str("Terminal"),
        }
    }
}

/// Ordered, immutable set of labelled actions. Insertion order is display order.
#[derive(Debug)]
pub struct ActionRegistry<'a> {
    title: String,
    entries: Vec<(String, Action<'a>)>,
}

impl<'a> ActionRegistry<'a> {
    pub fn builder(title: impl Into<String>) -> MenuBuilder<'a> {
        MenuBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in display order, optionally without the terminal entry
    pub fn get_options(&self, include_terminal: bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, action)| include_terminal || !action.is_terminal())
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// Look up the action registered under exactly `label`
    pub fn get_action(&self, label: &str) -> Result<&Action<'a>, MenuError> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, action)| action)
            .ok_or_else(|| MenuError::NotFound(label.to_string()))
    }
}

/// Builder for [`ActionRegistry`]
pub struct MenuBuilder<'a> {
    title: String,
    entries: Vec<(String, Action<'a>)>,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry that runs `thunk`
    pub fn add_call<F>(mut self, label: impl Into<String>, thunk: F) -> Self
    where
        F: Fn() + 'a,
    {
        self.entries.push((label.into(), Action::Call(Box::new(thunk))));
        self
    }

    /// Append the back/exit entry
    pub fn add_terminal(mut self, label: impl Into<String>) -> Self {
        self.entries.push((label.into(), Action::Terminal));
        self
    }

    /// Freeze the menu.
    ///
    /// Fails on a repeated label or a second terminal entry.
    pub fn build(self) -> Result<ActionRegistry<'a>, MenuError> {
        let mut terminal: Option<&str> = None;
        for (i, (label, action)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(seen, _)| seen == label) {
                return Err(MenuError::DuplicateLabel {
                    menu: self.title.clone(),
                    label: label.clone(),
                });
            }
            if action.is_terminal() {
                if let Some(existing) = terminal {
                    return Err(MenuError::DuplicateTerminal {
                        menu: self.title.clone(),
                        existing: existing.to_string(),
                    });
                }
                terminal = Some(label);
            }
        }

        Ok(ActionRegistry {
            title: self.title,
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_options_keep_insertion_order() {
        let menu = MenuBuilder::new("build")
            .add_call("Build B", || {})
            .add_call("Build A", || {})
            .add_terminal("Back")
            .add_call("Build C", || {})
            .build()
            .unwrap();

        assert_eq!(menu.title(), "build");
        assert_eq!(
            menu.get_options(true),
            vec!["Build B", "Build A", "Back", "Build C"]
        );
        assert_eq!(menu.get_options(false), vec!["Build B", "Build A", "Build C"]);
    }

    #[test]
    fn test_every_option_resolves_to_its_action() {
        let calls = RefCell::new(Vec::new());
        for size in 0..6 {
            let mut builder = MenuBuilder::new(format!("menu {}", size));
            for i in 0..size {
                let calls = &calls;
                builder = builder.add_call(format!("entry {}", i), move || {
                    calls.borrow_mut().push(i)
                });
            }
            let menu = builder.add_terminal("Exit").build().unwrap();

            for (position, label) in menu.get_options(true).iter().enumerate() {
                calls.borrow_mut().clear();
                match menu.get_action(label).unwrap() {
                    Action::Call(thunk) => {
                        thunk();
                        assert_eq!(*calls.borrow(), vec![position]);
                    }
                    Action::Terminal => assert_eq!(label, "Exit"),
                }
            }
        }
    }

    #[test]
    fn test_unknown_label_fails_loudly() {
        let menu = MenuBuilder::new("main").add_terminal("Exit").build().unwrap();
        assert!(matches!(
            menu.get_action("Exit "),
            Err(MenuError::NotFound(label)) if label == "Exit "
        ));
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let result = MenuBuilder::new("main")
            .add_call("Build", || {})
            .add_terminal("Build")
            .build();
        assert!(matches!(
            result,
            Err(MenuError::DuplicateLabel { label, .. }) if label == "Build"
        ));
    }

    #[test]
    fn test_second_terminal_is_rejected() {
        let result = MenuBuilder::new("main")
            .add_terminal("Back")
            .add_terminal("Exit")
            .build();
        assert!(matches!(
            result,
            Err(MenuError::DuplicateTerminal { existing, .. }) if existing == "Back"
        ));
    }
}
