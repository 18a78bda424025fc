//! Recording invoker for build step tests

use std::sync::Mutex;

use devconsole_core::{Invocation, ToolCommand, ToolInvoker};

/// Succeeds for every command except those whose argv contains `fail_on`
#[derive(Default)]
pub struct RecordingInvoker {
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingInvoker {
    pub fn failing_on(pattern: &str) -> Self {
        Self {
            fail_on: Some(pattern.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolInvoker for RecordingInvoker {
    fn invoke(&self, command: &ToolCommand) -> Invocation {
        let argv = command.argv().join(" ");
        self.calls.lock().unwrap().push(argv.clone());
        match &self.fail_on {
            Some(pattern) if argv.contains(pattern.as_str()) => Invocation::exited(1, "", "boom"),
            _ => Invocation::exited(0, "", ""),
        }
    }
}
