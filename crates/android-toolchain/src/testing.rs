//! Test doubles shared by the component and orchestrator tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::rc::Rc;
use std::sync::Mutex;

use devconsole_core::{Invocation, ToolCommand, ToolInvoker};

use crate::component::{EnvComponent, Phase};
use crate::probe::EnvProbe;

/// Invoker answering from a table keyed by the space-joined argv.
/// Unscripted commands behave as if the program was missing.
#[derive(Default)]
pub struct ScriptedInvoker {
    responses: HashMap<String, (i32, String)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, argv: &str, code: i32, stdout: &str) -> Self {
        self.responses
            .insert(argv.to_string(), (code, stdout.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolInvoker for ScriptedInvoker {
    fn invoke(&self, command: &ToolCommand) -> Invocation {
        let argv = command.argv().join(" ");
        self.calls.lock().unwrap().push(argv.clone());
        match self.responses.get(&argv) {
            Some((code, stdout)) => Invocation::exited(*code, stdout.clone(), ""),
            None => Invocation::not_started(format!("unscripted command: {}", argv)),
        }
    }
}

/// Probe with a fixed set of variables and the real filesystem
#[derive(Default)]
pub struct VarProbe {
    vars: HashMap<String, String>,
}

impl VarProbe {
    pub fn with(mut self, name: &str, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(
            name.to_string(),
            value.as_ref().to_string_lossy().into_owned(),
        );
        self
    }
}

impl EnvProbe for VarProbe {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Shared record of which component ran which phase, in call order
#[derive(Clone, Default)]
pub struct PhaseLog(Rc<RefCell<Vec<(Phase, String)>>>);

impl PhaseLog {
    fn record(&self, phase: Phase, name: &str) {
        self.0.borrow_mut().push((phase, name.to_string()));
    }

    /// Names of the components that ran `phase`
    pub fn calls(&self, phase: Phase) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|(p, _)| *p == phase)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

/// Scriptable component
pub struct Fake {
    name: String,
    log: PhaseLog,
    prerequisites: bool,
    configured: Cell<bool>,
    fixable: bool,
}

impl Fake {
    fn new(name: &str, log: &PhaseLog, configured: bool, fixable: bool) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            prerequisites: true,
            configured: Cell::new(configured),
            fixable,
        }
    }

    /// Already in its end state
    pub fn valid(name: &str, log: &PhaseLog) -> Self {
        Self::new(name, log, true, true)
    }

    /// Invalid until set up, setup succeeds
    pub fn fixable(name: &str, log: &PhaseLog) -> Self {
        Self::new(name, log, false, true)
    }

    /// Invalid and setup fails
    pub fn broken(name: &str, log: &PhaseLog) -> Self {
        Self::new(name, log, false, false)
    }

    pub fn without_prerequisites(mut self) -> Self {
        self.prerequisites = false;
        self
    }
}

impl EnvComponent for Fake {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate_pre_set_up(&self) -> bool {
        self.log.record(Phase::PreSetUpValidation, &self.name);
        self.prerequisites
    }

    fn set_up(&self) -> bool {
        self.log.record(Phase::SetUp, &self.name);
        if self.fixable {
            self.configured.set(true);
        }
        self.fixable
    }

    fn validate_set_up(&self) -> bool {
        self.log.record(Phase::SetUpValidation, &self.name);
        self.configured.get()
    }
}
