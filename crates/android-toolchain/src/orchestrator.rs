//! Environment Orchestrator
//!
//! Runs a set of components through the pre-check → setup → post-check
//! protocol, strictly one component at a time, and aggregates the outcome.

use serde::Serialize;
use tracing::{info, warn};

use devconsole_core::status::{marker, report};

use crate::component::{EnvComponent, Phase};

/// Result of one component in one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOutcome {
    pub component: String,
    pub phase: Phase,
    pub success: bool,
}

/// Overall result of an orchestration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunOutcome {
    /// A pre-setup validation failed; nothing was set up
    PreconditionFailed,
    /// Every component was already valid; nothing was set up
    AlreadyConfigured,
    /// Every component that needed setup was set up
    Configured,
    /// At least one setup failed
    SetupFailed,
    /// Validation only: every component is valid
    Valid,
    /// Validation only: at least one component is invalid
    Invalid,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RunOutcome::AlreadyConfigured | RunOutcome::Configured | RunOutcome::Valid
        )
    }
}

/// Per-run record of which phases ran and how each component fared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentRunReport {
    pub outcome: RunOutcome,
    pub success: bool,
    pub pre_set_up: Vec<ComponentOutcome>,
    pub validation: Vec<ComponentOutcome>,
    pub set_up: Vec<ComponentOutcome>,
}

impl EnvironmentRunReport {
    fn new(outcome: RunOutcome) -> Self {
        Self {
            outcome,
            success: outcome.is_success(),
            pre_set_up: Vec::new(),
            validation: Vec::new(),
            set_up: Vec::new(),
        }
    }

    /// Components whose pre-setup validation failed
    pub fn failed_preconditions(&self) -> Vec<&str> {
        failed(&self.pre_set_up)
    }

    /// Components that were not valid before setup
    pub fn needed_set_up(&self) -> Vec<&str> {
        self.set_up.iter().map(|o| o.component.as_str()).collect()
    }

    /// Components whose setup failed
    pub fn failed_set_up(&self) -> Vec<&str> {
        failed(&self.set_up)
    }

    /// Components that failed validation
    pub fn invalid(&self) -> Vec<&str> {
        failed(&self.validation)
    }
}

fn failed(outcomes: &[ComponentOutcome]) -> Vec<&str> {
    outcomes
        .iter()
        .filter(|o| !o.success)
        .map(|o| o.component.as_str())
        .collect()
}

/// Sequences components through the lifecycle protocol
pub struct EnvironmentOrchestrator {
    components: Vec<Box<dyn EnvComponent>>,
}

impl EnvironmentOrchestrator {
    pub fn new(components: Vec<Box<dyn EnvComponent>>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Box<dyn EnvComponent>] {
        &self.components
    }

    fn run_phase<'c>(
        components: impl IntoIterator<Item = &'c Box<dyn EnvComponent>>,
        phase: Phase,
    ) -> Vec<ComponentOutcome> {
        components
            .into_iter()
            .map(|component| {
                let success = match phase {
                    Phase::PreSetUpValidation => component.validate_pre_set_up(),
                    Phase::SetUp => component.set_up(),
                    Phase::SetUpValidation => component.validate_set_up(),
                };
                ComponentOutcome {
                    component: component.name().to_string(),
                    phase,
                    success,
                }
            })
            .collect()
    }

    /// Bring the environment into its configured state.
    ///
    /// All pre-setup validations run first and any failure aborts before
    /// anything is mutated. Setup then runs only on components that do not
    /// validate; successful setups are kept even if a later one fails.
    pub fn set_up(&self) -> EnvironmentRunReport {
        info!("Setting up environment ({} components)", self.components.len());

        let pre_set_up = Self::run_phase(&self.components, Phase::PreSetUpValidation);
        let preconditions_hold = pre_set_up.iter().all(|o| o.success);
        report("Pre-setup validation", preconditions_hold);
        if !preconditions_hold {
            let mut run = EnvironmentRunReport::new(RunOutcome::PreconditionFailed);
            run.pre_set_up = pre_set_up;
            warn!(
                "Pre-setup validation failed for {:?}",
                run.failed_preconditions()
            );
            return run;
        }

        let validation = Self::run_phase(&self.components, Phase::SetUpValidation);
        let all_valid = validation.iter().all(|o| o.success);
        report("Setup validation", all_valid);
        if all_valid {
            let mut run = EnvironmentRunReport::new(RunOutcome::AlreadyConfigured);
            run.pre_set_up = pre_set_up;
            run.validation = validation;
            info!("Environment already configured, nothing to set up");
            return run;
        }

        let needing_set_up = self
            .components
            .iter()
            .zip(&validation)
            .filter(|(_, outcome)| !outcome.success)
            .map(|(component, _)| component);
        let set_up = Self::run_phase(needing_set_up, Phase::SetUp);
        let configured = set_up.iter().all(|o| o.success);
        report("Environment setup", configured);

        let mut run = EnvironmentRunReport::new(if configured {
            RunOutcome::Configured
        } else {
            RunOutcome::SetupFailed
        });
        run.pre_set_up = pre_set_up;
        run.validation = validation;
        run.set_up = set_up;
        info!(
            "Environment setup finished: needed {:?}, failed {:?}",
            run.needed_set_up(),
            run.failed_set_up()
        );
        run
    }

    /// Check every component without changing anything
    pub fn validate(&self) -> EnvironmentRunReport {
        info!("Validating environment ({} components)", self.components.len());

        let validation = Self::run_phase(&self.components, Phase::SetUpValidation);
        let valid = validation.iter().all(|o| o.success);

        println!();
        for outcome in &validation {
            println!("{} {}", marker(outcome.success), outcome.component);
        }
        report("Environment validation", valid);

        let mut run = EnvironmentRunReport::new(if valid {
            RunOutcome::Valid
        } else {
            RunOutcome::Invalid
        });
        run.validation = validation;
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fake, PhaseLog};

    fn orchestrator(fakes: Vec<Fake>) -> EnvironmentOrchestrator {
        EnvironmentOrchestrator::new(
            fakes
                .into_iter()
                .map(|f| Box::new(f) as Box<dyn EnvComponent>)
                .collect(),
        )
    }

    #[test]
    fn test_already_configured_performs_no_set_up() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![
            Fake::valid("A", &log),
            Fake::valid("B", &log),
        ])
        .set_up();

        assert_eq!(run.outcome, RunOutcome::AlreadyConfigured);
        assert!(run.success);
        assert!(log.calls(Phase::SetUp).is_empty());
        assert!(run.set_up.is_empty());
    }

    #[test]
    fn test_only_invalid_components_are_set_up() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![
            Fake::valid("C1", &log),
            Fake::fixable("C2", &log),
        ])
        .set_up();

        assert_eq!(log.calls(Phase::SetUp), vec!["C2"]);
        assert_eq!(run.outcome, RunOutcome::Configured);
        assert!(run.success);
        assert_eq!(run.needed_set_up(), vec!["C2"]);
    }

    #[test]
    fn test_failed_precondition_prevents_any_set_up() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![
            Fake::fixable("A", &log).without_prerequisites(),
            Fake::fixable("B", &log),
        ])
        .set_up();

        assert_eq!(run.outcome, RunOutcome::PreconditionFailed);
        assert!(!run.success);
        assert_eq!(run.failed_preconditions(), vec!["A"]);
        // every pre-check still runs, nothing else does
        assert_eq!(log.calls(Phase::PreSetUpValidation), vec!["A", "B"]);
        assert!(log.calls(Phase::SetUpValidation).is_empty());
        assert!(log.calls(Phase::SetUp).is_empty());
    }

    #[test]
    fn test_partial_set_up_failure_is_not_rolled_back() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![
            Fake::broken("A", &log),
            Fake::valid("B", &log),
            Fake::fixable("C", &log),
        ])
        .set_up();

        assert_eq!(log.calls(Phase::SetUp), vec!["A", "C"]);
        assert_eq!(run.outcome, RunOutcome::SetupFailed);
        assert!(!run.success);
        assert_eq!(run.failed_set_up(), vec!["A"]);
        assert_eq!(run.needed_set_up(), vec!["A", "C"]);
    }

    #[test]
    fn test_validate_never_mutates() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![
            Fake::valid("A", &log),
            Fake::fixable("B", &log),
        ])
        .validate();

        assert_eq!(run.outcome, RunOutcome::Invalid);
        assert_eq!(run.invalid(), vec!["B"]);
        assert_eq!(log.calls(Phase::SetUpValidation), vec!["A", "B"]);
        assert!(log.calls(Phase::SetUp).is_empty());
        assert!(log.calls(Phase::PreSetUpValidation).is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let log = PhaseLog::default();
        let run = orchestrator(vec![Fake::valid("A", &log)]).validate();
        let json = serde_json::to_value(&run).unwrap();

        assert_eq!(json["outcome"], "valid");
        assert_eq!(json["validation"][0]["phase"], "set-up-validation");
        assert_eq!(json["validation"][0]["component"], "A");
    }
}
