//! Status reporting around component phases
//!
//! [`instrument`] wraps a component once, when the factory builds it, so that
//! every phase announces itself and prints its outcome.

use devconsole_core::status::status_line;
use tracing::info;

use crate::component::{EnvComponent, Phase};

/// Component wrapper that reports each lifecycle phase
pub struct Instrumented<C> {
    inner: C,
}

impl<C: EnvComponent> Instrumented<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn observe(&self, phase: Phase, run: impl FnOnce(&C) -> bool) -> bool {
        println!("\n{}", announcement(self.inner.name(), phase));

        let success = run(&self.inner);

        println!("{}", outcome(self.inner.name(), phase, success));
        info!(component = self.inner.name(), phase = phase.label(), success, "phase finished");
        success
    }
}

impl<C: EnvComponent> EnvComponent for Instrumented<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn validate_pre_set_up(&self) -> bool {
        self.observe(Phase::PreSetUpValidation, C::validate_pre_set_up)
    }

    fn set_up(&self) -> bool {
        self.observe(Phase::SetUp, C::set_up)
    }

    fn validate_set_up(&self) -> bool {
        self.observe(Phase::SetUpValidation, C::validate_set_up)
    }
}

/// "Performing <name> <phase>..."
pub fn announcement(name: &str, phase: Phase) -> String {
    format!("Performing {} {}...", name, phase)
}

/// "✅ <name> <phase> succeeded." or "❌ <name> <phase> failed."
pub fn outcome(name: &str, phase: Phase, success: bool) -> String {
    status_line(&format!("{} {}", name, phase), success)
}

/// Wrap `component` with phase reporting and erase its type
pub fn instrument<C>(component: C) -> Box<dyn EnvComponent>
where
    C: EnvComponent + 'static,
{
    Box::new(Instrumented::new(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<u32>,
        result: bool,
    }

    impl EnvComponent for Counting {
        fn name(&self) -> &str {
            "Counting"
        }

        fn validate_pre_set_up(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }

        fn set_up(&self) -> bool {
            self.calls.set(self.calls.get() + 10);
            self.result
        }

        fn validate_set_up(&self) -> bool {
            self.calls.set(self.calls.get() + 100);
            self.result
        }
    }

    #[test]
    fn test_instrumented_delegates_and_preserves_results() {
        let wrapped = Instrumented::new(Counting {
            calls: Cell::new(0),
            result: false,
        });

        assert_eq!(wrapped.name(), "Counting");
        assert!(!wrapped.validate_pre_set_up());
        assert!(!wrapped.set_up());
        assert!(!wrapped.validate_set_up());
        assert_eq!(wrapped.into_inner().calls.get(), 111);
    }

    #[test]
    fn test_phase_text() {
        assert_eq!(
            announcement("Android SDK", Phase::PreSetUpValidation),
            "Performing Android SDK pre-setup validation..."
        );
        assert_eq!(
            outcome("Android SDK", Phase::SetUpValidation, true),
            "✅ Android SDK setup validation succeeded."
        );
        assert_eq!(
            outcome("Cargo tools", Phase::SetUp, false),
            "❌ Cargo tools setup failed."
        );
    }

    #[test]
    fn test_instrument_boxes_component() {
        let boxed = instrument(Counting {
            calls: Cell::new(0),
            result: true,
        });
        assert!(boxed.set_up());
        assert_eq!(boxed.name(), "Counting");
    }
}
