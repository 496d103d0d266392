use studbud_core::{GeneratedPlan, StudyInputs};
use tokio::runtime::{Builder, Runtime};

use crate::{GenerationError, PlanRequester};

/// Blocking wrapper around the async `PlanRequester`.
///
/// Owns a current-thread tokio runtime and uses `block_on()` for each call.
/// Meant for synchronous callers like the terminal UI; must not be used from
/// inside another runtime.
pub struct BlockingPlanRequester {
    inner: PlanRequester,
    rt: Runtime,
}

impl BlockingPlanRequester {
    pub fn new(inner: PlanRequester) -> std::io::Result<Self> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, rt })
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    pub fn generate_plan(&self, inputs: &StudyInputs) -> Result<GeneratedPlan, GenerationError> {
        self.rt.block_on(self.inner.generate_plan(inputs))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::MockGenerator;

    #[test]
    fn blocking_success() {
        let svc = BlockingPlanRequester::new(PlanRequester::new(Arc::new(
            MockGenerator::success("PLAN-XYZ"),
        )))
        .unwrap();
        let plan = svc.generate_plan(&StudyInputs::default()).unwrap();
        assert_eq!(plan.as_str(), "PLAN-XYZ");
        assert_eq!(svc.model(), "mock-model");
    }

    #[test]
    fn blocking_failure() {
        let svc = BlockingPlanRequester::new(PlanRequester::new(Arc::new(
            MockGenerator::failure("offline"),
        )))
        .unwrap();
        let err = svc.generate_plan(&StudyInputs::default()).unwrap_err();
        assert!(err.to_string().contains("offline"));
    }
}
