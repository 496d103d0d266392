use std::sync::Arc;

use studbud_core::{GeneratedPlan, StudyInputs};
use tracing::{info, warn};

use crate::{GenerationError, TextGenerator};

/// Turns a student's inputs into a study plan: renders the prompt and makes
/// exactly one generation call. No retries, no caching.
///
/// `hours` is not re-validated here; the input forms own that bound.
#[derive(Clone)]
pub struct PlanRequester {
    generator: Arc<dyn TextGenerator>,
}

impl PlanRequester {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    pub fn backend_name(&self) -> &str {
        self.generator.name()
    }

    pub async fn generate_plan(
        &self,
        inputs: &StudyInputs,
    ) -> Result<GeneratedPlan, GenerationError> {
        let prompt = studbud_prompts::assemble_prompt(inputs);
        info!(
            backend = self.generator.name(),
            model = self.generator.model(),
            hours = inputs.hours,
            "requesting study plan"
        );
        match self.generator.generate(&prompt).await {
            Ok(text) => {
                info!(chars = text.len(), "study plan received");
                Ok(GeneratedPlan::new(text))
            }
            Err(e) => {
                warn!("study plan generation failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockGenerator;
    use studbud_core::{LearningStyle, Subject};

    fn ann() -> StudyInputs {
        StudyInputs::from_selections(
            "Ann",
            &[Subject::Math, Subject::Science],
            3,
            "pass exam",
            "algebra",
            "geometry",
            &[LearningStyle::Visual],
        )
    }

    #[tokio::test]
    async fn returns_generated_text_unaltered() {
        let mock = Arc::new(MockGenerator::success("PLAN-XYZ"));
        let requester = PlanRequester::new(mock.clone());
        let plan = requester.generate_plan(&ann()).await.unwrap();
        assert_eq!(plan.as_str(), "PLAN-XYZ");
    }

    #[tokio::test]
    async fn sends_rendered_prompt_once() {
        let mock = Arc::new(MockGenerator::success("ok"));
        let requester = PlanRequester::new(mock.clone());
        requester.generate_plan(&ann()).await.unwrap();

        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], studbud_prompts::assemble_prompt(&ann()));
        for needle in ["Ann", "Math, Science", "pass exam", "algebra", "geometry", "Visual", "3"] {
            assert!(prompts[0].contains(needle), "missing {needle:?}");
        }
    }

    #[tokio::test]
    async fn failure_surfaces_generation_error() {
        let mock = Arc::new(MockGenerator::failure("network down"));
        let requester = PlanRequester::new(mock.clone());
        let err = requester.generate_plan(&ann()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Request(_)));
        assert!(!err.to_string().is_empty());
        assert_eq!(mock.call_count(), 1, "no retry on failure");
    }

    #[tokio::test]
    async fn empty_inputs_are_accepted() {
        let mock = Arc::new(MockGenerator::success("plan"));
        let requester = PlanRequester::new(mock.clone());
        let inputs = StudyInputs::from_selections("", &[], 1, "", "", "", &[]);
        assert!(requester.generate_plan(&inputs).await.is_ok());
    }

    #[tokio::test]
    async fn does_not_validate_hours() {
        let mock = Arc::new(MockGenerator::success("plan"));
        let requester = PlanRequester::new(mock.clone());
        let inputs = StudyInputs {
            hours: 12,
            ..Default::default()
        };
        requester.generate_plan(&inputs).await.unwrap();
        assert!(mock.prompts()[0].contains("Available hours/day: 12"));
    }

    #[test]
    fn exposes_backend_and_model() {
        let requester = PlanRequester::new(Arc::new(MockGenerator::success("x")));
        assert_eq!(requester.backend_name(), "mock");
        assert_eq!(requester.model(), "mock-model");
    }
}
