use std::fmt;

use serde::{Deserialize, Serialize};

/// File name offered when a plan is downloaded or saved.
pub const PLAN_FILENAME: &str = "study_plan.txt";

/// Text returned by the model. Treated as opaque: never parsed or trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedPlan(String);

impl GeneratedPlan {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_kept_verbatim() {
        let plan = GeneratedPlan::new("  Week 1\n\n");
        assert_eq!(plan.as_str(), "  Week 1\n\n");
        assert_eq!(plan.to_string(), "  Week 1\n\n");
        assert_eq!(plan.into_text(), "  Week 1\n\n");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&GeneratedPlan::new("PLAN")).unwrap();
        assert_eq!(json, "\"PLAN\"");
    }
}
