use serde::{Deserialize, Serialize};

use crate::subject::{LearningStyle, Subject};

/// A student's stated preferences, as collected by one of the input forms.
///
/// `subjects` and `preferences` hold already-joined display strings
/// (e.g. `"Math, Science"`). `hours` is bounded by the input layer; nothing
/// here re-checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyInputs {
    pub name: String,
    pub subjects: String,
    pub goals: String,
    pub strengths: String,
    pub weaknesses: String,
    pub preferences: String,
    pub hours: u8,
}

impl StudyInputs {
    /// Build inputs from multi-select selections, joining the labels.
    pub fn from_selections(
        name: impl Into<String>,
        subjects: &[Subject],
        hours: u8,
        goals: impl Into<String>,
        strengths: impl Into<String>,
        weaknesses: impl Into<String>,
        preferences: &[LearningStyle],
    ) -> Self {
        Self {
            name: name.into(),
            subjects: join_labels(subjects.iter().map(|s| s.display_name())),
            goals: goals.into(),
            strengths: strengths.into(),
            weaknesses: weaknesses.into(),
            preferences: join_labels(preferences.iter().map(|p| p.display_name())),
            hours,
        }
    }
}

/// Join selected labels into the comma-separated display form used in prompts.
pub fn join_labels<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
