use studbud_core::{
    parse_hours, LearningStyle, StudbudError, StudyInputs, Subject, DEFAULT_HOURS,
};

/// Raw values of the study form as submitted by the browser.
///
/// Kept as strings so the page can be re-rendered exactly as the user left
/// it when validation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyForm {
    pub name: String,
    pub subjects: Vec<String>,
    pub hours: String,
    pub goals: String,
    pub strengths: String,
    pub weaknesses: String,
    pub preferences: Vec<String>,
}

impl StudyForm {
    /// Collect urlencoded pairs; repeated `subjects`/`preferences` keys
    /// accumulate, unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "subjects" => form.subjects.push(value),
                "hours" => form.hours = value,
                "goals" => form.goals = value,
                "strengths" => form.strengths = value,
                "weaknesses" => form.weaknesses = value,
                "preferences" => form.preferences.push(value),
                _ => {}
            }
        }
        form
    }

    pub fn has_subject(&self, subject: Subject) -> bool {
        self.subjects
            .iter()
            .any(|s| Subject::from_str(s) == Some(subject))
    }

    pub fn has_preference(&self, style: LearningStyle) -> bool {
        self.preferences
            .iter()
            .any(|s| LearningStyle::from_str(s) == Some(style))
    }

    /// Hours value to pre-fill the slider with.
    pub fn hours_value(&self) -> String {
        if self.hours.trim().is_empty() {
            DEFAULT_HOURS.to_string()
        } else {
            self.hours.trim().to_string()
        }
    }

    /// Validate the widgets' values and build the request record.
    pub fn to_inputs(&self) -> Result<StudyInputs, StudbudError> {
        let hours = parse_hours(&self.hours)?;
        let (subjects, preferences) = parse_selections(&self.subjects, &self.preferences)?;

        Ok(StudyInputs::from_selections(
            self.name.clone(),
            &subjects,
            hours,
            self.goals.clone(),
            self.strengths.clone(),
            self.weaknesses.clone(),
            &preferences,
        ))
    }
}

/// Resolve submitted subject and learning-style labels; unknown labels are
/// an input error.
pub(crate) fn parse_selections(
    subjects: &[String],
    preferences: &[String],
) -> Result<(Vec<Subject>, Vec<LearningStyle>), StudbudError> {
    let subjects = subjects
        .iter()
        .map(|s| {
            Subject::from_str(s)
                .ok_or_else(|| StudbudError::InvalidInput(format!("unknown subject: {s}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let preferences = preferences
        .iter()
        .map(|s| {
            LearningStyle::from_str(s)
                .ok_or_else(|| StudbudError::InvalidInput(format!("unknown learning style: {s}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((subjects, preferences))
}
