use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
    History,
    Languages,
    ComputerScience,
}

impl Subject {
    pub const ALL: &[Subject] = &[
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::Languages,
        Subject::ComputerScience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::History => "history",
            Subject::Languages => "languages",
            Subject::ComputerScience => "computer_science",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Languages => "Languages",
            Subject::ComputerScience => "Computer Science",
        }
    }

    /// Accepts either the form key (`computer_science`) or the display label
    /// (`Computer Science`), ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| {
                v.as_str().eq_ignore_ascii_case(s) || v.display_name().eq_ignore_ascii_case(s)
            })
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Audio,
    Reading,
    Practice,
}

impl LearningStyle {
    pub const ALL: &[LearningStyle] = &[
        LearningStyle::Visual,
        LearningStyle::Audio,
        LearningStyle::Reading,
        LearningStyle::Practice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Audio => "audio",
            LearningStyle::Reading => "reading",
            LearningStyle::Practice => "practice",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Audio => "Audio",
            LearningStyle::Reading => "Reading",
            LearningStyle::Practice => "Practice",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| {
                v.as_str().eq_ignore_ascii_case(s) || v.display_name().eq_ignore_ascii_case(s)
            })
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
