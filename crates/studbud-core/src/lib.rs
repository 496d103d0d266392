pub mod error;
pub mod hours;
pub mod inputs;
pub mod plan;
pub mod subject;

pub use error::StudbudError;
pub use hours::{check_hours, parse_hours, DEFAULT_HOURS, MAX_HOURS, MIN_HOURS};
pub use inputs::{join_labels, StudyInputs};
pub use plan::{GeneratedPlan, PLAN_FILENAME};
pub use subject::{LearningStyle, Subject};
