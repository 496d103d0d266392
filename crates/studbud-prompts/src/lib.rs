pub mod sections;

pub use sections::REQUIRED_SECTIONS;
use studbud_core::StudyInputs;

/// Assemble the study-plan prompt for the given inputs.
///
/// Every field is substituted as-is; empty strings render as empty values.
pub fn assemble_prompt(inputs: &StudyInputs) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Create a personalized study plan for {} focusing on {}.\n",
        inputs.name, inputs.subjects
    ));
    prompt.push_str(&format!("Goals: {}\n", inputs.goals));
    prompt.push_str(&format!("Strengths: {}\n", inputs.strengths));
    prompt.push_str(&format!("Weaknesses: {}\n", inputs.weaknesses));
    prompt.push_str(&format!("Preferences: {}\n", inputs.preferences));
    prompt.push_str(&format!("Available hours/day: {}\n", inputs.hours));
    sections::append_instructions(&mut prompt);
    prompt
}
