/// Sections every generated plan is asked to include, in prompt order.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "time allocation",
    "learning methods",
    "exercises",
    "progress tracking",
];

/// Append the closing "Include:" line listing the required sections.
pub fn append_instructions(prompt: &mut String) {
    prompt.push_str("Include: ");
    prompt.push_str(&REQUIRED_SECTIONS.join(", "));
}
