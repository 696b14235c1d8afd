// All LLM prompt constants for the recommendation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for elective advice. Replace `{plain_prose}` and `{grounding}`.
pub const ADVISOR_SYSTEM_TEMPLATE: &str = "You are an experienced academic advisor helping \
    a student choose electives for their target program. {grounding} {plain_prose}";

/// Advisory prompt template.
/// Replace: {curriculum_name}, {interests}, {profile_section}, {electives}
pub const ADVISOR_PROMPT_TEMPLATE: &str = r#"The student is working toward: {curriculum_name}

Stated interests: {interests}
{profile_section}
Elective options they have not completed yet:
{electives}

Recommend the electives from this list that best fit the student's interests and explain briefly why each one is a good fit. Keep the answer under 150 words."#;

/// Used when the student gave no interests.
pub const INTERESTS_PLACEHOLDER: &str = "not specified (suggest a well-rounded selection)";

/// Used when every elective has already been completed or none are offered.
pub const NO_ELECTIVES_PLACEHOLDER: &str = "- (none remaining)";

/// Advisory text used whenever the generator is unavailable or fails.
pub const FALLBACK_ADVISORY: &str =
    "Based on your interests, here are some recommended electives:";
