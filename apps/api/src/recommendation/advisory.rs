//! Advisory Augmenter — wraps the ranked electives in natural-language advice.
//!
//! The generator supplies the explanation; this module always supplies the course
//! list. One attempt, bounded by a timeout, no retries. Any generator failure
//! degrades to a fixed sentence and the keyword-ranked list; it is never returned
//! to the caller as an error.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::Course;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_PROSE_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::profile::StudentProfile;
use crate::recommendation::prompts::{
    ADVISOR_PROMPT_TEMPLATE, ADVISOR_SYSTEM_TEMPLATE, FALLBACK_ADVISORY, INTERESTS_PLACEHOLDER,
    NO_ELECTIVES_PLACEHOLDER,
};

/// How many unranked electives to suggest when the generator succeeds but
/// keyword ranking found nothing.
pub const UNRANKED_ELECTIVES_LIMIT: usize = 5;

/// Which path produced the advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Advisory {
    pub text: String,
    pub electives: Vec<Course>,
    pub source: AdvisorySource,
}

/// Everything the augmenter needs from the request.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryInput<'a> {
    pub curriculum_name: &'a str,
    pub interests: &'a str,
    pub profile: Option<&'a StudentProfile>,
    /// Every elective option the student has not completed, in catalog order.
    pub eligible_electives: &'a [Course],
    /// Output of the Interest Matcher.
    pub ranked_electives: &'a [Course],
}

/// Calls the generator once and resolves to either the generated or the fallback advisory.
pub async fn build_advisory(
    generator: &dyn TextGenerator,
    timeout: Duration,
    input: AdvisoryInput<'_>,
) -> Advisory {
    let prompt = build_advisory_prompt(&input);
    let system = advisor_system_prompt();

    let outcome = match tokio::time::timeout(timeout, generator.generate(&prompt, &system)).await
    {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout(timeout)),
    };

    resolve_advisory(outcome, &input)
}

/// Maps the generator outcome onto the two advisory paths.
pub fn resolve_advisory(outcome: Result<String, LlmError>, input: &AdvisoryInput<'_>) -> Advisory {
    match outcome {
        Ok(text) if !text.trim().is_empty() => {
            let electives = if input.ranked_electives.is_empty() {
                input
                    .eligible_electives
                    .iter()
                    .take(UNRANKED_ELECTIVES_LIMIT)
                    .cloned()
                    .collect()
            } else {
                input.ranked_electives.to_vec()
            };
            info!(
                "Advisory generated for '{}' ({} electives)",
                input.curriculum_name,
                electives.len()
            );
            Advisory {
                text: text.trim().to_string(),
                electives,
                source: AdvisorySource::Generated,
            }
        }
        Ok(_) => fallback(input, &LlmError::EmptyContent),
        Err(e) => fallback(input, &e),
    }
}

fn fallback(input: &AdvisoryInput<'_>, err: &LlmError) -> Advisory {
    warn!(
        "Advisory generation failed for '{}', using fallback: {err}",
        input.curriculum_name
    );
    Advisory {
        text: FALLBACK_ADVISORY.to_string(),
        electives: input.ranked_electives.to_vec(),
        source: AdvisorySource::Fallback,
    }
}

fn advisor_system_prompt() -> String {
    ADVISOR_SYSTEM_TEMPLATE
        .replace("{grounding}", GROUNDING_INSTRUCTION)
        .replace("{plain_prose}", PLAIN_PROSE_INSTRUCTION)
}

/// Fills the advisory template. The full eligible pool is listed, not just the
/// ranked subset, so the generator can look past keyword matches.
pub fn build_advisory_prompt(input: &AdvisoryInput<'_>) -> String {
    let interests = match input.interests.trim() {
        "" => INTERESTS_PLACEHOLDER,
        trimmed => trimmed,
    };

    let profile_section = input
        .profile
        .and_then(StudentProfile::summary)
        .map(|summary| format!("\nAbout the student:\n{summary}\n"))
        .unwrap_or_default();

    let electives = if input.eligible_electives.is_empty() {
        NO_ELECTIVES_PLACEHOLDER.to_string()
    } else {
        input
            .eligible_electives
            .iter()
            .map(describe_course)
            .collect::<Vec<_>>()
            .join("\n")
    };

    ADVISOR_PROMPT_TEMPLATE
        .replace("{curriculum_name}", input.curriculum_name)
        .replace("{interests}", interests)
        .replace("{profile_section}", &profile_section)
        .replace("{electives}", &electives)
}

fn describe_course(course: &Course) -> String {
    if course.category.is_empty() {
        format!("- {}", course.name)
    } else {
        format!("- {} ({})", course.name, course.category)
    }
}
