//! Recommendation Engine — orchestrates one recommendation request.
//!
//! Flow: validate → resolve curriculum → eligibility filter + interest matcher →
//!       advisory augmenter → response.
//!
//! Stateless: every input is passed in, nothing is persisted.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::catalog::{Catalog, Course, Curriculum};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::profile::StudentProfile;
use crate::recommendation::advisory::{build_advisory, AdvisoryInput, AdvisorySource};
use crate::recommendation::eligibility::next_courses;
use crate::recommendation::interests::rank_electives;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for a recommendation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Target curriculum id. Optional here so a missing value is reported as a
    /// validation error instead of a body rejection.
    #[serde(default)]
    pub college_id: Option<String>,
    /// `null` and a missing key both mean "nothing completed".
    #[serde(default)]
    pub completed_courses: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub profile: Option<StudentProfile>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub next_courses: Vec<Course>,
    pub suggested_electives: Vec<Course>,
    pub ai_suggestion: String,
    pub advisory_source: AdvisorySource,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full recommendation pipeline.
///
/// Errors only on a missing/blank `collegeId` (Validation) or an unknown one
/// (NotFound). Generator failures are absorbed by the advisory step.
pub async fn recommend(
    catalog: &Catalog,
    generator: &dyn TextGenerator,
    advisory_timeout: Duration,
    request: &RecommendRequest,
) -> Result<RecommendationResult, AppError> {
    let college_id = request
        .college_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("collegeId is required".to_string()))?;

    let curriculum = catalog
        .curriculum(college_id)
        .ok_or_else(|| AppError::NotFound(format!("Curriculum '{college_id}' not found")))?;

    let span = info_span!(
        "recommend",
        request_id = %Uuid::new_v4(),
        curriculum = %curriculum.id
    );

    run_pipeline(catalog, generator, advisory_timeout, curriculum, request)
        .instrument(span)
        .await
}

async fn run_pipeline(
    catalog: &Catalog,
    generator: &dyn TextGenerator,
    advisory_timeout: Duration,
    curriculum: &Curriculum,
    request: &RecommendRequest,
) -> Result<RecommendationResult, AppError> {
    let completed: HashSet<String> = request
        .completed_courses
        .iter()
        .flatten()
        .cloned()
        .collect();
    let interests = request.interests.as_deref().unwrap_or_default();

    let next = next_courses(&completed, catalog, curriculum);
    let ranked = rank_electives(interests, catalog, curriculum);
    let eligible_electives = elective_pool(&completed, catalog, curriculum);

    info!(
        "Eligibility: {} next courses, {} ranked electives, {} electives remaining",
        next.len(),
        ranked.len(),
        eligible_electives.len()
    );

    let advisory = build_advisory(
        generator,
        advisory_timeout,
        AdvisoryInput {
            curriculum_name: &curriculum.name,
            interests,
            profile: request.profile.as_ref(),
            eligible_electives: &eligible_electives,
            ranked_electives: &ranked,
        },
    )
    .await;

    Ok(RecommendationResult {
        next_courses: next,
        suggested_electives: advisory.electives,
        ai_suggestion: advisory.text,
        advisory_source: advisory.source,
    })
}

/// Elective options the student has not completed yet, in catalog order.
/// Prerequisites are not checked.
pub fn elective_pool(
    completed: &HashSet<String>,
    catalog: &Catalog,
    curriculum: &Curriculum,
) -> Vec<Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| curriculum.offers_elective(&course.id))
        .filter(|course| !completed.contains(&course.id))
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{course, curriculum};
    use crate::llm_client::test_support::StubGenerator;
    use crate::llm_client::LlmError;
    use crate::recommendation::prompts::FALLBACK_ADVISORY;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn cs_catalog() -> Catalog {
        Catalog::new(
            vec![
                course("intro", &[], &["programming"]),
                course("data-structures", &["intro"], &["algorithms"]),
                course("ml", &["data-structures"], &["machine learning", "ai"]),
                course("graphics", &["data-structures"], &["rendering", "games"]),
                course("security", &["intro"], &["cryptography", "networks"]),
            ],
            vec![curriculum(
                "cs101",
                &["intro", "data-structures"],
                &["ml", "graphics", "security"],
            )],
        )
        .unwrap()
    }

    fn request(college_id: &str, completed: &[&str], interests: &str) -> RecommendRequest {
        RecommendRequest {
            college_id: Some(college_id.to_string()),
            completed_courses: Some(completed.iter().map(|s| s.to_string()).collect()),
            interests: Some(interests.to_string()),
            profile: None,
        }
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_next_course_unlocked_by_completed_prerequisite() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");

        let result = recommend(&catalog, &generator, TIMEOUT, &request("cs101", &["intro"], ""))
            .await
            .unwrap();

        assert_eq!(ids(&result.next_courses), vec!["data-structures"]);
    }

    #[tokio::test]
    async fn test_interest_ranking_flows_into_response() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("Machine Learning suits you.");

        let result = recommend(
            &catalog,
            &generator,
            TIMEOUT,
            &request("cs101", &["intro"], "I love machine learning and robots"),
        )
        .await
        .unwrap();

        assert_eq!(ids(&result.suggested_electives), vec!["ml"]);
        assert_eq!(result.ai_suggestion, "Machine Learning suits you.");
        assert_eq!(result.advisory_source, AdvisorySource::Generated);
    }

    #[tokio::test]
    async fn test_unknown_curriculum_is_not_found_and_skips_generator() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");

        let err = recommend(&catalog, &generator, TIMEOUT, &request("nope", &[], "robots"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("nope")));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_college_id_is_validation_error() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");

        let missing = RecommendRequest::default();
        let err = recommend(&catalog, &generator, TIMEOUT, &missing)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let blank = request("   ", &[], "");
        let err = recommend(&catalog, &generator, TIMEOUT, &blank)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generator_timeout_degrades_to_fallback() {
        let catalog = cs_catalog();
        let generator = StubGenerator::hanging();
        let req = request("cs101", &["intro"], "rendering games and networks");

        let result = recommend(&catalog, &generator, Duration::from_secs(3), &req)
            .await
            .unwrap();

        let cs101 = catalog.curriculum("cs101").unwrap();
        assert_eq!(result.ai_suggestion, FALLBACK_ADVISORY);
        assert_eq!(result.advisory_source, AdvisorySource::Fallback);
        assert_eq!(
            result.suggested_electives,
            rank_electives("rendering games and networks", &catalog, cs101)
        );
        assert_eq!(ids(&result.suggested_electives), vec!["graphics", "security"]);
    }

    #[tokio::test]
    async fn test_unconfigured_generator_still_succeeds() {
        let catalog = cs_catalog();
        let generator = StubGenerator::failing(|| LlmError::NotConfigured);

        let result = recommend(&catalog, &generator, TIMEOUT, &request("cs101", &[], ""))
            .await
            .unwrap();

        assert_eq!(ids(&result.next_courses), vec!["intro"]);
        assert!(result.suggested_electives.is_empty());
        assert_eq!(result.ai_suggestion, FALLBACK_ADVISORY);
    }

    #[tokio::test]
    async fn test_generator_sees_uncompleted_electives_only() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");

        recommend(
            &catalog,
            &generator,
            TIMEOUT,
            &request("cs101", &["intro", "security"], "games"),
        )
        .await
        .unwrap();

        let prompt = generator.prompt();
        assert!(prompt.contains("Course ml"));
        assert!(prompt.contains("Course graphics"));
        assert!(!prompt.contains("Course security"));
    }

    #[tokio::test]
    async fn test_completed_electives_can_still_rank() {
        // Interest ranking does not look at completion
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");

        let result = recommend(
            &catalog,
            &generator,
            TIMEOUT,
            &request("cs101", &["intro", "security"], "cryptography"),
        )
        .await
        .unwrap();

        assert_eq!(ids(&result.suggested_electives), vec!["security"]);
    }

    #[tokio::test]
    async fn test_identical_requests_are_idempotent() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");
        let req = request("cs101", &["intro", "data-structures"], "machine learning, games");

        let first = recommend(&catalog, &generator, TIMEOUT, &req).await.unwrap();
        let second = recommend(&catalog, &generator, TIMEOUT, &req).await.unwrap();

        assert_eq!(first.next_courses, second.next_courses);
        assert_eq!(first.suggested_electives, second.suggested_electives);
    }

    #[test]
    fn test_elective_pool_excludes_completed_and_keeps_catalog_order() {
        let catalog = cs_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        let completed: HashSet<String> = ["graphics".to_string()].into_iter().collect();

        let pool = elective_pool(&completed, &catalog, cs101);
        assert_eq!(ids(&pool), vec!["ml", "security"]);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let req: RecommendRequest = serde_json::from_str(r#"{"collegeId": "cs101"}"#).unwrap();
        assert_eq!(req.college_id.as_deref(), Some("cs101"));
        assert!(req.completed_courses.is_none());
        assert!(req.interests.is_none());
        assert!(req.profile.is_none());
    }

    #[tokio::test]
    async fn test_null_fields_treated_as_empty() {
        let catalog = cs_catalog();
        let generator = StubGenerator::replying("advice");
        let req: RecommendRequest = serde_json::from_str(
            r#"{"collegeId": "cs101", "completedCourses": null, "interests": null, "profile": null}"#,
        )
        .unwrap();

        let result = recommend(&catalog, &generator, TIMEOUT, &req).await.unwrap();

        assert_eq!(ids(&result.next_courses), vec!["intro"]);
        // no ranking, so the generated path lists the unranked pool
        assert_eq!(ids(&result.suggested_electives), vec!["ml", "graphics", "security"]);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = RecommendationResult {
            next_courses: vec![],
            suggested_electives: vec![],
            ai_suggestion: "hi".to_string(),
            advisory_source: AdvisorySource::Fallback,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("nextCourses").is_some());
        assert!(value.get("suggestedElectives").is_some());
        assert_eq!(value["aiSuggestion"], "hi");
        assert_eq!(value["advisorySource"], "fallback");
    }
}
