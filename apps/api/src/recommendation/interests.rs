//! Interest Matcher — ranks a curriculum's electives against free-text interests.
//!
//! Pure-Rust keyword overlap. Fast, deterministic, no LLM call.
//! Completion is deliberately not checked here: a completed elective that matches
//! the student's interests is still surfaced.

use serde::Serialize;

use crate::catalog::{Catalog, Course, Curriculum};

/// Maximum number of ranked electives.
pub const RANKED_ELECTIVES_LIMIT: usize = 6;

/// Tokens this short are dropped before matching (so "ai" never matches).
const MIN_TOKEN_LEN: usize = 3;

/// An elective together with its interest score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredElective {
    pub course: Course,
    pub score: u32,
}

/// Ranked electives for the given interests, without their scores.
pub fn rank_electives(interests: &str, catalog: &Catalog, curriculum: &Curriculum) -> Vec<Course> {
    score_electives(interests, catalog, curriculum)
        .into_iter()
        .map(|scored| scored.course)
        .collect()
}

/// Scores every elective option and returns the top six with a non-zero score.
///
/// Algorithm:
/// 1. Blank interests → empty result, no scoring at all
/// 2. Tokenize interests (lowercase, split on whitespace/commas, drop short tokens)
/// 3. Score each elective by bidirectional substring overlap with its keywords
/// 4. Drop zero scores, stable sort descending (ties keep catalog order), take six
pub fn score_electives(
    interests: &str,
    catalog: &Catalog,
    curriculum: &Curriculum,
) -> Vec<ScoredElective> {
    if interests.trim().is_empty() {
        return Vec::new();
    }

    let tokens = tokenize(interests);

    let mut scored: Vec<ScoredElective> = catalog
        .courses()
        .iter()
        .filter(|course| curriculum.offers_elective(&course.id))
        .map(|course| ScoredElective {
            score: score_course(course, &tokens),
            course: course.clone(),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(RANKED_ELECTIVES_LIMIT);
    scored
}

/// Lowercases, splits on whitespace and commas, and drops tokens of two characters or fewer.
pub fn tokenize(interests: &str) -> Vec<String> {
    interests
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// +1 for every (keyword, token) pair where either contains the other.
/// Pairs are not deduplicated, so overlapping matches compound.
pub fn score_course(course: &Course, tokens: &[String]) -> u32 {
    let mut score = 0;
    for keyword in &course.keywords {
        let keyword = keyword.to_lowercase();
        for token in tokens {
            if keyword.contains(token.as_str()) || token.contains(keyword.as_str()) {
                score += 1;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{course, curriculum};

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    fn electives_catalog() -> Catalog {
        Catalog::new(
            vec![
                course("intro", &[], &["programming"]),
                course("ml", &["intro"], &["machine learning", "ai"]),
                course("graphics", &["intro"], &["rendering", "3d"]),
                course("security", &["intro"], &["cryptography", "networks"]),
            ],
            vec![curriculum("cs101", &["intro"], &["ml", "graphics", "security"])],
        )
        .unwrap()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_commas() {
        assert_eq!(
            tokenize("Robotics,Machine  learning, art"),
            vec!["robotics", "machine", "learning", "art"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("I love AI and 3D"), vec!["love", "and"]);
    }

    #[test]
    fn test_tokenize_counts_characters_not_bytes() {
        // "éé" is two characters but four bytes
        assert!(tokenize("éé").is_empty());
    }

    #[test]
    fn test_empty_interests_short_circuit() {
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        assert!(rank_electives("", &catalog, cs101).is_empty());
        assert!(rank_electives("   \n\t", &catalog, cs101).is_empty());
    }

    #[test]
    fn test_matching_interest_ranks_only_scoring_electives() {
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();

        let scored = score_electives("I love machine learning and robots", &catalog, cs101);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].course.id, "ml");
        // "machine" and "learning" are both substrings of "machine learning"
        assert_eq!(scored[0].score, 2);
    }

    #[test]
    fn test_two_letter_interest_is_ignored() {
        // "ai" is dropped by the length filter before it can match the "ai" keyword
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        assert!(rank_electives("I love AI and robots", &catalog, cs101).is_empty());
    }

    #[test]
    fn test_keyword_inside_token_matches() {
        // keyword "networks" is contained in the longer token
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        let ranked = rank_electives("socialnetworks", &catalog, cs101);
        assert_eq!(ids(&ranked), vec!["security"]);
    }

    #[test]
    fn test_required_courses_never_scored() {
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        assert!(rank_electives("programming", &catalog, cs101).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_catalog_order_ties() {
        let catalog = Catalog::new(
            vec![
                course("a", &[], &["music"]),
                course("b", &[], &["music theory", "music history"]),
                course("c", &[], &["music"]),
            ],
            vec![curriculum("arts", &[], &["a", "b", "c"])],
        )
        .unwrap();
        let arts = catalog.curriculum("arts").unwrap();

        let scored = score_electives("music", &catalog, arts);
        let order: Vec<(&str, u32)> = scored
            .iter()
            .map(|s| (s.course.id.as_str(), s.score))
            .collect();
        assert_eq!(order, vec![("b", 2), ("a", 1), ("c", 1)]);
    }

    #[test]
    fn test_repeated_tokens_compound() {
        let ml = course("ml", &[], &["machine learning"]);
        let tokens = tokenize("learning learning");
        assert_eq!(score_course(&ml, &tokens), 2);
    }

    #[test]
    fn test_keywords_compared_case_insensitively() {
        let ml = course("ml", &[], &["Machine Learning"]);
        assert_eq!(score_course(&ml, &tokenize("MACHINE")), 1);
    }

    #[test]
    fn test_capped_at_six() {
        let ids_list: Vec<String> = (0..9).map(|i| format!("e{i}")).collect();
        let courses = ids_list.iter().map(|id| course(id, &[], &["robotics"])).collect();
        let electives: Vec<&str> = ids_list.iter().map(String::as_str).collect();
        let catalog = Catalog::new(courses, vec![curriculum("eng", &[], &electives)]).unwrap();
        let eng = catalog.curriculum("eng").unwrap();

        let ranked = rank_electives("robotics", &catalog, eng);
        assert_eq!(ranked.len(), RANKED_ELECTIVES_LIMIT);
        assert_eq!(ids(&ranked), vec!["e0", "e1", "e2", "e3", "e4", "e5"]);
    }

    #[test]
    fn test_no_zero_scores_and_non_increasing() {
        let catalog = electives_catalog();
        let cs101 = catalog.curriculum("cs101").unwrap();
        let scored = score_electives("rendering, cryptography networks", &catalog, cs101);
        assert!(scored.iter().all(|s| s.score > 0));
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(scored[0].course.id, "security");
    }
}
