//! Matching Engine — ranks catalog careers against a user profile.
//!
//! Default backend: `ContentBasedRecommender` (keyword overlap + synonym
//! expansion + fuzzy similarity). `AppState` holds an
//! `Arc<dyn CareerRecommender>`, so a different backend can be swapped in at
//! startup without touching the handlers.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::catalog::{CareerCatalog, CareerRecord};
use crate::matching::similarity::is_similar;
use crate::matching::synonyms::SynonymMap;
use crate::models::profile::UserProfile;

/// Number of careers returned per request.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Bonus for every (user keyword, career keyword) pair that is similar but not equal.
pub const FUZZY_PAIR_WEIGHT: f64 = 0.5;

pub const NO_MATCH_TITLE: &str = "No strong match found";
pub const NO_MATCH_DESCRIPTION: &str =
    "Try providing more detailed or different answers in the survey.";

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One ranked career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    #[serde(rename = "career")]
    pub title: String,
    pub description: String,
    pub roadmap: Vec<String>,
    pub match_score: f64,
}

impl ScoredCareer {
    /// Sentinel returned when no career scores above zero.
    pub fn no_match() -> Self {
        ScoredCareer {
            title: NO_MATCH_TITLE.to_string(),
            description: NO_MATCH_DESCRIPTION.to_string(),
            roadmap: vec![],
            match_score: 0.0,
        }
    }

    fn from_record(record: &CareerRecord, match_score: f64) -> Self {
        ScoredCareer {
            title: record.title.clone(),
            description: record.description.clone(),
            roadmap: record.roadmap.clone(),
            match_score,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A career recommendation backend. Implementations must be pure with respect
/// to shared state so they can be called from any request task.
pub trait CareerRecommender: Send + Sync {
    /// Returns up to `MAX_RECOMMENDATIONS` careers, best first, or the single
    /// no-match sentinel.
    fn recommend(&self, profile: &UserProfile) -> Vec<ScoredCareer>;

    /// Number of careers this backend scores against.
    fn catalog_len(&self) -> usize;
}

// ────────────────────────────────────────────────────────────────────────────
// ContentBasedRecommender
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-overlap recommender over an immutable catalog.
///
/// Algorithm:
/// 1. Expand the profile's lowercased keywords through the synonym map.
/// 2. For each career (catalog order, duplicates included):
///    - base = |profile keywords ∩ career keywords|
///    - fuzzy = 0.5 × number of distinct-but-similar keyword pairs
/// 3. Sort by base + fuzzy descending, then title ascending; keep the top 3
///    that scored above zero.
pub struct ContentBasedRecommender {
    catalog: Arc<CareerCatalog>,
    synonyms: Arc<SynonymMap>,
    /// Expanded keywords per catalog record, index-aligned with the catalog.
    career_keywords: Vec<BTreeSet<String>>,
}

impl ContentBasedRecommender {
    pub fn new(catalog: Arc<CareerCatalog>, synonyms: Arc<SynonymMap>) -> Self {
        let career_keywords = catalog
            .records()
            .iter()
            .map(|record| expand_career_keywords(record, &synonyms))
            .collect();

        Self {
            catalog,
            synonyms,
            career_keywords,
        }
    }

    /// Expanded, lowercased keyword set for a profile.
    pub fn profile_keywords(&self, profile: &UserProfile) -> BTreeSet<String> {
        self.synonyms.expand(profile.keywords())
    }

    /// Every catalog record paired with its score, best first.
    fn ranked(&self, user_keywords: &BTreeSet<String>) -> Vec<(f64, &CareerRecord)> {
        let mut scored: Vec<(f64, &CareerRecord)> = self
            .catalog
            .records()
            .iter()
            .zip(&self.career_keywords)
            .map(|(record, career_keywords)| {
                (score_keywords(user_keywords, career_keywords), record)
            })
            .collect();

        // stable: equal score and title keep catalog order
        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.title.cmp(&b.title))
        });
        scored
    }
}

impl CareerRecommender for ContentBasedRecommender {
    fn recommend(&self, profile: &UserProfile) -> Vec<ScoredCareer> {
        let user_keywords = self.profile_keywords(profile);
        let ranked = self.ranked(&user_keywords);

        let recommendations: Vec<ScoredCareer> = ranked
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .filter(|(score, _)| *score > 0.0)
            .map(|(score, record)| ScoredCareer::from_record(record, *score))
            .collect();

        debug!(
            user_id = %profile.user_id,
            keywords = user_keywords.len(),
            careers = self.catalog.len(),
            top_score = ranked.first().map(|(score, _)| *score).unwrap_or(0.0),
            matches = recommendations.len(),
            "Scored profile against catalog"
        );

        if recommendations.is_empty() {
            vec![ScoredCareer::no_match()]
        } else {
            recommendations
        }
    }

    fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

fn expand_career_keywords(record: &CareerRecord, synonyms: &SynonymMap) -> BTreeSet<String> {
    synonyms.expand(record.skills.iter().map(|s| s.to_lowercase()))
}

/// Exact overlap plus fuzzy bonus between two expanded keyword sets.
///
/// Every similar pair counts, so one user keyword close to several career
/// keywords earns the bonus several times.
pub fn score_keywords(user_keywords: &BTreeSet<String>, career_keywords: &BTreeSet<String>) -> f64 {
    let base = user_keywords.intersection(career_keywords).count();

    let similar_pairs = user_keywords
        .iter()
        .flat_map(|uk| career_keywords.iter().map(move |ck| (uk, ck)))
        .filter(|(uk, ck)| uk != ck && is_similar(uk, ck))
        .count();

    base as f64 + FUZZY_PAIR_WEIGHT * similar_pairs as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_recommender() -> ContentBasedRecommender {
        ContentBasedRecommender::new(
            Arc::new(CareerCatalog::builtin()),
            Arc::new(SynonymMap::builtin()),
        )
    }

    fn profile(
        skills: &[&str],
        education: &str,
        interests: &[&str],
        personality: &str,
        goals: &str,
    ) -> UserProfile {
        UserProfile {
            user_id: "user-1".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: education.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            personality: personality.to_string(),
            goals: goals.to_string(),
        }
    }

    fn record(title: &str, skills: &[&str]) -> CareerRecord {
        CareerRecord {
            title: title.to_string(),
            domain: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            description: format!("{title} description"),
            roadmap: vec![format!("Become a {title}")],
        }
    }

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn summary(results: &[ScoredCareer]) -> Vec<(&str, f64)> {
        results
            .iter()
            .map(|c| (c.title.as_str(), c.match_score))
            .collect()
    }

    #[test]
    fn test_programming_profile_ranks_software_engineer_first() {
        let recommender = builtin_recommender();
        let p = profile(
            &["programming", "algorithms"],
            "cs degree",
            &["technology"],
            "analytical",
            "build software",
        );

        let results = recommender.recommend(&p);
        assert_eq!(
            summary(&results),
            vec![
                ("Software Engineer", 12.0),
                ("Software Engineer", 11.0),
                ("Web Developer", 11.0),
            ]
        );
        assert_eq!(
            results[0].roadmap[0],
            "Earn a degree in Computer Science or related field"
        );
    }

    #[test]
    fn test_programming_profile_expands_synonym_class() {
        let recommender = builtin_recommender();
        let p = profile(&["programming"], "", &[], "", "");
        let expanded = recommender.profile_keywords(&p);
        for term in ["coding", "software development", "developer", "engineer"] {
            assert!(expanded.contains(term), "missing {term}");
        }
    }

    #[test]
    fn test_nonsense_profile_returns_sentinel() {
        let recommender = builtin_recommender();
        let p = profile(&["xyzzy123"], "xyzzy123", &["xyzzy123"], "xyzzy123", "xyzzy123");

        let results = recommender.recommend(&p);
        assert_eq!(results, vec![ScoredCareer::no_match()]);
        assert_eq!(results[0].title, NO_MATCH_TITLE);
        assert_eq!(results[0].match_score, 0.0);
        assert!(results[0].roadmap.is_empty());
    }

    #[test]
    fn test_empty_profile_returns_sentinel() {
        let recommender = builtin_recommender();
        let results = recommender.recommend(&profile(&[], "", &[], "", ""));
        assert_eq!(results, vec![ScoredCareer::no_match()]);
    }

    #[test]
    fn test_empty_catalog_returns_sentinel() {
        let recommender = ContentBasedRecommender::new(
            Arc::new(CareerCatalog::default()),
            Arc::new(SynonymMap::builtin()),
        );
        let results = recommender.recommend(&profile(&["programming"], "", &[], "", ""));
        assert_eq!(results, vec![ScoredCareer::no_match()]);
        assert_eq!(recommender.catalog_len(), 0);
    }

    #[test]
    fn test_ties_broken_by_title_and_duplicates_kept_in_catalog_order() {
        let recommender = builtin_recommender();
        let results = recommender.recommend(&profile(&["math", "physics"], "", &[], "", ""));

        assert_eq!(
            summary(&results),
            vec![
                ("Mechanical Engineer", 6.0),
                ("Mechanical Engineer", 6.0),
                ("Research Physicist", 6.0),
            ]
        );
        // domain-tagged record comes first in the catalog
        assert_eq!(results[0].roadmap[0], "Earn a degree in Mechanical Engineering");
        assert_eq!(results[1].roadmap[0], "Study engineering fundamentals");
    }

    #[test]
    fn test_fuzzy_only_matches_score_half_points() {
        let recommender = builtin_recommender();
        // "cooking" hits Chef exactly and is close to "coding" in the programming class
        let results = recommender.recommend(&profile(&["cooking"], "", &[], "", ""));
        assert_eq!(
            summary(&results),
            vec![
                ("Chef", 1.0),
                ("Data Scientist", 0.5),
                ("Data Scientist", 0.5),
            ]
        );
    }

    #[test]
    fn test_medical_profile() {
        let recommender = builtin_recommender();
        let p = profile(
            &["empathy", "patience"],
            "",
            &["medicine"],
            "caring",
            "help people",
        );
        let results = recommender.recommend(&p);
        assert_eq!(
            summary(&results),
            vec![("Nurse", 8.0), ("Veterinarian", 7.0), ("Cardiologist", 6.5)]
        );
    }

    #[test]
    fn test_profile_case_is_folded() {
        let recommender = builtin_recommender();
        let lower = recommender.recommend(&profile(&["math", "physics"], "", &[], "", ""));
        let upper = recommender.recommend(&profile(&["MATH", "Physics"], "", &[], "", ""));
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_catalog_skills_are_lowercased() {
        let catalog = CareerCatalog::new(vec![record("Drafter", &["CAD"])]).unwrap();
        let recommender =
            ContentBasedRecommender::new(Arc::new(catalog), Arc::new(SynonymMap::builtin()));
        let results = recommender.recommend(&profile(&["cad"], "", &[], "", ""));
        assert_eq!(summary(&results), vec![("Drafter", 1.0)]);
    }

    #[test]
    fn test_results_never_exceed_three_and_are_sorted() {
        let recommender = builtin_recommender();
        let profiles = vec![
            profile(&["communication"], "", &[], "", ""),
            profile(&["leadership", "strategy"], "mba", &["business"], "", ""),
            profile(&["design", "creativity"], "", &["technology"], "", ""),
            profile(&["research", "writing"], "", &["policy analysis"], "curious", ""),
        ];

        for p in profiles {
            let results = recommender.recommend(&p);
            assert!(!results.is_empty() && results.len() <= MAX_RECOMMENDATIONS);
            for pair in results.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(
                    a.match_score > b.match_score
                        || (a.match_score == b.match_score && a.title <= b.title),
                    "{} ({}) ranked before {} ({})",
                    a.title,
                    a.match_score,
                    b.title,
                    b.match_score
                );
            }
        }
    }

    #[test]
    fn test_duplicate_titles_scored_independently() {
        let catalog = CareerCatalog::new(vec![
            record("Analyst", &["excel"]),
            record("Analyst", &["excel", "finance"]),
            record("Banker", &["finance"]),
        ])
        .unwrap();
        let recommender =
            ContentBasedRecommender::new(Arc::new(catalog), Arc::new(SynonymMap::builtin()));

        let results = recommender.recommend(&profile(&["excel", "finance"], "", &[], "", ""));
        assert_eq!(
            summary(&results),
            vec![("Analyst", 2.0), ("Analyst", 1.0), ("Banker", 1.0)]
        );
    }

    #[test]
    fn test_zero_scores_are_dropped_from_top_three() {
        let catalog = CareerCatalog::new(vec![
            record("Baker", &["baking"]),
            record("Pilot", &["aviation"]),
            record("Welder", &["welding"]),
        ])
        .unwrap();
        let recommender =
            ContentBasedRecommender::new(Arc::new(catalog), Arc::new(SynonymMap::builtin()));

        let results = recommender.recommend(&profile(&["baking"], "", &[], "", ""));
        assert_eq!(summary(&results), vec![("Baker", 1.0)]);
    }

    #[test]
    fn test_score_keywords_counts_every_similar_pair() {
        let user = keywords(&["design", "designs"]);
        let career = keywords(&["designer"]);
        // (design, designer) and (designs, designer) both clear the threshold
        assert_eq!(score_keywords(&user, &career), 1.0);
    }

    #[test]
    fn test_score_keywords_exact_match_not_double_counted_as_fuzzy() {
        let user = keywords(&["math", "maths"]);
        let career = keywords(&["math"]);
        // 1 exact + (maths, math) fuzzy; (math, math) is not a fuzzy pair
        assert_eq!(score_keywords(&user, &career), 1.5);
    }

    #[test]
    fn test_score_keywords_disjoint_sets_score_zero() {
        assert_eq!(
            score_keywords(&keywords(&["xyzzy123"]), &keywords(&["teamwork"])),
            0.0
        );
    }

    #[test]
    fn test_recommender_is_shareable_across_threads() {
        let recommender: Arc<dyn CareerRecommender> = Arc::new(builtin_recommender());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recommender = Arc::clone(&recommender);
                std::thread::spawn(move || {
                    recommender.recommend(&profile(&["cooking"], "", &[], "", ""))
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().unwrap();
            assert_eq!(results[0].title, "Chef");
        }
    }

    #[test]
    fn test_scored_career_serializes_with_career_key() {
        let value = serde_json::to_value(ScoredCareer::no_match()).unwrap();
        assert_eq!(value["career"], "No strong match found");
        assert_eq!(value["match_score"], 0.0);
        assert!(value.get("title").is_none());
    }
}
