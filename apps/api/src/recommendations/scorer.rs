//! Match scoring — a fixed-weight additive rule over attribute overlaps
//! between a preference record and each posting.
//!
//! Pure and synchronous: no shared state, safe to call concurrently.
//! Identical inputs always produce identical output.

use std::collections::HashSet;

use crate::models::internship::{Posting, PreferenceRecord, ScoredPosting};

const SKILL_MATCH_POINTS: u32 = 10;
const LOCATION_MATCH_POINTS: u32 = 5;
const WORK_MODE_MATCH_POINTS: u32 = 3;
const SECTOR_MATCH_POINTS: u32 = 5;
const EDUCATION_MATCH_POINTS: u32 = 2;

/// Maximum number of recommendations returned.
const MAX_RESULTS: usize = 5;

/// The requester-side city wildcard.
const ANY_CITY: &str = "any";

/// Scores every posting in catalog order, drops zero scores, stable-sorts
/// descending by score, and caps the result. Stability means equal scores
/// keep their catalog order.
pub fn score_catalog(prefs: &PreferenceRecord, catalog: &[Posting]) -> Vec<ScoredPosting> {
    let mut scored: Vec<ScoredPosting> = catalog
        .iter()
        .map(|posting| score_posting(prefs, posting))
        .filter(|s| s.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Applies the additive rule to a single posting:
/// +10 per covered required skill, +5 city, +3 work mode, +5 sector,
/// +2 education level.
pub fn score_posting(prefs: &PreferenceRecord, posting: &Posting) -> ScoredPosting {
    let mut score = 0;

    // Skills: union of technical and soft skills vs the posting's
    // requirements. Matched skills keep the posting's required-skill order.
    let combined: HashSet<&str> = prefs
        .technical_skills
        .iter()
        .chain(prefs.soft_skills.iter())
        .map(String::as_str)
        .collect();

    let matching_skills: Vec<String> = posting
        .required_skills
        .iter()
        .filter(|skill| combined.contains(skill.as_str()))
        .cloned()
        .collect();
    score += matching_skills.len() as u32 * SKILL_MATCH_POINTS;

    let location = posting.location.to_lowercase();
    if prefs
        .preferred_cities
        .iter()
        .any(|city| city == &location || city == ANY_CITY)
    {
        score += LOCATION_MATCH_POINTS;
    }

    if let Some(mode) = prefs.work_mode {
        if mode.accepts(&posting.work_mode) {
            score += WORK_MODE_MATCH_POINTS;
        }
    }

    if prefs.sector_interest.iter().any(|s| s == &posting.sector) {
        score += SECTOR_MATCH_POINTS;
    }

    if prefs.education_level.as_deref() == Some(posting.education_level.as_str()) {
        score += EDUCATION_MATCH_POINTS;
    }

    ScoredPosting {
        posting: posting.clone(),
        score,
        matching_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::internship::WorkMode;
    use crate::recommendations::catalog::seed_catalog;

    fn prefs() -> PreferenceRecord {
        PreferenceRecord {
            technical_skills: vec!["programming".to_string()],
            soft_skills: vec![],
            preferred_cities: vec!["bangalore".to_string()],
            work_mode: Some(WorkMode::Hybrid),
            sector_interest: vec!["technology".to_string()],
            education_level: Some("bachelor".to_string()),
            ..PreferenceRecord::default()
        }
    }

    #[test]
    fn test_reference_example_scores_25_and_ranks_first() {
        // 10 (programming) + 5 (bangalore) + 3 (hybrid) + 5 (technology)
        // + 2 (bachelor) = 25
        let results = score_catalog(&prefs(), &seed_catalog());
        assert_eq!(results[0].posting.title, "Software Development Intern");
        assert_eq!(results[0].score, 25);
        assert_eq!(results[0].matching_skills, vec!["programming".to_string()]);
    }

    #[test]
    fn test_additive_rule_per_dimension() {
        let catalog = seed_catalog();
        let posting = &catalog[0];

        let mut p = PreferenceRecord::default();
        assert_eq!(score_posting(&p, posting).score, 0);

        p.technical_skills = vec!["programming".to_string()];
        assert_eq!(score_posting(&p, posting).score, 10);

        p.preferred_cities = vec!["bangalore".to_string()];
        assert_eq!(score_posting(&p, posting).score, 15);

        p.work_mode = Some(WorkMode::Hybrid);
        assert_eq!(score_posting(&p, posting).score, 18);

        p.sector_interest = vec!["technology".to_string()];
        assert_eq!(score_posting(&p, posting).score, 23);

        p.education_level = Some("bachelor".to_string());
        assert_eq!(score_posting(&p, posting).score, 25);
    }

    #[test]
    fn test_soft_skills_count_toward_skill_matches() {
        let catalog = seed_catalog();
        // Marketing Intern requires communication, creativity,
        // analytical-thinking.
        let marketing = &catalog[2];
        let p = PreferenceRecord {
            soft_skills: vec!["communication".to_string(), "creativity".to_string()],
            ..PreferenceRecord::default()
        };
        let scored = score_posting(&p, marketing);
        assert_eq!(scored.score, 20);
        assert_eq!(
            scored.matching_skills,
            vec!["communication".to_string(), "creativity".to_string()]
        );
    }

    #[test]
    fn test_matching_skills_preserve_required_skill_order() {
        let catalog = seed_catalog();
        let software = &catalog[0]; // programming, web-development, database
        let p = PreferenceRecord {
            technical_skills: vec![
                "database".to_string(),
                "programming".to_string(),
                "web-development".to_string(),
            ],
            ..PreferenceRecord::default()
        };
        let scored = score_posting(&p, software);
        assert_eq!(
            scored.matching_skills,
            vec![
                "programming".to_string(),
                "web-development".to_string(),
                "database".to_string(),
            ]
        );
    }

    #[test]
    fn test_any_city_wildcard() {
        let catalog = seed_catalog();
        let p = PreferenceRecord {
            preferred_cities: vec!["any".to_string()],
            ..PreferenceRecord::default()
        };
        // Every posting gets the location points and nothing else.
        let results = score_catalog(&p, &catalog);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|s| s.score == 5));
    }

    #[test]
    fn test_any_work_mode_matches_all() {
        let catalog = seed_catalog();
        let p = PreferenceRecord {
            work_mode: Some(WorkMode::Any),
            ..PreferenceRecord::default()
        };
        let results = score_catalog(&p, &catalog);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|s| s.score == 3));
    }

    #[test]
    fn test_absent_work_mode_scores_nothing() {
        let catalog = seed_catalog();
        let p = PreferenceRecord::default();
        assert!(score_catalog(&p, &catalog).is_empty());
    }

    #[test]
    fn test_disjoint_preferences_yield_empty_list() {
        let p = PreferenceRecord {
            technical_skills: vec!["welding".to_string()],
            soft_skills: vec!["juggling".to_string()],
            preferred_cities: vec!["pune".to_string()],
            work_mode: Some(WorkMode::Remote),
            sector_interest: vec!["agriculture".to_string()],
            education_level: Some("doctorate".to_string()),
            ..PreferenceRecord::default()
        };
        // Remote matches posting 2, so exclude it via a catalog slice that
        // has no remote postings.
        let catalog: Vec<_> = seed_catalog()
            .into_iter()
            .filter(|posting| posting.work_mode != "remote")
            .collect();
        assert!(score_catalog(&p, &catalog).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let catalog = seed_catalog();
        // technology sector matches postings 1, 2 and 5 with equal scores;
        // catalog order must be preserved among them.
        let p = PreferenceRecord {
            sector_interest: vec!["technology".to_string()],
            ..PreferenceRecord::default()
        };
        let results = score_catalog(&p, &catalog);
        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].posting.title, "Software Development Intern");
        assert_eq!(results[1].posting.title, "Data Science Intern");
        assert_eq!(results[2].posting.title, "Cybersecurity Intern");
    }

    #[test]
    fn test_output_capped_at_five_for_long_catalogs() {
        // Duplicate the catalog so more than five postings score.
        let mut catalog = seed_catalog();
        catalog.extend(seed_catalog());
        let p = PreferenceRecord {
            preferred_cities: vec!["any".to_string()],
            ..PreferenceRecord::default()
        };
        let results = score_catalog(&p, &catalog);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_location_match_is_case_insensitive_on_posting_side() {
        let catalog = seed_catalog();
        // Posting stores "Bangalore"; preference cities are lowercase.
        let p = PreferenceRecord {
            preferred_cities: vec!["bangalore".to_string()],
            ..PreferenceRecord::default()
        };
        let scored = score_posting(&p, &catalog[0]);
        assert_eq!(scored.score, 5);
    }

    #[test]
    fn test_empty_catalog_is_empty_output() {
        assert!(score_catalog(&prefs(), &[]).is_empty());
    }
}
