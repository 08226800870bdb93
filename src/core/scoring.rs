use crate::core::interests::{interest_set, jaccard_index, shared_interests};
use crate::models::{MatchWeights, User};

/// Calculate a compatibility score (0.0-1.0) between a subject and a candidate
///
/// Scoring formula:
/// score = (
///     age_score * 0.3 +          # step function over the age difference
///     location_score * 0.2 +     # same city (case-insensitive)
///     interest_score * 0.5       # Jaccard index of the interest sets
/// )
///
/// With the default weights the age steps contribute 0.3 / 0.2 / 0.1 / 0.0
/// and the total is capped at 1.0 because the weights sum to 1.0.
///
/// Also returns the interests shared by both users.
pub fn calculate_compatibility(
    subject: &User,
    candidate: &User,
    weights: &MatchWeights,
) -> (f64, Vec<String>) {
    let age_score = age_proximity_score(subject.age, candidate.age);

    let location_score = if subject.city.eq_ignore_ascii_case(&candidate.city) {
        1.0
    } else {
        0.0
    };

    let subject_interests = interest_set(&subject.interests);
    let candidate_interests = interest_set(&candidate.interests);
    let interest_score = jaccard_index(&subject_interests, &candidate_interests);
    let shared = shared_interests(&subject_interests, &candidate_interests);

    let total = age_score * weights.age
        + location_score * weights.location
        + interest_score * weights.interests;

    (total.min(1.0).max(0.0), shared)
}

/// Age proximity score (0-1), a step function over the absolute difference
///
/// diff <= 5 -> 1.0, diff <= 10 -> 2/3, diff <= 15 -> 1/3, else 0.0.
#[inline]
pub fn age_proximity_score(subject_age: i32, candidate_age: i32) -> f64 {
    match (subject_age - candidate_age).abs() {
        0..=5 => 1.0,
        6..=10 => 2.0 / 3.0,
        11..=15 => 1.0 / 3.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn user(id: i32, age: i32, city: &str, interests: &str) -> User {
        User {
            id,
            name: format!("User {}", id),
            age,
            gender: Gender::Female,
            email: format!("user{}@example.com", id),
            city: city.to_string(),
            interests: interests.to_string(),
        }
    }

    #[test]
    fn test_identical_users_score_one() {
        let a = user(1, 30, "Paris", "hiking,music");
        let b = user(2, 30, "Paris", "hiking,music");
        let (score, shared) = calculate_compatibility(&a, &b, &MatchWeights::default());
        assert_eq!(score, 1.0);
        assert_eq!(shared, vec!["hiking", "music"]);
    }

    #[test]
    fn test_age_step_boundaries() {
        assert_eq!(age_proximity_score(30, 25), 1.0);
        assert_eq!(age_proximity_score(30, 24), 2.0 / 3.0);
        assert_eq!(age_proximity_score(30, 20), 2.0 / 3.0);
        assert_eq!(age_proximity_score(30, 19), 1.0 / 3.0);
        assert_eq!(age_proximity_score(30, 15), 1.0 / 3.0);
        assert_eq!(age_proximity_score(30, 14), 0.0);
    }

    #[test]
    fn test_age_contribution_steps() {
        let weights = MatchWeights::default();
        let base = user(1, 30, "Paris", "x");

        for (candidate_age, expected) in [(36, 0.2), (41, 0.1), (46, 0.0)] {
            let other = user(2, candidate_age, "Lyon", "y");
            let (score, _) = calculate_compatibility(&base, &other, &weights);
            // Only the age factor contributes here
            assert!(
                (score - expected).abs() < 1e-9,
                "age {} expected {} got {}",
                candidate_age,
                expected,
                score
            );
        }
    }

    #[test]
    fn test_city_comparison_case_insensitive() {
        let a = user(1, 30, "Paris", "x");
        let b = user(2, 60, "paris", "y");
        let (score, _) = calculate_compatibility(&a, &b, &MatchWeights::default());
        assert!((score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_paris_scenario() {
        // subject 30/Paris/hiking,music vs candidate 32/paris/music,travel:
        // age 0.3 + city 0.2 + jaccard(1/3) * 0.5
        let subject = user(1, 30, "Paris", "hiking,music");
        let candidate = user(2, 32, "paris", "music,travel");
        let (score, shared) = calculate_compatibility(&subject, &candidate, &MatchWeights::default());
        assert!((score - (0.5 + 0.5 / 3.0)).abs() < 1e-9);
        assert_eq!(shared, vec!["music"]);
    }

    #[test]
    fn test_blank_interests_degrade_gracefully() {
        let a = user(1, 30, "Paris", "");
        let b = user(2, 30, "Paris", "hiking");
        let (score, shared) = calculate_compatibility(&a, &b, &MatchWeights::default());
        // Age + city only; empty interest set contributes nothing
        assert!((score - 0.5).abs() < 1e-9);
        assert!(shared.is_empty());
    }

    #[test]
    fn test_score_range() {
        let weights = MatchWeights::default();
        let subject = user(1, 45, "Berlin", "chess,running,cooking");
        for (age, city, interests) in [
            (18, "Berlin", ""),
            (100, "Madrid", "chess"),
            (45, "berlin", "chess,running,cooking"),
            (60, "Rome", "knitting"),
        ] {
            let candidate = user(2, age, city, interests);
            let (score, _) = calculate_compatibility(&subject, &candidate, &weights);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}
