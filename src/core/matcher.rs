use crate::core::{filters::is_eligible_candidate, scoring::calculate_compatibility};
use crate::models::{MatchWeights, ScoredMatch, User};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filter (opposite gender, not the subject itself)
/// 2. Compatibility scoring per candidate
/// 3. Minimum-score threshold (inclusive)
/// 4. Ranking and truncation
///
/// Pure over its inputs: no I/O, no shared state, safe to call concurrently
/// with independent snapshots.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Rank a candidate pool against a subject
    ///
    /// # Arguments
    /// * `subject` - The user matches are being sought for
    /// * `candidates` - Candidate snapshot from the store (may include
    ///   ineligible records; they are filtered here)
    /// * `min_score` - Minimum compatibility score to retain (inclusive)
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with matches sorted descending by score; ties are broken
    /// ascending by id so the ordering is deterministic.
    pub fn find_matches(
        &self,
        subject: &User,
        candidates: Vec<User>,
        min_score: f64,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            // Stage 1: eligibility
            .filter(|candidate| is_eligible_candidate(subject, candidate))
            // Stages 2 & 3: score and threshold
            .filter_map(|candidate| {
                let (score, shared_interests) =
                    calculate_compatibility(subject, &candidate, &self.weights);

                if score >= min_score {
                    Some(ScoredMatch {
                        id: candidate.id,
                        name: candidate.name,
                        age: candidate.age,
                        gender: candidate.gender,
                        city: candidate.city,
                        interests: candidate.interests,
                        compatibility_score: score,
                        shared_interests,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stage 4: sort by score (descending), then by id (ascending)
        scored_matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        scored_matches.truncate(limit);

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
