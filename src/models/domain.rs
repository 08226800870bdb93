use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User gender category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// The gender a user of this gender is matched against.
    ///
    /// This reproduces the original matching rule literally: the only branch
    /// is "is this female?", so both `Male` and `Other` target `Female`.
    /// See DESIGN.md before changing this.
    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Female => Gender::Male,
            _ => Gender::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user
///
/// `interests` is stored as a comma-separated list; the matching core
/// derives a lowercased set from it on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub email: String,
    pub city: String,
    pub interests: String,
}

/// A candidate ranked against a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub city: String,
    pub interests: String,
    pub compatibility_score: f64,
    pub shared_interests: Vec<String>,
}

/// Compatibility factor weights
///
/// The defaults sum to 1.0, which is what caps the total score at 1.0.
#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub age: f64,
    pub location: f64,
    pub interests: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            age: 0.3,
            location: 0.2,
            interests: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_case_insensitive() {
        assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("MALE").unwrap(), Gender::Male);
        assert_eq!(Gender::from_str("other").unwrap(), Gender::Other);
        assert!(Gender::from_str("unknown").is_err());
    }

    #[test]
    fn test_opposite_gender_rule() {
        assert_eq!(Gender::Female.opposite(), Gender::Male);
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        // Preserved quirk: "other" targets female
        assert_eq!(Gender::Other.opposite(), Gender::Female);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.age + w.location + w.interests - 1.0).abs() < f64::EPSILON);
    }
}
