use crate::models::User;

/// Check whether a candidate is eligible for matching against a subject
///
/// A candidate qualifies when its gender is the subject's match target and
/// it is not the subject itself. The gender rule is the literal binary one
/// from `Gender::opposite`.
#[inline]
pub fn is_eligible_candidate(subject: &User, candidate: &User) -> bool {
    candidate.gender == subject.gender.opposite() && candidate.id != subject.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn user(id: i32, gender: Gender) -> User {
        User {
            id,
            name: format!("User {}", id),
            age: 30,
            gender,
            email: format!("user{}@example.com", id),
            city: "Paris".to_string(),
            interests: "hiking".to_string(),
        }
    }

    #[test]
    fn test_opposite_gender_passes() {
        let subject = user(1, Gender::Female);
        assert!(is_eligible_candidate(&subject, &user(2, Gender::Male)));
    }

    #[test]
    fn test_same_gender_filtered() {
        let subject = user(1, Gender::Female);
        assert!(!is_eligible_candidate(&subject, &user(2, Gender::Female)));
        assert!(!is_eligible_candidate(&subject, &user(3, Gender::Other)));
    }

    #[test]
    fn test_other_subject_targets_female() {
        let subject = user(1, Gender::Other);
        assert!(is_eligible_candidate(&subject, &user(2, Gender::Female)));
        assert!(!is_eligible_candidate(&subject, &user(3, Gender::Male)));
    }

    #[test]
    fn test_self_excluded() {
        let subject = user(1, Gender::Female);
        // Same id, even with an eligible gender
        assert!(!is_eligible_candidate(&subject, &user(1, Gender::Male)));
    }
}
