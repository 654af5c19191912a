//! Clinic filtering domain service.

use crate::domain::entities::ClinicRecord;
use crate::domain::value_objects::{SearchCondition, SearchOperator};

/// Domain service applying a [`SearchCondition`] to clinic records.
pub struct ClinicFilter;

impl ClinicFilter {
    /// Keep the clinics matching `condition` under `operator`.
    pub fn apply<T: ClinicRecord>(
        clinics: Vec<T>,
        condition: &SearchCondition,
        operator: SearchOperator,
    ) -> Vec<T> {
        clinics
            .into_iter()
            .filter(|clinic| match operator {
                SearchOperator::And => Self::matches_all(clinic, condition),
                SearchOperator::Or => Self::matches_any(clinic, condition),
            })
            .collect()
    }

    /// OR semantics: any supplied predicate holding is enough.
    pub fn matches_any<T: ClinicRecord>(clinic: &T, condition: &SearchCondition) -> bool {
        let name = condition
            .name_phrase
            .as_deref()
            .is_some_and(|phrase| name_matches(clinic.name(), phrase));

        let region = condition
            .region_phrase
            .as_deref()
            .is_some_and(|phrase| region_matches(clinic.region(), phrase));

        let time = condition
            .window
            .admits(clinic.opens_at(), clinic.closes_at())
            .unwrap_or(false);

        name || region || time
    }

    /// AND semantics as sequential narrowing.
    ///
    /// Each later check only runs while the record is still a candidate and
    /// overwrites the result of the earlier ones. The region check also runs
    /// when no name phrase was given, and the time check also runs when the
    /// condition holds time bounds only.
    pub fn matches_all<T: ClinicRecord>(clinic: &T, condition: &SearchCondition) -> bool {
        let mut matched = false;

        if let Some(phrase) = condition.name_phrase.as_deref() {
            matched = name_matches(clinic.name(), phrase);
        }

        if let Some(phrase) = condition.region_phrase.as_deref() {
            if matched || condition.name_phrase.is_none() {
                matched = region_matches(clinic.region(), phrase);
            }
        }

        if condition.only_time_conditions() || matched {
            if let Some(admitted) = condition
                .window
                .admits(clinic.opens_at(), clinic.closes_at())
            {
                matched = admitted;
            }
        }

        matched
    }
}

/// The phrase equals the whole lower-cased name or one of its words.
fn name_matches(name: &str, phrase: &str) -> bool {
    let name = name.to_lowercase();
    name == phrase || name.split_whitespace().any(|word| word == phrase)
}

fn region_matches(region: &str, phrase: &str) -> bool {
    region.to_lowercase() == phrase
}
