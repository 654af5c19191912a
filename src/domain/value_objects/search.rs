//! Search condition value objects.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

/// Seconds the exclusive time bounds are pulled inward by.
///
/// Directory times have minute resolution, so a one second margin keeps a
/// record whose time equals the bound out of the result.
pub const BOUND_MARGIN_SECS: i64 = 1;

/// How multiple predicates of a condition are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchOperator {
    And,
    #[default]
    Or,
}

impl SearchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperator::And => "and",
            SearchOperator::Or => "or",
        }
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for operator values other than `and`/`or`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search operator: {0}")]
pub struct UnknownOperator(pub String);

impl FromStr for SearchOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(SearchOperator::And),
            "or" => Ok(SearchOperator::Or),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// Opening-hours window requested by the caller.
///
/// Both bounds are exclusive and hold the time exactly as the caller gave it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub opens_after: Option<NaiveTime>,
    pub closes_before: Option<NaiveTime>,
}

impl TimeWindow {
    pub fn is_empty(&self) -> bool {
        self.opens_after.is_none() && self.closes_before.is_none()
    }

    /// Evaluate the window against a record's hours.
    ///
    /// Returns `None` when no bound is set. A record time that could not be
    /// parsed never satisfies a bound.
    pub fn admits(&self, opens_at: Option<NaiveTime>, closes_at: Option<NaiveTime>) -> Option<bool> {
        match (self.opens_after, self.closes_before) {
            (None, None) => None,
            (Some(after), None) => Some(is_after(opens_at, after)),
            (None, Some(before)) => Some(is_before(closes_at, before)),
            (Some(after), Some(before)) => {
                Some(is_after(opens_at, after) && is_before(closes_at, before))
            }
        }
    }
}

fn seconds(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}

fn is_after(time: Option<NaiveTime>, bound: NaiveTime) -> bool {
    time.is_some_and(|t| seconds(t) > seconds(bound) + BOUND_MARGIN_SECS)
}

fn is_before(time: Option<NaiveTime>, bound: NaiveTime) -> bool {
    time.is_some_and(|t| seconds(t) < seconds(bound) - BOUND_MARGIN_SECS)
}

/// Parsed, validated filter request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCondition {
    /// Lower-cased clinic name phrase
    pub name_phrase: Option<String>,

    /// Lower-cased state phrase
    pub region_phrase: Option<String>,

    pub window: TimeWindow,
}

impl SearchCondition {
    /// True when no name or region phrase was supplied.
    pub fn only_time_conditions(&self) -> bool {
        self.name_phrase.is_none() && self.region_phrase.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.only_time_conditions() && self.window.is_empty()
    }
}
