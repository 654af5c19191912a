//! Request DTOs
//!
//! Query parameters of the clinic search endpoints and their validation.

use crate::domain::entities::parse_clock_time;
use crate::domain::value_objects::{SearchCondition, SearchOperator, TimeWindow};

/// Query key for the clinic name phrase.
pub const CLINIC_NAME_KEY: &str = "clinicName";
/// Query key for the state phrase.
pub const STATE_KEY: &str = "state";
/// Query key for the lower opening bound.
pub const OPEN_FROM_KEY: &str = "openFrom";
/// Query key for the upper closing bound.
pub const OPEN_TO_KEY: &str = "openTo";
/// Query key for the `and`/`or` operator.
pub const CONDITION_KEY: &str = "condition";

/// Rejected search query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryValidationError {
    /// A recognized key was sent with an empty value.
    #[error("Please provide {0} for search.")]
    EmptyValue(&'static str),

    #[error("Please provide time in hour and minute format.")]
    InvalidTime,

    #[error("Please provide atleast one key for search.")]
    MissingSearchKey,

    #[error("Please provide a valid value for condition.")]
    InvalidCondition,
}

/// Raw clinic search parameters, first value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicSearchParams {
    pub clinic_name: Option<String>,
    pub state: Option<String>,
    pub open_from: Option<String>,
    pub open_to: Option<String>,
    pub condition: Option<String>,

    /// Whether the request carried any query parameter, recognized or not
    pub has_params: bool,
}

/// Validated search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub condition: SearchCondition,
    pub operator: SearchOperator,

    /// Return the directory untouched
    pub unfiltered: bool,
}

impl SearchQuery {
    pub fn only_time_conditions(&self) -> bool {
        self.condition.only_time_conditions()
    }
}

impl ClinicSearchParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// Unknown keys are ignored but still mark the request as having
    /// parameters. Repeated keys keep their first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            params.has_params = true;

            let slot = match key.as_ref() {
                CLINIC_NAME_KEY => &mut params.clinic_name,
                STATE_KEY => &mut params.state,
                OPEN_FROM_KEY => &mut params.open_from,
                OPEN_TO_KEY => &mut params.open_to,
                CONDITION_KEY => &mut params.condition,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        params
    }

    /// Validate the parameters into a [`SearchQuery`].
    ///
    /// Keys are checked in a fixed order and the first failure wins.
    pub fn parse(&self) -> Result<SearchQuery, QueryValidationError> {
        let mut condition = SearchCondition {
            name_phrase: phrase(self.clinic_name.as_deref(), "clinic name")?,
            region_phrase: phrase(self.state.as_deref(), "state")?,
            window: TimeWindow::default(),
        };
        condition.window.opens_after = clock_bound(self.open_from.as_deref(), "open from")?;
        condition.window.closes_before = clock_bound(self.open_to.as_deref(), "open to")?;

        let operator = match self.condition.as_deref() {
            None => SearchOperator::default(),
            Some(_) if condition.is_empty() => return Err(QueryValidationError::MissingSearchKey),
            Some("") => return Err(QueryValidationError::EmptyValue("condition")),
            Some(value) => value
                .parse::<SearchOperator>()
                .map_err(|_| QueryValidationError::InvalidCondition)?,
        };

        Ok(SearchQuery {
            condition,
            operator,
            unfiltered: !self.has_params,
        })
    }
}

fn phrase(
    value: Option<&str>,
    label: &'static str,
) -> Result<Option<String>, QueryValidationError> {
    match value {
        None => Ok(None),
        Some("") => Err(QueryValidationError::EmptyValue(label)),
        Some(value) => Ok(Some(value.to_lowercase())),
    }
}

fn clock_bound(
    value: Option<&str>,
    label: &'static str,
) -> Result<Option<chrono::NaiveTime>, QueryValidationError> {
    match value {
        None => Ok(None),
        Some("") => Err(QueryValidationError::EmptyValue(label)),
        Some(value) => parse_clock_time(value)
            .map(Some)
            .ok_or(QueryValidationError::InvalidTime),
    }
}
