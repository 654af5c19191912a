//! Clinic entities.
//!
//! The dental and veterinary directories publish the same logical record under
//! different JSON field names. Each source keeps its own struct so responses
//! stay wire-compatible with the upstream shape, and both expose the common
//! [`ClinicRecord`] accessors used by the filter engine.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Wall-clock format used by both directories for opening hours.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Accessors shared by every clinic shape.
pub trait ClinicRecord {
    /// Display name of the clinic.
    fn name(&self) -> &str;

    /// State (or state code) the clinic is located in.
    fn region(&self) -> &str;

    /// Daily opening window as published by the directory.
    fn hours(&self) -> &OpeningHours;

    /// Opening time, `None` if the directory value is not `HH:MM`.
    fn opens_at(&self) -> Option<NaiveTime> {
        self.hours().opens_at()
    }

    /// Closing time, `None` if the directory value is not `HH:MM`.
    fn closes_at(&self) -> Option<NaiveTime> {
        self.hours().closes_at()
    }
}

/// Daily opening window, kept as the raw strings the directory sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Opening time (`HH:MM`)
    pub from: String,

    /// Closing time (`HH:MM`)
    pub to: String,
}

impl OpeningHours {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn opens_at(&self) -> Option<NaiveTime> {
        parse_clock_time(&self.from)
    }

    pub fn closes_at(&self) -> Option<NaiveTime> {
        parse_clock_time(&self.to)
    }
}

/// Parse a 24-hour `HH:MM` wall-clock value.
///
/// The hour may be one or two digits, the minute is always two. Surrounding
/// whitespace is rejected.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.split_once(':')?;
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if !matches!(hour.len(), 1 | 2) || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return None;
    }

    NaiveTime::parse_from_str(value, CLOCK_FORMAT).ok()
}

/// Entry of the dental clinic directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DentalClinic {
    pub name: String,

    #[serde(rename = "stateName")]
    pub state_name: String,

    pub availability: OpeningHours,
}

impl ClinicRecord for DentalClinic {
    fn name(&self) -> &str {
        &self.name
    }

    fn region(&self) -> &str {
        &self.state_name
    }

    fn hours(&self) -> &OpeningHours {
        &self.availability
    }
}

/// Entry of the veterinary clinic directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetClinic {
    #[serde(rename = "clinicName")]
    pub clinic_name: String,

    #[serde(rename = "stateCode")]
    pub state_code: String,

    pub opening: OpeningHours,
}

impl ClinicRecord for VetClinic {
    fn name(&self) -> &str {
        &self.clinic_name
    }

    fn region(&self) -> &str {
        &self.state_code
    }

    fn hours(&self) -> &OpeningHours {
        &self.opening
    }
}
