//! Travel requests captured from the input form, and the errors raised while parsing them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Format used for travel dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used when displaying travel times.
pub const TIME_FORMAT: &str = "%H:%M";
/// Longer time format also accepted from the form.
pub const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Errors that can occur while turning form input into a request.
pub enum RequestError {
    /// Date field is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Time field is not an `HH:MM` wall-clock time.
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    /// Location field is blank.
    #[error("Enter a location")]
    EmptyLocation,
    /// Condition label does not name a known condition.
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// User-submitted date, time, and location for a forecast.
pub struct TravelRequest {
    /// Travel date.
    pub date: NaiveDate,
    /// Travel time.
    pub time: NaiveTime,
    /// Free-text location.
    pub location: String,
}

/// Parse a form time given as `HH:MM` or `HH:MM:SS`, ignoring surrounding blanks.
///
/// # Errors
///
/// Returns [`RequestError::InvalidTime`] when neither format matches.
pub fn parse_time(text: &str) -> Result<NaiveTime, RequestError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_err| NaiveTime::parse_from_str(trimmed, TIME_WITH_SECONDS_FORMAT))
        .map_err(|_err| RequestError::InvalidTime(trimmed.to_owned()))
}

impl TravelRequest {
    /// Construct a request from already-typed values.
    #[must_use]
    pub fn new<L: Into<String>>(date: NaiveDate, time: NaiveTime, location: L) -> Self {
        Self {
            date,
            time,
            location: location.into(),
        }
    }

    /// Parse raw form fields into a request.
    ///
    /// The time accepts `HH:MM` or `HH:MM:SS`; the location is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] naming the first field that does not parse.
    pub fn parse(date: &str, time: &str, location: &str) -> Result<Self, RequestError> {
        let date_text = date.trim();
        let parsed_date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_err| RequestError::InvalidDate(date_text.to_owned()))?;

        let parsed_time = parse_time(time)?;

        let location_text = location.trim();
        if location_text.is_empty() {
            return Err(RequestError::EmptyLocation);
        }

        Ok(Self::new(parsed_date, parsed_time, location_text))
    }

    /// Header shown above the forecast panels.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Forecast for {} on {} at {}",
            self.location,
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT)
        )
    }
}
