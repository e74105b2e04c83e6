//! Traits describing where readings and trend series come from.

use chrono::NaiveDateTime;

use crate::model::{Reading, TrendSeries};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Metadata describing a conditions source.
pub struct SourceMeta {
    /// Unique identifier.
    pub id: String,
    /// Display name shown in the title bar.
    pub name: String,
}

/// Trait for backends that produce weather and traffic data.
///
/// Methods take `&mut self` so implementations can own and advance their
/// random source without interior mutability.
pub trait ConditionsPort {
    /// Metadata describing this source.
    fn source(&self) -> &SourceMeta;

    /// Produce a fresh reading for `location`.
    fn reading(&mut self, location: &str) -> Reading;

    /// Produce `points` hourly samples ending at `end`.
    fn trend(&mut self, end: NaiveDateTime, points: usize) -> TrendSeries;
}
