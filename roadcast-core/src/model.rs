//! Domain data structures for readings, trend series, and their value ranges.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::request::RequestError;

/// Inclusive temperature range in °C.
pub const TEMPERATURE_RANGE: RangeInclusive<i16> = 5..=35;
/// Inclusive wind speed range in km/h.
pub const WIND_SPEED_RANGE: RangeInclusive<u16> = 1..=30;
/// Inclusive precipitation probability range in percent.
pub const PRECIPITATION_RANGE: RangeInclusive<u8> = 0..=100;
/// Number of hourly samples in a trend series.
pub const TREND_POINTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Sky condition reported by a reading.
pub enum Condition {
    /// Clear sky.
    Sunny,
    /// Overcast.
    Cloudy,
    /// Rain showers.
    Rainy,
    /// Strong wind.
    Windy,
    /// Snowfall.
    Snow,
}

impl Condition {
    /// Every condition a provider may report.
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Windy,
        Condition::Snow,
    ];

    /// Human-readable label, also accepted by [`Condition::from_str`].
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Windy => "Windy",
            Condition::Snow => "Snow",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = RequestError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Condition::ALL
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RequestError::UnknownCondition(trimmed.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Traffic situation reported alongside the weather.
pub enum TrafficIncident {
    /// Roads are clear.
    None,
    /// An accident was reported.
    Accident,
    /// Congestion.
    HeavyTraffic,
    /// A road is closed.
    RoadClosure,
}

impl TrafficIncident {
    /// Every incident kind a provider may report.
    pub const ALL: [TrafficIncident; 4] = [
        TrafficIncident::None,
        TrafficIncident::Accident,
        TrafficIncident::HeavyTraffic,
        TrafficIncident::RoadClosure,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrafficIncident::None => "None",
            TrafficIncident::Accident => "Accident",
            TrafficIncident::HeavyTraffic => "Heavy Traffic",
            TrafficIncident::RoadClosure => "Road Closure",
        }
    }
}

impl fmt::Display for TrafficIncident {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One simulated weather and traffic data point.
pub struct Reading {
    /// Location the reading was requested for. Carried through for display only.
    pub location: String,
    /// Sky condition.
    pub condition: Condition,
    /// Air temperature in °C.
    pub temperature_c: i16,
    /// Wind speed in km/h.
    pub wind_speed_kmh: u16,
    /// Chance of precipitation in percent.
    pub precipitation_pct: u8,
    /// Reported traffic situation.
    pub traffic: TrafficIncident,
}

impl Reading {
    /// Check every numeric field against its documented range.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        TEMPERATURE_RANGE.contains(&self.temperature_c)
            && WIND_SPEED_RANGE.contains(&self.wind_speed_kmh)
            && PRECIPITATION_RANGE.contains(&self.precipitation_pct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Single hourly point of a trend series.
pub struct TrendSample {
    /// Timestamp of the sample.
    pub at: NaiveDateTime,
    /// Air temperature in °C.
    pub temperature_c: i16,
    /// Wind speed in km/h.
    pub wind_speed_kmh: u16,
    /// Chance of precipitation in percent.
    pub precipitation_pct: u8,
}

impl TrendSample {
    /// Check every numeric field against its documented range.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        TEMPERATURE_RANGE.contains(&self.temperature_c)
            && WIND_SPEED_RANGE.contains(&self.wind_speed_kmh)
            && PRECIPITATION_RANGE.contains(&self.precipitation_pct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Metrics plotted by the trend chart.
pub enum Metric {
    /// Temperature in °C.
    Temperature,
    /// Wind speed in km/h.
    WindSpeed,
    /// Precipitation in percent.
    Precipitation,
}

impl Metric {
    /// Chart order of the metrics.
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::WindSpeed, Metric::Precipitation];

    /// Series name shown in the chart legend.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::WindSpeed => "Wind Speed",
            Metric::Precipitation => "Precipitation",
        }
    }

    fn value(self, sample: &TrendSample) -> f64 {
        match self {
            Metric::Temperature => f64::from(sample.temperature_c),
            Metric::WindSpeed => f64::from(sample.wind_speed_kmh),
            Metric::Precipitation => f64::from(sample.precipitation_pct),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Synthetic hourly series shown in the trend chart.
pub struct TrendSeries {
    /// Samples ordered by timestamp, oldest first.
    pub samples: Vec<TrendSample>,
}

impl TrendSeries {
    /// Timestamps of `points` hourly slots ending at `end`, oldest first.
    #[must_use]
    pub fn hourly_slots(end: NaiveDateTime, points: usize) -> Vec<NaiveDateTime> {
        (0..points)
            .rev()
            .map(|hours_back| {
                let hours = i64::try_from(hours_back).unwrap_or(i64::MAX);
                end - Duration::hours(hours)
            })
            .collect()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of the oldest sample.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.samples.first().map(|sample| sample.at)
    }

    /// Timestamp of the newest sample.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.samples.last().map(|sample| sample.at)
    }

    /// True when consecutive samples are exactly one hour apart.
    #[must_use]
    pub fn is_hourly(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| matches!(pair, [older, newer] if newer.at - older.at == Duration::hours(1)))
    }

    /// `(index, value)` points for one metric, ready for plotting.
    #[must_use]
    pub fn points(&self, metric: Metric) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .zip(0_u32..)
            .map(|(sample, index)| (f64::from(index), metric.value(sample)))
            .collect()
    }
}
