//! Scripted conditions source shared by unit tests.

use std::collections::VecDeque;

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{Condition, Reading, TrafficIncident, TrendSample, TrendSeries};
use crate::ports::{ConditionsPort, SourceMeta};

/// Port that replays scripted conditions and counts trend requests.
pub(crate) struct ScriptedPort {
    meta: SourceMeta,
    conditions: VecDeque<Condition>,
    pub(crate) locations: Vec<String>,
    pub(crate) trend_calls: usize,
}

impl ScriptedPort {
    pub(crate) fn new(conditions: &[Condition]) -> Self {
        Self {
            meta: SourceMeta {
                id: "scripted".to_owned(),
                name: "Scripted".to_owned(),
            },
            conditions: conditions.iter().copied().collect(),
            locations: Vec::new(),
            trend_calls: 0,
        }
    }
}

impl ConditionsPort for ScriptedPort {
    fn source(&self) -> &SourceMeta {
        &self.meta
    }

    fn reading(&mut self, location: &str) -> Reading {
        self.locations.push(location.to_owned());
        Reading {
            location: location.to_owned(),
            condition: self.conditions.pop_front().unwrap_or(Condition::Sunny),
            temperature_c: 20,
            wind_speed_kmh: 12,
            precipitation_pct: 40,
            traffic: TrafficIncident::Accident,
        }
    }

    fn trend(&mut self, end: NaiveDateTime, points: usize) -> TrendSeries {
        self.trend_calls += 1;
        let offset = i16::try_from(self.trend_calls).unwrap_or(0);
        TrendSeries {
            samples: TrendSeries::hourly_slots(end, points)
                .into_iter()
                .map(|at| TrendSample {
                    at,
                    temperature_c: 5 + offset,
                    wind_speed_kmh: 1,
                    precipitation_pct: 0,
                })
                .collect(),
        }
    }
}

pub(crate) fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}
