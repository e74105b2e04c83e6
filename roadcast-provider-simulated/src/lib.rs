//! Provider implementation that samples readings uniformly at random.
//!
//! Nothing here looks at the requested location: it is copied into the
//! reading for display and otherwise ignored.

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, RngExt, SeedableRng};
use tracing::trace;

use roadcast_core::{
    model::{
        Condition, PRECIPITATION_RANGE, Reading, TEMPERATURE_RANGE, TrafficIncident, TrendSample,
        TrendSeries, WIND_SPEED_RANGE,
    },
    ports::{ConditionsPort, SourceMeta},
};

/// Conditions source backed by a random number generator.
#[derive(Debug)]
pub struct SimulatedProvider<R = StdRng> {
    rng: R,
    meta: SourceMeta,
}

impl SimulatedProvider<StdRng> {
    /// Create a provider seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Create a provider whose output is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SimulatedProvider<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedProvider<R> {
    /// Create a provider drawing from the given generator.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            meta: source_meta(),
        }
    }

    /// Hand back the generator, e.g. to inspect how far it advanced.
    #[must_use]
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> ConditionsPort for SimulatedProvider<R> {
    fn source(&self) -> &SourceMeta {
        &self.meta
    }

    fn reading(&mut self, location: &str) -> Reading {
        generate_reading(&mut self.rng, location)
    }

    fn trend(&mut self, end: NaiveDateTime, points: usize) -> TrendSeries {
        generate_trend(&mut self.rng, end, points)
    }
}

/// Sample one reading. Every field is drawn independently.
pub fn generate_reading<R: Rng + ?Sized>(rng: &mut R, location: &str) -> Reading {
    let reading = Reading {
        location: location.to_owned(),
        condition: *Condition::ALL.choose(rng).unwrap_or(&Condition::Sunny),
        temperature_c: rng.random_range(TEMPERATURE_RANGE),
        wind_speed_kmh: rng.random_range(WIND_SPEED_RANGE),
        precipitation_pct: rng.random_range(PRECIPITATION_RANGE),
        traffic: *TrafficIncident::ALL
            .choose(rng)
            .unwrap_or(&TrafficIncident::None),
    };
    trace!(?reading, "sampled reading");
    reading
}

/// Sample `points` hourly trend samples ending at `end`.
///
/// The samples are unrelated to any reading produced before or after.
pub fn generate_trend<R: Rng + ?Sized>(
    rng: &mut R,
    end: NaiveDateTime,
    points: usize,
) -> TrendSeries {
    let samples = TrendSeries::hourly_slots(end, points)
        .into_iter()
        .map(|at| TrendSample {
            at,
            temperature_c: rng.random_range(TEMPERATURE_RANGE),
            wind_speed_kmh: rng.random_range(WIND_SPEED_RANGE),
            precipitation_pct: rng.random_range(PRECIPITATION_RANGE),
        })
        .collect();
    trace!(points, %end, "sampled trend series");
    TrendSeries { samples }
}

fn source_meta() -> SourceMeta {
    SourceMeta {
        id: String::from("simulated"),
        name: String::from("Simulated feed"),
    }
}
