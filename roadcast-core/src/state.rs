//! Immutable view state and the reducer that moves it between phases.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::model::{Reading, TREND_POINTS, TrendSeries};
use crate::ports::ConditionsPort;
use crate::request::TravelRequest;
use crate::theme::{Theme, resolve_theme};

#[derive(Debug, Clone, PartialEq, Eq)]
/// External triggers that cause a redraw.
pub enum Event {
    /// Full render: a new reading for the default location and a new trend series.
    Load {
        /// Render time, used as the end of the trend series.
        now: NaiveDateTime,
    },
    /// The user pressed "Get Forecast" with a populated request.
    SubmitForecast(TravelRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which panel set the view shows.
pub enum Phase<'state> {
    /// Live conditions for the default location.
    Initial,
    /// Forecast for a submitted request.
    ForecastRequested(&'state TravelRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the display layer needs to draw one frame.
pub struct ViewState {
    /// Reading shown in the conditions panels.
    pub reading: Reading,
    /// Series shown in the trend chart.
    pub trend: TrendSeries,
    /// Request that produced `reading`, if any.
    pub request: Option<TravelRequest>,
    /// Time of the last full render.
    pub rendered_at: NaiveDateTime,
    /// Incremented on every transition.
    pub generation: u64,
}

impl ViewState {
    /// Build the initial state for a fresh session.
    pub fn initial<P: ConditionsPort + ?Sized>(
        port: &mut P,
        default_location: &str,
        now: NaiveDateTime,
    ) -> Self {
        let reading = port.reading(default_location);
        let trend = port.trend(now, TREND_POINTS);
        debug!(
            location = default_location,
            condition = %reading.condition,
            "initial render"
        );
        Self {
            reading,
            trend,
            request: None,
            rendered_at: now,
            generation: 0,
        }
    }

    /// Apply `event` and return the next state.
    ///
    /// `Load` regenerates both the reading and the trend series and clears any
    /// request. `SubmitForecast` regenerates only the reading, for the requested
    /// location, and keeps the current trend series.
    #[must_use]
    pub fn reduce<P: ConditionsPort + ?Sized>(
        &self,
        event: Event,
        port: &mut P,
        default_location: &str,
    ) -> Self {
        let generation = self.generation.wrapping_add(1);
        match event {
            Event::Load { now } => Self {
                generation,
                ..Self::initial(port, default_location, now)
            },
            Event::SubmitForecast(request) => {
                let reading = port.reading(&request.location);
                debug!(
                    location = %request.location,
                    date = %request.date,
                    time = %request.time,
                    condition = %reading.condition,
                    generation,
                    "forecast requested"
                );
                Self {
                    reading,
                    trend: self.trend.clone(),
                    request: Some(request),
                    rendered_at: self.rendered_at,
                    generation,
                }
            }
        }
    }

    /// Current phase of the view.
    #[must_use]
    pub fn phase(&self) -> Phase<'_> {
        self.request
            .as_ref()
            .map_or(Phase::Initial, Phase::ForecastRequested)
    }

    /// Theme for the reading currently on screen.
    #[must_use]
    pub fn theme(&self) -> Theme {
        resolve_theme(self.reading.condition)
    }

    /// Header for the conditions panels.
    #[must_use]
    pub fn panel_title(&self) -> String {
        match self.phase() {
            Phase::Initial => format!("Live update for {}", self.reading.location),
            Phase::ForecastRequested(request) => request.headline(),
        }
    }
}
