use chrono::{Duration, NaiveDate, NaiveDateTime};
use roadcast_core::{
    request::{DATE_FORMAT, TIME_FORMAT, TravelRequest, parse_time},
    service::Dashboard,
    state::{Event, ViewState},
};
use roadcast_provider_simulated::SimulatedProvider;
use tracing::{info, warn};

/// Minutes added or removed per Up/Down press on the time field.
const TIME_STEP_MINUTES: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Date,
    Time,
    Location,
}

impl Field {
    pub(crate) fn next(self) -> Self {
        match self {
            Field::Date => Field::Time,
            Field::Time => Field::Location,
            Field::Location => Field::Date,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Field::Date => Field::Location,
            Field::Time => Field::Date,
            Field::Location => Field::Time,
        }
    }
}

pub(crate) struct App {
    pub dashboard: Dashboard<SimulatedProvider>,
    pub view: ViewState,

    pub date_input: String,
    pub time_input: String,
    pub location_input: String,
    pub focus: Field,

    pub effects_enabled: bool,
    pub tick: u64,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(
        mut dashboard: Dashboard<SimulatedProvider>,
        form_location: &str,
        now: NaiveDateTime,
    ) -> Self {
        let view = dashboard.start(now);
        Self {
            dashboard,
            view,
            date_input: now.date().format(DATE_FORMAT).to_string(),
            time_input: now.time().format(TIME_FORMAT).to_string(),
            location_input: form_location.to_owned(),
            focus: Field::Date,
            effects_enabled: true,
            tick: 0,
            error_message: None,
        }
    }

    pub(crate) fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Date => &mut self.date_input,
            Field::Time => &mut self.time_input,
            Field::Location => &mut self.location_input,
        }
    }

    /// Parse the form and, if it is complete, request a forecast.
    pub(crate) fn submit_forecast(&mut self) {
        match TravelRequest::parse(&self.date_input, &self.time_input, &self.location_input) {
            Ok(request) => {
                info!(location = %request.location, "forecast submitted");
                self.view = self
                    .dashboard
                    .dispatch(&self.view, Event::SubmitForecast(request));
                self.error_message = None;
            }
            Err(err) => {
                warn!(%err, "rejected forecast input");
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Full render with fresh data for the default location.
    pub(crate) fn reload(&mut self, now: NaiveDateTime) {
        self.view = self.dashboard.dispatch(&self.view, Event::Load { now });
        self.error_message = None;
    }

    /// Move the focused date by `steps` days or the focused time by `steps` quarter hours.
    pub(crate) fn step_focused(&mut self, steps: i64) {
        match self.focus {
            Field::Date => match NaiveDate::parse_from_str(self.date_input.trim(), DATE_FORMAT) {
                Ok(date) => {
                    let moved = date
                        .checked_add_signed(Duration::days(steps))
                        .unwrap_or(date);
                    self.date_input = moved.format(DATE_FORMAT).to_string();
                    self.error_message = None;
                }
                Err(_err) => {
                    self.error_message = Some("Fix the date (YYYY-MM-DD) before stepping".into());
                }
            },
            Field::Time => match parse_time(&self.time_input) {
                Ok(time) => {
                    let (moved, _wrapped) = time
                        .overflowing_add_signed(Duration::minutes(steps * TIME_STEP_MINUTES));
                    self.time_input = moved.format(TIME_FORMAT).to_string();
                    self.error_message = None;
                }
                Err(_err) => {
                    self.error_message = Some("Fix the time (HH:MM) before stepping".into());
                }
            },
            Field::Location => {}
        }
    }

    pub(crate) fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
