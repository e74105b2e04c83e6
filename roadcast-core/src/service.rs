//! High-level facade that owns a conditions source and drives the view state.

use chrono::NaiveDateTime;
use tracing::instrument;

use crate::ports::{ConditionsPort, SourceMeta};
use crate::state::{Event, ViewState};

/// Location used for full renders when none is configured.
pub const DEFAULT_LOCATION: &str = "Default City";

/// Public entry point for producing and updating view states.
#[derive(Debug)]
pub struct Dashboard<P> {
    port: P,
    default_location: String,
}

impl<P: ConditionsPort> Dashboard<P> {
    /// Create a new dashboard bound to the provided source.
    #[must_use]
    pub fn new<L: Into<String>>(port: P, default_location: L) -> Self {
        Self {
            port,
            default_location: default_location.into(),
        }
    }

    /// Metadata of the underlying source.
    #[must_use]
    pub fn source(&self) -> &SourceMeta {
        self.port.source()
    }

    /// Location used for full renders.
    #[must_use]
    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    /// Produce the first view of a session.
    #[instrument(skip(self), fields(location = %self.default_location))]
    pub fn start(&mut self, now: NaiveDateTime) -> ViewState {
        ViewState::initial(&mut self.port, &self.default_location, now)
    }

    /// Apply one event to `state`.
    #[instrument(skip(self, state), fields(generation = state.generation))]
    #[must_use]
    pub fn dispatch(&mut self, state: &ViewState, event: Event) -> ViewState {
        state.reduce(event, &mut self.port, &self.default_location)
    }
}
