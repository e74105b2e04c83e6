//! Core types and view-state wiring for the roadcast weather and traffic dashboard.

/// Domain models and value ranges shared by all providers.
pub mod model;
/// Traits describing the provider interfaces.
pub mod ports;
/// Travel requests captured from user input.
pub mod request;
/// High-level service facade used by clients.
pub mod service;
/// View state and the reducer driving it.
pub mod state;
/// Condition to theme lookup table.
pub mod theme;

#[cfg(test)]
mod test_support;

pub use model::*;
pub use ports::*;
pub use request::*;
pub use service::*;
pub use state::*;
pub use theme::*;
