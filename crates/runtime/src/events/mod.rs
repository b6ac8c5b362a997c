//! Topic-based event routing for runtime observers.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ActionEvent, EncounterEvent, LogEvent};
