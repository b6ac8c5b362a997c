//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::broadcast;

use super::types::{ActionEvent, EncounterEvent, LogEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Outcomes of player actions
    Action,
    /// Encounter start and resolution
    Encounter,
    /// New game log lines
    Log,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Action(ActionEvent),
    Encounter(EncounterEvent),
    Log(LogEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Action(_) => Topic::Action,
            Event::Encounter(_) => Topic::Encounter,
            Event::Log(_) => Topic::Log,
        }
    }
}

/// Topic-based event bus
///
/// Every topic owns a broadcast channel created up front; consumers only
/// receive the topics they subscribe to. Publishing never blocks and events
/// without subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    action: broadcast::Sender<Event>,
    encounter: broadcast::Sender<Event>,
    log: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            action: broadcast::channel(capacity).0,
            encounter: broadcast::channel(capacity).0,
            log: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Action => &self.action,
            Topic::Encounter => &self.encounter,
            Topic::Log => &self.log,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
