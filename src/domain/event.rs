use serde::{Deserialize, Serialize};

use crate::domain::HasId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Mangni,
    Dholki,
    Mehndi,
    Barat,
    Walima,
    Nikkah,
    #[default]
    Other,
}

/// A scheduled wedding function. `date` is an ISO `YYYY-MM-DD` string
/// or empty when not yet fixed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeddingEvent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    pub venue: String,
    pub budget: f64,
}

impl HasId for WeddingEvent {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewWeddingEvent {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    pub venue: String,
    pub budget: f64,
}

impl NewWeddingEvent {
    pub fn into_event(self, id: String) -> WeddingEvent {
        WeddingEvent {
            id,
            name: self.name.trim().to_string(),
            event_type: self.event_type,
            date: self.date.trim().to_string(),
            venue: self.venue.trim().to_string(),
            budget: self.budget.max(0.0),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateWeddingEvent {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub budget: Option<f64>,
}

impl UpdateWeddingEvent {
    pub fn apply(self, event: &mut WeddingEvent) {
        if let Some(name) = self.name {
            event.name = name.trim().to_string();
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(date) = self.date {
            event.date = date.trim().to_string();
        }
        if let Some(venue) = self.venue {
            event.venue = venue.trim().to_string();
        }
        if let Some(budget) = self.budget {
            event.budget = budget.max(0.0);
        }
    }
}
