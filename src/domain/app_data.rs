use serde::{Deserialize, Serialize};

use crate::domain::event::{EventType, WeddingEvent};
use crate::domain::gift::{GiftLog, GiftType};
use crate::domain::guest::{Gender, Guest, Rsvp};
use crate::domain::suit::Suit;
use crate::domain::task::{Priority, Task};
use crate::domain::vendor::Vendor;

/// The full in-memory aggregate for the single session. Collection keys
/// are lower case on the wire, matching the tabular store's `GET_ALL`
/// response shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppData {
    pub guests: Vec<Guest>,
    pub events: Vec<WeddingEvent>,
    pub vendors: Vec<Vendor>,
    pub tasks: Vec<Task>,
    pub suits: Vec<Suit>,
    pub gifts: Vec<GiftLog>,
}

impl AppData {
    /// Starter data used when no prior state exists or the cache slot
    /// fails to deserialize.
    pub fn seed() -> Self {
        Self {
            guests: vec![
                Guest {
                    id: "1".into(),
                    name: "Chacha Bashir".into(),
                    village: "Lahore".into(),
                    phone: "03001234567".into(),
                    rsvp: Rsvp::Accepted,
                    gender: Gender::Family,
                    events: vec![],
                },
                Guest {
                    id: "2".into(),
                    name: "Phupho Nasreen".into(),
                    village: "Faisalabad".into(),
                    phone: "03007654321".into(),
                    rsvp: Rsvp::Pending,
                    gender: Gender::Family,
                    events: vec![],
                },
                Guest {
                    id: "3".into(),
                    name: "Ahmed (Colleague)".into(),
                    village: "Islamabad".into(),
                    phone: "03211234567".into(),
                    rsvp: Rsvp::Accepted,
                    gender: Gender::Male,
                    events: vec![],
                },
            ],
            events: vec![
                WeddingEvent {
                    id: "0".into(),
                    name: "Mangni Ceremony".into(),
                    event_type: EventType::Mangni,
                    date: "2023-11-15".into(),
                    venue: "Home".into(),
                    budget: 100_000.0,
                },
                WeddingEvent {
                    id: "1".into(),
                    name: "Mehndi Night".into(),
                    event_type: EventType::Mehndi,
                    date: "2023-12-24".into(),
                    venue: "Home Lawn / Marquee".into(),
                    budget: 300_000.0,
                },
                WeddingEvent {
                    id: "2".into(),
                    name: "Barat".into(),
                    event_type: EventType::Barat,
                    date: "2023-12-25".into(),
                    venue: "Pearl Continental".into(),
                    budget: 1_500_000.0,
                },
                WeddingEvent {
                    id: "3".into(),
                    name: "Walima".into(),
                    event_type: EventType::Walima,
                    date: "2023-12-26".into(),
                    venue: "Dynasty Hall".into(),
                    budget: 1_200_000.0,
                },
            ],
            vendors: vec![
                Vendor {
                    id: "1".into(),
                    name: "Spice Catering".into(),
                    service_type: "Catering (Deg)".into(),
                    cost: 500_000.0,
                    paid_amount: 100_000.0,
                    contact: "0300...".into(),
                },
                Vendor {
                    id: "2".into(),
                    name: "Ali Photography".into(),
                    service_type: "Photography".into(),
                    cost: 80_000.0,
                    paid_amount: 20_000.0,
                    contact: "0321...".into(),
                },
            ],
            tasks: vec![
                Task {
                    id: "1".into(),
                    name: "Book Qari Sahab for Nikkah".into(),
                    priority: Priority::High,
                    assigned_to: "Abba Jaan".into(),
                    completed: false,
                },
                Task {
                    id: "2".into(),
                    name: "Buy Mithai for Nikkah Distribution".into(),
                    priority: Priority::Medium,
                    assigned_to: "Brother".into(),
                    completed: false,
                },
                Task {
                    id: "3".into(),
                    name: "Arrange Dholak for Mehndi".into(),
                    priority: Priority::Low,
                    assigned_to: "Cousins".into(),
                    completed: true,
                },
                Task {
                    id: "4".into(),
                    name: "Buy Rings for Mangni".into(),
                    priority: Priority::High,
                    assigned_to: "Ammi".into(),
                    completed: true,
                },
            ],
            suits: vec![],
            gifts: vec![
                GiftLog {
                    id: "1".into(),
                    guest_name: "Chacha Bashir".into(),
                    amount: 5_000.0,
                    gift_type: GiftType::Salami,
                    event: "Barat".into(),
                    notes: "Given on stage".into(),
                },
                GiftLog {
                    id: "2".into(),
                    guest_name: "Phupho Nasreen".into(),
                    amount: 10_000.0,
                    gift_type: GiftType::Nyoondrah,
                    event: "Mehndi".into(),
                    notes: "Recorded in register".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_uses_lower_case_collection_keys() {
        let value = serde_json::to_value(AppData::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["guests", "events", "vendors", "tasks", "suits", "gifts"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn seed_round_trips_through_json() {
        let seed = AppData::seed();
        let json = serde_json::to_string(&seed).unwrap();
        let back: AppData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
