use serde::{Deserialize, Serialize};

use crate::domain::HasId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GiftType {
    #[default]
    Salami,
    Gift,
    Nyoondrah,
}

/// A monetary gift entry. `guest_name` and `event` are free text, not
/// foreign keys into the guest or event collections.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GiftLog {
    pub id: String,
    pub guest_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub gift_type: GiftType,
    pub event: String,
    pub notes: String,
}

impl HasId for GiftLog {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewGiftLog {
    pub guest_name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub gift_type: GiftType,
    pub event: String,
    pub notes: String,
}

impl NewGiftLog {
    pub fn into_gift(self, id: String) -> GiftLog {
        GiftLog {
            id,
            guest_name: self.guest_name.trim().to_string(),
            amount: self.amount,
            gift_type: self.gift_type,
            event: self.event.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateGiftLog {
    pub guest_name: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub event: Option<String>,
    pub notes: Option<String>,
}

impl UpdateGiftLog {
    pub fn apply(self, gift: &mut GiftLog) {
        if let Some(guest_name) = self.guest_name {
            gift.guest_name = guest_name.trim().to_string();
        }
        if let Some(amount) = self.amount {
            gift.amount = amount;
        }
        if let Some(gift_type) = self.gift_type {
            gift.gift_type = gift_type;
        }
        if let Some(event) = self.event {
            gift.event = event.trim().to_string();
        }
        if let Some(notes) = self.notes {
            gift.notes = notes.trim().to_string();
        }
    }
}
