use serde::{Deserialize, Serialize};

use crate::domain::HasId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuitType {
    #[default]
    Suit,
    Sherwani,
    Maxi,
    Waistcoat,
    Lehenga,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuitStatus {
    #[default]
    #[serde(rename = "Fabric Bought")]
    FabricBought,
    #[serde(rename = "At Tailor")]
    AtTailor,
    Ready,
    Collected,
}

/// Wardrobe item. The wardrobe manager UI is unbuilt, so suits are
/// never pushed to the tabular store, but they must survive the local
/// cache round-trip.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Suit {
    pub id: String,
    pub owner: String,
    #[serde(rename = "type")]
    pub suit_type: SuitType,
    pub tailor: String,
    pub status: SuitStatus,
}

impl HasId for Suit {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewSuit {
    pub owner: String,
    #[serde(rename = "type")]
    pub suit_type: SuitType,
    pub tailor: String,
    pub status: SuitStatus,
}

impl NewSuit {
    pub fn into_suit(self, id: String) -> Suit {
        Suit {
            id,
            owner: self.owner.trim().to_string(),
            suit_type: self.suit_type,
            tailor: self.tailor.trim().to_string(),
            status: self.status,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSuit {
    pub owner: Option<String>,
    #[serde(rename = "type")]
    pub suit_type: Option<SuitType>,
    pub tailor: Option<String>,
    pub status: Option<SuitStatus>,
}

impl UpdateSuit {
    pub fn apply(self, suit: &mut Suit) {
        if let Some(owner) = self.owner {
            suit.owner = owner.trim().to_string();
        }
        if let Some(suit_type) = self.suit_type {
            suit.suit_type = suit_type;
        }
        if let Some(tailor) = self.tailor {
            suit.tailor = tailor.trim().to_string();
        }
        if let Some(status) = self.status {
            suit.status = status;
        }
    }
}
