use serde::{Deserialize, Serialize};

use crate::domain::HasId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rsvp {
    #[default]
    Pending,
    Accepted,
    Declined,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Family,
}

/// A wedding guest. The `events` list holds event ids the guest is
/// invited to; it must survive the sheet round-trip even though the
/// current UI never populates it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub village: String,
    pub phone: String,
    pub rsvp: Rsvp,
    pub gender: Gender,
    pub events: Vec<String>,
}

impl HasId for Guest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Creation payload; everything except the name falls back to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewGuest {
    pub name: String,
    pub village: String,
    pub phone: String,
    pub rsvp: Rsvp,
    pub gender: Gender,
    pub events: Vec<String>,
}

impl NewGuest {
    /// Finalizes the payload into a record with the given id.
    pub fn into_guest(self, id: String) -> Guest {
        Guest {
            id,
            name: self.name.trim().to_string(),
            village: self.village.trim().to_string(),
            phone: self.phone.trim().to_string(),
            rsvp: self.rsvp,
            gender: self.gender,
            events: self.events,
        }
    }
}

/// Merge-by-id patch; unset fields keep their prior values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub village: Option<String>,
    pub phone: Option<String>,
    pub rsvp: Option<Rsvp>,
    pub gender: Option<Gender>,
    pub events: Option<Vec<String>>,
}

impl UpdateGuest {
    pub fn apply(self, guest: &mut Guest) {
        if let Some(name) = self.name {
            guest.name = name.trim().to_string();
        }
        if let Some(village) = self.village {
            guest.village = village.trim().to_string();
        }
        if let Some(phone) = self.phone {
            guest.phone = phone.trim().to_string();
        }
        if let Some(rsvp) = self.rsvp {
            guest.rsvp = rsvp;
        }
        if let Some(gender) = self.gender {
            guest.gender = gender;
        }
        if let Some(events) = self.events {
            guest.events = events;
        }
    }
}
