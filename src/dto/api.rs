//! The action envelope spoken by the tabular-store endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::app_data::AppData;
use crate::domain::event::WeddingEvent;
use crate::domain::gift::GiftLog;
use crate::domain::guest::Guest;
use crate::domain::task::Task;
use crate::domain::vendor::Vendor;

pub const ACTION_GET_ALL: &str = "GET_ALL";
pub const ACTION_SYNC_DATA: &str = "SYNC_DATA";

#[derive(Clone, Debug, Deserialize)]
pub struct ApiRequest {
    pub action: String,
    #[serde(default)]
    pub data: Option<SyncPayload>,
}

/// Any subset of the five actively synced collections. Absent
/// collections are left untouched by `SYNC_DATA`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyncPayload {
    pub guests: Option<Vec<Guest>>,
    pub events: Option<Vec<WeddingEvent>>,
    pub vendors: Option<Vec<Vendor>>,
    pub tasks: Option<Vec<Task>>,
    pub gifts: Option<Vec<GiftLog>>,
}

impl From<&AppData> for SyncPayload {
    fn from(data: &AppData) -> Self {
        if !data.suits.is_empty() {
            // Declared but not part of the sync contract; see the
            // Suits schema note.
            log::warn!(
                "{} suit(s) present locally but the tabular store does not sync suits",
                data.suits.len()
            );
        }
        Self {
            guests: Some(data.guests.clone()),
            events: Some(data.events.clone()),
            vendors: Some(data.vendors.clone()),
            tasks: Some(data.tasks.clone()),
            gifts: Some(data.gifts.clone()),
        }
    }
}

/// Structured success/error envelope returned by every remote request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AppData>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            status: "success".into(),
            message: None,
            data: None,
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success()
        }
    }

    pub fn success_data(data: AppData) -> Self {
        Self {
            data: Some(data),
            ..Self::success()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: Some(message.into()),
            data: None,
        }
    }
}
