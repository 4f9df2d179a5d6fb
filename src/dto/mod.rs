//! Wire payloads shared by the HTTP surface and the sync service.

pub mod api;
pub mod assistant;
pub mod dashboard;
