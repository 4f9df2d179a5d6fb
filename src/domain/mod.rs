//! Domain entities managed by the wedding planner.

pub mod app_data;
pub mod event;
pub mod gift;
pub mod guest;
pub mod suit;
pub mod task;
pub mod vendor;

/// Implemented by every entity carrying an opaque string identifier.
pub trait HasId {
    fn id(&self) -> &str;
}
