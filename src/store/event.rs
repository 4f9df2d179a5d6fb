use crate::domain::event::{NewWeddingEvent, UpdateWeddingEvent, WeddingEvent};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_event(&mut self, new: NewWeddingEvent) -> StoreResult<WeddingEvent> {
        required_name(&new.name)?;
        let event = new.into_event(Self::new_id());
        self.data.events.push(event.clone());
        self.persist()?;
        Ok(event)
    }

    pub fn update_event(&mut self, id: &str, updates: UpdateWeddingEvent) -> StoreResult<WeddingEvent> {
        let event = find_mut(&mut self.data.events, id)?;
        updates.apply(event);
        let event = event.clone();
        self.persist()?;
        Ok(event)
    }

    pub fn delete_event(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.events, id)?;
        self.persist()
    }

    pub fn replace_events(&mut self, events: Vec<WeddingEvent>) -> StoreResult<()> {
        self.data.events = events;
        self.persist()
    }
}
