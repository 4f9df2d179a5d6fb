use crate::domain::guest::{Guest, NewGuest, UpdateGuest};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_guest(&mut self, new: NewGuest) -> StoreResult<Guest> {
        required_name(&new.name)?;
        let guest = new.into_guest(Self::new_id());
        self.data.guests.push(guest.clone());
        self.persist()?;
        Ok(guest)
    }

    pub fn update_guest(&mut self, id: &str, updates: UpdateGuest) -> StoreResult<Guest> {
        let guest = find_mut(&mut self.data.guests, id)?;
        updates.apply(guest);
        let guest = guest.clone();
        self.persist()?;
        Ok(guest)
    }

    pub fn delete_guest(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.guests, id)?;
        self.persist()
    }

    pub fn replace_guests(&mut self, guests: Vec<Guest>) -> StoreResult<()> {
        self.data.guests = guests;
        self.persist()
    }
}
