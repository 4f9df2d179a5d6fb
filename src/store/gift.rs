use crate::domain::gift::{GiftLog, NewGiftLog, UpdateGiftLog};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_gift(&mut self, new: NewGiftLog) -> StoreResult<GiftLog> {
        required_name(&new.guest_name)?;
        let gift = new.into_gift(Self::new_id());
        self.data.gifts.push(gift.clone());
        self.persist()?;
        Ok(gift)
    }

    pub fn update_gift(&mut self, id: &str, updates: UpdateGiftLog) -> StoreResult<GiftLog> {
        let gift = find_mut(&mut self.data.gifts, id)?;
        updates.apply(gift);
        let gift = gift.clone();
        self.persist()?;
        Ok(gift)
    }

    pub fn delete_gift(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.gifts, id)?;
        self.persist()
    }

    pub fn replace_gifts(&mut self, gifts: Vec<GiftLog>) -> StoreResult<()> {
        self.data.gifts = gifts;
        self.persist()
    }
}
