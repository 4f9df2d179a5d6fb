use crate::domain::suit::{NewSuit, Suit, UpdateSuit};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_suit(&mut self, new: NewSuit) -> StoreResult<Suit> {
        required_name(&new.owner)?;
        let suit = new.into_suit(Self::new_id());
        self.data.suits.push(suit.clone());
        self.persist()?;
        Ok(suit)
    }

    pub fn update_suit(&mut self, id: &str, updates: UpdateSuit) -> StoreResult<Suit> {
        let suit = find_mut(&mut self.data.suits, id)?;
        updates.apply(suit);
        let suit = suit.clone();
        self.persist()?;
        Ok(suit)
    }

    pub fn delete_suit(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.suits, id)?;
        self.persist()
    }

    pub fn replace_suits(&mut self, suits: Vec<Suit>) -> StoreResult<()> {
        self.data.suits = suits;
        self.persist()
    }
}
