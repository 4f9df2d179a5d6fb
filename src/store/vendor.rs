use crate::domain::vendor::{NewVendor, UpdateVendor, Vendor};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_vendor(&mut self, new: NewVendor) -> StoreResult<Vendor> {
        required_name(&new.name)?;
        let vendor = new.into_vendor(Self::new_id());
        self.data.vendors.push(vendor.clone());
        self.persist()?;
        Ok(vendor)
    }

    pub fn update_vendor(&mut self, id: &str, updates: UpdateVendor) -> StoreResult<Vendor> {
        let vendor = find_mut(&mut self.data.vendors, id)?;
        updates.apply(vendor);
        let vendor = vendor.clone();
        self.persist()?;
        Ok(vendor)
    }

    pub fn delete_vendor(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.vendors, id)?;
        self.persist()
    }

    pub fn replace_vendors(&mut self, vendors: Vec<Vendor>) -> StoreResult<()> {
        self.data.vendors = vendors;
        self.persist()
    }
}
