use serde::{Deserialize, Serialize};

use crate::domain::HasId;

/// A service vendor with its contract cost and payments made so far.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub cost: f64,
    pub paid_amount: f64,
    pub contact: String,
}

impl Vendor {
    /// Outstanding balance. Negative when the vendor was overpaid.
    pub fn balance(&self) -> f64 {
        self.cost - self.paid_amount
    }
}

impl HasId for Vendor {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewVendor {
    pub name: String,
    pub service_type: String,
    pub cost: f64,
    pub paid_amount: f64,
    pub contact: String,
}

impl NewVendor {
    pub fn into_vendor(self, id: String) -> Vendor {
        Vendor {
            id,
            name: self.name.trim().to_string(),
            service_type: self.service_type.trim().to_string(),
            cost: self.cost.max(0.0),
            paid_amount: self.paid_amount.max(0.0),
            contact: self.contact.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateVendor {
    pub name: Option<String>,
    pub service_type: Option<String>,
    pub cost: Option<f64>,
    pub paid_amount: Option<f64>,
    pub contact: Option<String>,
}

impl UpdateVendor {
    pub fn apply(self, vendor: &mut Vendor) {
        if let Some(name) = self.name {
            vendor.name = name.trim().to_string();
        }
        if let Some(service_type) = self.service_type {
            vendor.service_type = service_type.trim().to_string();
        }
        if let Some(cost) = self.cost {
            vendor.cost = cost.max(0.0);
        }
        if let Some(paid_amount) = self.paid_amount {
            vendor.paid_amount = paid_amount.max(0.0);
        }
        if let Some(contact) = self.contact {
            vendor.contact = contact.trim().to_string();
        }
    }
}
