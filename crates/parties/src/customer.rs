use serde::{Deserialize, Serialize};

use salesdesk_core::{DomainResult, Entity, EntityId};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer master record.
///
/// Orders reference customers by id; only `id` and `name` are consumed when
/// rendering an order. The remaining contact fields mirror the directory
/// record and are carried for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub tax_id: Option<String>,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only customer lookup consumed by the order engine.
///
/// `resolve` fails with `DomainError::NotFound` for unknown ids.
pub trait CustomerDirectory {
    fn resolve(&self, id: CustomerId) -> DomainResult<Customer>;
}

impl<T: CustomerDirectory + ?Sized> CustomerDirectory for &T {
    fn resolve(&self, id: CustomerId) -> DomainResult<Customer> {
        (**self).resolve(id)
    }
}
