use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DomainResult, Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product master record.
///
/// `code` is unique within the catalog. `base_price` is a suggested unit
/// price; order lines carry their own agreed unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub base_price: Decimal,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only product lookup consumed by the order engine.
///
/// `resolve` fails with `DomainError::NotFound` for unknown ids. Product
/// code/name are joined into order views at read time, never stored on the
/// order line itself.
pub trait ProductCatalog {
    fn resolve(&self, id: ProductId) -> DomainResult<Product>;
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for &T {
    fn resolve(&self, id: ProductId) -> DomainResult<Product> {
        (**self).resolve(id)
    }
}
