use serde::{Deserialize, Serialize};

use showroom_core::{Entity, ProductId};

/// A catalog product.
///
/// Serializes to `{"id": <int>, "name": <string>, "description": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Literal, case-sensitive substring match on the description.
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description.contains(needle)
    }

    /// Overwrite every field with `other`'s.
    pub(crate) fn overwrite_with(&mut self, other: Product) {
        *self = other;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
