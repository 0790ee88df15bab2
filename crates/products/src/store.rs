use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use showroom_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::seed::seed_products;

/// Whether inserting a product whose id is already present is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// Duplicates are stored; lookups, updates and deletes act on the first match.
    #[default]
    Allow,
    /// Inserting an existing id fails with [`DomainError::Conflict`].
    Reject,
}

/// Owner of the product catalog.
///
/// Iteration order is insertion order. All lookups resolve to the first record
/// carrying the requested id.
pub trait ProductStore: Send + Sync {
    fn list_all(&self) -> Vec<Product>;
    fn find_by_id(&self, id: ProductId) -> Option<Product>;
    /// Every product whose description contains `needle` (literal, case-sensitive).
    fn search_by_description(&self, needle: &str) -> Vec<Product>;
    fn insert(&self, product: Product) -> DomainResult<()>;
    /// Overwrite the first product with `product.id`; `NotFound` leaves the store untouched.
    fn update(&self, product: Product) -> DomainResult<()>;
    /// Remove the first product with `id`. Returns whether anything was removed.
    fn delete(&self, id: ProductId) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn search_by_description(&self, needle: &str) -> Vec<Product> {
        (**self).search_by_description(needle)
    }

    fn insert(&self, product: Product) -> DomainResult<()> {
        (**self).insert(product)
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) -> bool {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store: a single `Vec` behind one lock.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
    policy: DuplicateIdPolicy,
}

impl InMemoryProductStore {
    /// Empty store, duplicates allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the startup catalog (ids 1-5).
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: RwLock::new(products.into_iter().collect()),
            policy: DuplicateIdPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicateIdPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DuplicateIdPolicy {
        self.policy
    }

    // A panic while holding the lock cannot leave the Vec half-mutated, so the
    // poisoned guard is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for InMemoryProductStore {
    fn list_all(&self) -> Vec<Product> {
        self.read().clone()
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    fn search_by_description(&self, needle: &str) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.description_contains(needle))
            .cloned()
            .collect()
    }

    fn insert(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();
        if self.policy == DuplicateIdPolicy::Reject && products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        products.push(product);
        Ok(())
    }

    fn update(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();
        let existing = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(DomainError::NotFound)?;
        existing.overwrite_with(product);
        Ok(())
    }

    fn delete(&self, id: ProductId) -> bool {
        let mut products = self.write();
        match products.iter().position(|p| p.id == id) {
            Some(idx) => {
                products.remove(idx);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
