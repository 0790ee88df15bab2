//! Verb dispatch over a [`ProductStore`].
//!
//! Each verb returns either a success value or a classified [`DomainError`];
//! translating those into transport status codes is the caller's job.

use showroom_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::store::ProductStore;

/// Successful write outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Created,
}

/// Request handler for the product resource.
#[derive(Debug, Clone)]
pub struct ProductHandler<S> {
    store: S,
}

impl<S: ProductStore> ProductHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_products(&self) -> Vec<Product> {
        let products = self.store.list_all();
        tracing::debug!(count = products.len(), "listed products");
        products
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        match self.store.find_by_id(id) {
            Some(p) => Ok(p),
            None => {
                tracing::warn!(%id, "product not found");
                Err(DomainError::NotFound)
            }
        }
    }

    /// Zero matches is reported as `BadRequest`, not as an empty success.
    pub fn search_by_description(&self, needle: &str) -> DomainResult<Vec<Product>> {
        let hits = self.store.search_by_description(needle);
        if hits.is_empty() {
            tracing::warn!(needle, "search matched no products");
            return Err(DomainError::bad_request(format!(
                "no product description contains {needle:?}"
            )));
        }
        tracing::debug!(needle, count = hits.len(), "search matched products");
        Ok(hits)
    }

    pub fn create(&self, candidate: Option<Product>) -> DomainResult<Outcome> {
        let product = candidate.ok_or_else(|| {
            tracing::warn!("create called without a product");
            DomainError::bad_request("product body is required")
        })?;
        let id = product.id;
        self.store.insert(product).inspect_err(|e| {
            tracing::warn!(%id, error = %e, "create rejected");
        })?;
        tracing::info!(%id, "product created");
        Ok(Outcome::Created)
    }

    pub fn update(&self, candidate: Option<Product>) -> DomainResult<Outcome> {
        let product = candidate.ok_or_else(|| {
            tracing::warn!("update called without a product");
            DomainError::bad_request("product body is required")
        })?;
        let id = product.id;
        self.store.update(product).inspect_err(|e| {
            tracing::warn!(%id, error = %e, "update rejected");
        })?;
        tracing::info!(%id, "product updated");
        Ok(Outcome::Ok)
    }

    /// Removes `id` if present and returns what remains. Unknown ids are not an error.
    pub fn delete(&self, id: ProductId) -> Vec<Product> {
        if self.store.delete(id) {
            tracing::info!(%id, "product deleted");
        } else {
            tracing::debug!(%id, "delete of unknown product ignored");
        }
        self.store.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DuplicateIdPolicy, InMemoryProductStore};

    fn handler() -> ProductHandler<InMemoryProductStore> {
        ProductHandler::new(InMemoryProductStore::seeded())
    }

    fn mazda() -> Product {
        Product::new(6, "Mazda 2", "Small compact model")
    }

    #[test]
    fn list_returns_five_seed_products() {
        let h = handler();
        let products = h.list_products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[4].name, "Mercedes M3");
    }

    #[test]
    fn list_is_stable_without_mutation() {
        let h = handler();
        assert_eq!(h.list_products(), h.list_products());
    }

    #[test]
    fn get_by_id_returns_correct_product() {
        let p = handler().get_by_id(ProductId::new(1)).unwrap();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.name, "Honda Civic");
        assert_eq!(p.description, "Luxury Model 2013");
    }

    #[test]
    fn get_by_id_unknown_is_not_found() {
        let err = handler().get_by_id(ProductId::new(10101)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn search_returns_single_exact_match() {
        let hits = handler().search_by_description("Luxury Model 2013").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new(1));
        assert_eq!(hits[0].name, "Honda Civic");
    }

    // Zero matches is a client error here, not an empty 200.
    #[test]
    fn search_without_matches_is_bad_request() {
        let err = handler()
            .search_by_description("nonexistent-string-xyz")
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));
    }

    #[test]
    fn create_adds_product() {
        let h = handler();
        assert_eq!(h.create(Some(mazda())).unwrap(), Outcome::Created);
        assert_eq!(h.list_products().len(), 6);
        assert_eq!(h.get_by_id(ProductId::new(6)).unwrap(), mazda());
    }

    #[test]
    fn create_multiple_increases_count_by_each() {
        let h = handler();
        let initial = h.list_products().len();
        h.create(Some(Product::new(99, "Test Car", "This is just a test"))).unwrap();
        h.create(Some(Product::new(999, "Test Car 2", "This is the second test"))).unwrap();
        h.create(Some(Product::new(9999, "Test Car 3", "This is the third test"))).unwrap();
        assert_eq!(h.list_products().len(), initial + 3);
    }

    #[test]
    fn create_without_product_is_bad_request() {
        let h = handler();
        let err = h.create(None).unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));
        assert_eq!(h.list_products().len(), 5);
    }

    #[test]
    fn create_duplicate_conflicts_under_reject_policy() {
        let h = ProductHandler::new(
            InMemoryProductStore::seeded().with_policy(DuplicateIdPolicy::Reject),
        );
        let err = h.create(Some(Product::new(1, "Copy", "dup"))).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(h.list_products().len(), 5);
    }

    #[test]
    fn update_reflects_new_fields() {
        let h = handler();
        h.create(Some(mazda())).unwrap();
        let updated = Product::new(6, "Mazda 3", "Similar to Mazda 2 but with more features");
        assert_eq!(h.update(Some(updated.clone())).unwrap(), Outcome::Ok);
        assert_eq!(h.get_by_id(ProductId::new(6)).unwrap(), updated);
    }

    #[test]
    fn update_unknown_is_not_found_and_unchanged() {
        let h = handler();
        let before = h.list_products();
        let err = h.update(Some(Product::new(9999, "Ghost", "..."))).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(h.list_products(), before);
    }

    #[test]
    fn update_without_product_is_bad_request() {
        let err = handler().update(None).unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(_)));
    }

    #[test]
    fn delete_removes_created_product() {
        let h = handler();
        h.create(Some(mazda())).unwrap();
        let remaining = h.delete(ProductId::new(6));
        assert_eq!(remaining.len(), 5);
        assert_eq!(h.list_products().len(), 5);
        assert!(h.get_by_id(ProductId::new(6)).is_err());
    }

    #[test]
    fn delete_unknown_returns_full_list() {
        let h = handler();
        let remaining = h.delete(ProductId::new(99999));
        assert_eq!(remaining, h.list_products());
        assert_eq!(remaining.len(), 5);
    }
}
