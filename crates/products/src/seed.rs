//! Startup catalog.

use crate::product::Product;

/// The five products every seeded store starts with, in insertion order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Honda Civic", "Luxury Model 2013"),
        Product::new(2, "Honda Accord", "Deluxe Model 2012"),
        Product::new(3, "BMW V6", "V6 Engine Luxury 2013"),
        Product::new(4, "Audi A8", "V8 Engine 2013"),
        Product::new(5, "Mercedes M3", "Basic Model 2013"),
    ]
}
