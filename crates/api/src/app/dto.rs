use serde::Deserialize;

use showroom_core::{DomainError, DomainResult};
use showroom_products::Product;

/// Query string of `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub search: Option<String>,
}

/// Decode a create/update body.
///
/// An empty body or the JSON literal `null` is an absent candidate (`Ok(None)`);
/// anything that is not a product object is a bad request.
pub fn parse_candidate(body: &[u8]) -> DomainResult<Option<Product>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<Product>>(body)
        .map_err(|e| DomainError::bad_request(format!("invalid product body: {e}")))
}
