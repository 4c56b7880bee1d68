//! Pure listing logic over the store's product snapshot.

use std::collections::BTreeSet;
use crate::domain::{Product, ProductFilter};

/// Filters in store order, then pages with `[offset, offset + limit)`.
/// A window past the end yields fewer or zero items, never an error.
pub fn list_products(
    products: &[Product],
    filter: &ProductFilter,
    limit: usize,
    offset: usize,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .skip(offset)
        .take(limit)
        .cloned()
        .collect()
}

/// Distinct warehouse codes present in the store, sorted ascending.
pub fn list_warehouses(products: &[Product]) -> Vec<String> {
    let distinct: BTreeSet<&str> = products.iter().map(|p| p.warehouse.as_str()).collect();
    distinct.into_iter().map(String::from).collect()
}
