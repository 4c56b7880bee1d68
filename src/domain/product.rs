use std::cmp::Ordering;

/// Represents one inventory line item tracked by the dashboard.
///
/// `id`, `name`, and `sku` are immutable once seeded. `warehouse`, `stock`,
/// and `demand` are the only fields mutations touch.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub warehouse: String,
    pub stock: u32,
    pub demand: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        warehouse: impl Into<String>,
        stock: u32,
        demand: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            warehouse: warehouse.into(),
            stock,
            demand,
        }
    }

    /// Derived health of this record. Recomputed on every read, never stored.
    pub fn status(&self) -> Status {
        Status::from_levels(self.stock, self.demand)
    }
}

/// Health classification of a product, derived from stock vs demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Healthy,
    Low,
    Critical,
}

impl Status {
    /// The single status rule. Query filtering and display both go through
    /// here so the two can never diverge.
    pub fn from_levels(stock: u32, demand: u32) -> Self {
        match stock.cmp(&demand) {
            Ordering::Greater => Status::Healthy,
            Ordering::Equal => Status::Low,
            Ordering::Less => Status::Critical,
        }
    }
}

/// Optional narrowing criteria for product listings.
///
/// Every present field must match (conjunctive). `search` is a
/// case-insensitive substring match against name, sku, or id.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub warehouse: Option<String>,
    pub status: Option<Status>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.sku.to_lowercase().contains(&needle)
                || product.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(warehouse) = &self.warehouse {
            if product.warehouse != *warehouse {
                return false;
            }
        }
        if let Some(status) = self.status {
            if product.status() != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_covers_all_three_orderings() {
        assert_eq!(Status::from_levels(180, 120), Status::Healthy);
        assert_eq!(Status::from_levels(80, 80), Status::Low);
        assert_eq!(Status::from_levels(50, 80), Status::Critical);
    }

    #[test]
    fn product_status_tracks_current_fields() {
        let mut product = Product::new("P-1", "Widget", "WDG-1", "BLR-A", 10, 5);
        assert_eq!(product.status(), Status::Healthy);

        product.demand = 10;
        assert_eq!(product.status(), Status::Low);

        product.demand = 11;
        assert_eq!(product.status(), Status::Critical);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let product = Product::new("P-1", "Widget", "WDG-1", "BLR-A", 10, 5);
        assert!(ProductFilter::default().matches(&product));
    }

    #[test]
    fn search_is_case_insensitive_across_name_sku_and_id() {
        let product = Product::new("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120);

        for needle in ["bolt", "BOLT", "hex-12", "p-1001"] {
            let filter = ProductFilter {
                search: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&product), "expected match for {needle:?}");
        }

        let filter = ProductFilter {
            search: Some("washer".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&product));
    }

    #[test]
    fn filter_fields_are_conjunctive() {
        let product = Product::new("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120);

        let filter = ProductFilter {
            search: Some("bolt".to_string()),
            warehouse: Some("DEL-B".to_string()),
            status: None,
        };
        assert!(!filter.matches(&product));

        let filter = ProductFilter {
            search: Some("bolt".to_string()),
            warehouse: Some("BLR-A".to_string()),
            status: Some(Status::Healthy),
        };
        assert!(filter.matches(&product));
    }
}
