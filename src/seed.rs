use crate::domain::Product;

/// The fixed catalog the dashboard ships with. Loaded once at startup; the
/// records live for the whole process and only stock, demand, and warehouse
/// ever change.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120),
        Product::new("P-1002", "Steel Washer", "WSR-08-500", "BLR-A", 50, 80),
        Product::new("P-1003", "M8 Nut", "NUT-08-200", "PNQ-C", 80, 80),
        Product::new("P-1004", "Bearing 608ZZ", "BRG-608-50", "DEL-B", 24, 120),
        Product::new("P-1005", "Spring Steel", "SPR-05-100", "BLR-A", 200, 150),
        Product::new("P-1006", "Rubber Gasket", "GSK-10-250", "PNQ-C", 30, 90),
        Product::new("P-1007", "Aluminum Rod", "ALU-20-50", "DEL-B", 120, 60),
        Product::new("P-1008", "Steel Pipe", "PIP-15-200", "BLR-A", 75, 75),
    ]
}
