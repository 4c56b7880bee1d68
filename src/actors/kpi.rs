//! Aggregate figures and the synthetic chart series.

use chrono::NaiveDate;
use rand::Rng;
use crate::domain::{KpiSnapshot, Product, TrendPoint};

/// Sum of stock and demand across the whole store.
pub fn totals(products: &[Product]) -> (u32, u32) {
    let total_stock = products.iter().map(|p| p.stock).sum();
    let total_demand = products.iter().map(|p| p.demand).sum();
    (total_stock, total_demand)
}

/// Percentage of total demand the current stock can satisfy, rounded to two
/// decimals. Each product's contribution is capped at its own demand, so
/// surplus on one line never offsets a deficit on another.
pub fn fill_rate(products: &[Product]) -> f64 {
    let total_demand: u64 = products.iter().map(|p| u64::from(p.demand)).sum();
    if total_demand == 0 {
        return 0.0;
    }
    let filled: u64 = products
        .iter()
        .map(|p| u64::from(p.stock.min(p.demand)))
        .sum();
    let rate = filled as f64 / total_demand as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Synthetic daily history ending at `today`.
///
/// Each point is the current aggregate total plus a sine/cosine oscillation
/// over the day index plus uniform jitter from `rng`, floored at zero. The
/// jitter source is a parameter so callers that need repeatable output can
/// pass a seeded generator.
pub fn generate_trend(
    products: &[Product],
    days: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<TrendPoint> {
    let (base_stock, base_demand) = totals(products);

    (0..days)
        .map(|i| {
            let date = today - chrono::Duration::days((days - 1 - i) as i64);
            let stock_variation = (i as f64 * 0.1).sin() * 50.0 + rng.gen_range(-15.0..15.0);
            let demand_variation = (i as f64 * 0.15).cos() * 40.0 + rng.gen_range(-12.0..13.0);
            TrendPoint {
                date,
                stock: (f64::from(base_stock) + stock_variation).round().max(0.0) as u32,
                demand: (f64::from(base_demand) + demand_variation).round().max(0.0) as u32,
            }
        })
        .collect()
}

/// Full KPI payload for one dashboard refresh.
pub fn snapshot(
    products: &[Product],
    days: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> KpiSnapshot {
    let (total_stock, total_demand) = totals(products);
    KpiSnapshot {
        total_stock,
        total_demand,
        fill_rate: fill_rate(products),
        trend: generate_trend(products, days, today, rng),
    }
}
