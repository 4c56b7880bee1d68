pub mod kpi;
pub mod product;

pub use kpi::*;
pub use product::*;
