pub mod inventory_service;
pub mod kpi;
pub mod query;

pub use inventory_service::*;
