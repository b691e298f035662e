pub mod inventory_service;
pub mod order_service;
pub mod pricing_service;

pub use inventory_service::*;
pub use order_service::*;
pub use pricing_service::*;
