// ==========================================
// 领域层 - 实体与常量
// ==========================================

pub mod inventory;
pub mod types;

pub use inventory::{GroupKey, InventoryRow, ProductAggregate, RunReport};
pub use types::InvoiceVariant;
