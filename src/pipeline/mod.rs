// ==========================================
// 流水线层 - 规范化/提取/分组/标记
// ==========================================
// 流程: 规范化 → 提取 → 分组 → (渲染) → 标记
// ==========================================

pub mod extractor;
pub mod grouping;
pub mod marker;
pub mod normalizer;

pub use extractor::extract_rows;
pub use grouping::{group_by_date_and_customer, group_by_product};
pub use marker::mark_recorded;
pub use normalizer::{normalize_source_sheet, NormalizeStats};
