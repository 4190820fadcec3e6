// ==========================================
// 保税库存销货清单生成系统 - 核心库
// ==========================================
// 职责: 读取保税库存工作簿, 规范化计算列,
//       按 (出库日期, 出库对象) 分组生成销货清单
// 输入: BondDataSheet + TemplateSheet
// 输出: 规范化后的工作簿 + 每组两张销货清单
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与常量
pub mod domain;

// 工作簿层 - 内存模型与 xlsx 读写
pub mod workbook;

// 流水线层 - 规范化/提取/分组/标记
pub mod pipeline;

// 渲染层 - 销货清单工作表
pub mod render;

// 编排层 - 单次运行流程
pub mod orchestrator;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 错误类型
pub mod error;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::RunConfig;
pub use domain::inventory::{InventoryRow, ProductAggregate, RunReport};
pub use error::{AppError, AppResult};
pub use orchestrator::run;
pub use workbook::model::{CellValue, Sheet, Workbook};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "保税库存销货清单生成系统";
