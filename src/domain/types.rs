// ==========================================
// 保税库存销货清单生成系统 - 领域常量与枚举
// ==========================================
// 列布局对齐 BondDataTable 的 10 列结构
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 工作表名
// ==========================================

/// 库存数据工作表
pub const SOURCE_SHEET: &str = "BondDataSheet";

/// 库存数据表格对象（结构化引用公式依赖该名称）
pub const SOURCE_TABLE: &str = "BondDataTable";

/// 简单版销货清单模板工作表
pub const TEMPLATE_SHEET: &str = "TemplateSheet";

// ==========================================
// BondDataTable 列布局（1 基）
// ==========================================

pub const COL_SEQUENCE: u16 = 1; // 序号
pub const COL_OUTBOUND_DATE: u16 = 2; // 出库日期
pub const COL_SPECIFICATION: u16 = 3; // 规格
pub const COL_PIECE_COUNT: u16 = 4; // 个数
pub const COL_GROSS_WEIGHT: u16 = 5; // 毛重
pub const COL_TARE_WEIGHT: u16 = 6; // 除皮
pub const COL_NET_WEIGHT: u16 = 7; // 净重
pub const COL_CUSTOMER: u16 = 8; // 出库对象
pub const COL_RECORDED: u16 = 9; // 入账
pub const COL_REMARK: u16 = 10; // 备注

/// 数据表列数
pub const TABLE_COLUMN_COUNT: u16 = 10;

/// 数据表列标题（与源表第 1 行一致）
pub const TABLE_HEADERS: [&str; TABLE_COLUMN_COUNT as usize] = [
    "序号", "出库日期", "规格", "个数", "毛重", "除皮", "净重", "出库对象", "入账", "备注",
];

/// 数据起始行（第 1 行为表头）
pub const DATA_START_ROW: u32 = 2;

// ==========================================
// 标记与格式
// ==========================================

/// 入账标记
pub const RECORDED_YES: &str = "是";

/// 出库日期显示格式
pub const DATE_NUMBER_FORMAT: &str = "yyyy-mm-dd";

// ==========================================
// InvoiceVariant - 销货清单版式
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceVariant {
    /// 简单版（基于模板复制）
    Compact,
    /// 详细版（从零构建）
    Detailed,
}

impl InvoiceVariant {
    /// 工作表名中的版式后缀
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceVariant::Compact => "简单版",
            InvoiceVariant::Detailed => "详细版",
        }
    }
}
