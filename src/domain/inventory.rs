// ==========================================
// 保税库存销货清单生成系统 - 库存领域模型
// ==========================================
// 对齐: BondDataSheet 数据行 → InventoryRow
//       (出库日期, 出库对象) 分组 → GroupKey
//       规格汇总 → ProductAggregate
// ==========================================

use crate::domain::types::RECORDED_YES;
use crate::workbook::model::CellValue;
use chrono::NaiveDate;
use serde::Serialize;

// ==========================================
// InventoryRow - 库存数据行
// ==========================================
// 用途: 提取层构造, 分组/渲染层只读;
//       入账标记由标记层直接写回源工作表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    // ===== 计算列（原样保留字面量/公式标记）=====
    pub sequence: CellValue, // 序号

    // ===== 分组键 =====
    pub outbound_date: NaiveDate, // 出库日期（已归一到日粒度）
    pub customer: String,         // 出库对象

    // ===== 货物信息 =====
    pub specification: String,    // 规格
    pub piece_count: Option<f64>, // 个数
    pub gross_weight: Option<f64>, // 毛重（kg）
    pub tare_weight: Option<f64>, // 除皮（kg）
    pub net_weight: Option<f64>,  // 净重（kg，公式单元格由毛重/除皮重算）

    // ===== 状态与备注 =====
    pub recorded: Option<String>, // 入账（"是" = 已入账）
    pub remark: Option<String>,   // 备注

    // ===== 回写定位 =====
    pub source_row_index: u32, // 源工作表物理行号（1 基）
}

impl InventoryRow {
    /// 该行是否已入账
    pub fn is_recorded(&self) -> bool {
        self.recorded.as_deref() == Some(RECORDED_YES)
    }
}

// ==========================================
// GroupKey - 分组键
// ==========================================

/// (出库日期, 出库对象)
pub type GroupKey = (NaiveDate, String);

// ==========================================
// ProductAggregate - 规格汇总
// ==========================================
// 不变式: piece_count == net_weights.len()
//         total_net_weight == net_weights 之和
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductAggregate {
    /// 件数（每行记 1 件）
    pub piece_count: u32,

    /// 明细净重（保持组内行序）
    pub net_weights: Vec<f64>,

    /// 总净重
    pub total_net_weight: f64,
}

// ==========================================
// RunReport - 单次运行报告
// ==========================================
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// 提取到的有效数据行数
    pub rows_extracted: usize,

    /// (出库日期, 出库对象) 分组数
    pub group_count: usize,

    /// 新建工作表数（每组简单版 + 详细版）
    pub sheets_created: usize,

    /// 标记为已入账的行数
    pub rows_marked: usize,

    /// 规范化填充统计
    pub sequence_filled: usize,
    pub dates_filled: usize,
    pub net_weight_filled: usize,

    /// 运行耗时（毫秒）
    pub elapsed_ms: u128,
}

impl RunReport {
    /// 本次运行是否无清单可生成（所有数据已入账或不完整）
    pub fn nothing_to_do(&self) -> bool {
        self.group_count == 0
    }
}
