// ==========================================
// 保税库存销货清单生成系统 - 入账标记
// ==========================================
// 职责: 把已生成清单的源行"入账"列写为 "是"
// 幂等: 重复标记同一行效果不变
// ==========================================

use crate::domain::types::{COL_RECORDED, RECORDED_YES};
use crate::workbook::model::{CellValue, Sheet};

/// 标记指定源行为已入账, 返回写入的行数
pub fn mark_recorded(sheet: &mut Sheet, row_indices: &[u32]) -> usize {
    for &row_idx in row_indices {
        sheet.set_value(
            row_idx,
            COL_RECORDED,
            CellValue::Text(RECORDED_YES.to_string()),
        );
    }
    row_indices.len()
}
