// ==========================================
// 保税库存销货清单生成系统 - 计算列规范化
// ==========================================
// 职责: 序号列/出库日期列/净重列的自动填充
// 谓词: 仅在"空或已是公式"时覆盖 —
//       手工输入的字面量数值永不被改写
// ==========================================

use crate::domain::types::{
    COL_NET_WEIGHT, COL_OUTBOUND_DATE, COL_SEQUENCE, DATA_START_ROW, DATE_NUMBER_FORMAT,
};
use crate::workbook::model::{CellValue, Sheet};
use chrono::NaiveDate;
use serde::Serialize;

/// 序号列公式（相对行号, 锚定表格对象）
pub const SEQUENCE_FORMULA: &str = "ROW(BondDataTable[[#This Row],[序号]])-1";

/// 净重列公式: 毛重 - 除皮
pub const NET_WEIGHT_FORMULA: &str =
    "BondDataTable[[#This Row],[毛重]]-BondDataTable[[#This Row],[除皮]]";

/// 规范化填充统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    pub sequence_filled: usize,
    pub dates_filled: usize,
    pub net_weight_filled: usize,
}

/// 规范化源工作表的计算列
///
/// 幂等: 对已规范化的工作表重复执行不改变任何单元格值
/// （日期只在为空时填默认值, 公式只覆盖空或公式单元格）
pub fn normalize_source_sheet(sheet: &mut Sheet, today: NaiveDate) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    let last_row = sheet.max_row();

    for row_idx in DATA_START_ROW..=last_row {
        // 序号列 - 空或公式时写入行号公式
        let sequence = sheet.value(row_idx, COL_SEQUENCE);
        if sequence.is_empty() || sequence.is_formula() {
            if sequence.is_empty() {
                stats.sequence_filled += 1;
            }
            sheet.set_value(row_idx, COL_SEQUENCE, CellValue::formula(SEQUENCE_FORMULA));
        }

        // 出库日期列 - 为空时填当天日期; 已是日期值则只补显示格式
        match sheet.value(row_idx, COL_OUTBOUND_DATE) {
            CellValue::Empty => {
                let midnight = today.and_hms_opt(0, 0, 0).unwrap_or_default();
                sheet.set_value(row_idx, COL_OUTBOUND_DATE, CellValue::DateTime(midnight));
                sheet.set_number_format(row_idx, COL_OUTBOUND_DATE, DATE_NUMBER_FORMAT);
                stats.dates_filled += 1;
            }
            CellValue::DateTime(_) => {
                sheet.set_number_format(row_idx, COL_OUTBOUND_DATE, DATE_NUMBER_FORMAT);
            }
            _ => {}
        }

        // 净重列 - 空或公式时写入毛重-除皮公式
        let net_weight = sheet.value(row_idx, COL_NET_WEIGHT);
        if net_weight.is_empty() || net_weight.is_formula() {
            if net_weight.is_empty() {
                stats.net_weight_filled += 1;
            }
            sheet.set_value(row_idx, COL_NET_WEIGHT, CellValue::formula(NET_WEIGHT_FORMULA));
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::model::CellStyle;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("构造日期失败")
    }

    fn sheet_with_row(sequence: CellValue, date: CellValue, net_weight: CellValue) -> Sheet {
        let mut sheet = Sheet::new("BondDataSheet");
        sheet.set_value(1, 1, CellValue::Text("序号".to_string()));
        sheet.set_value(2, COL_SEQUENCE, sequence);
        sheet.set_value(2, COL_OUTBOUND_DATE, date);
        sheet.set_value(2, COL_NET_WEIGHT, net_weight);
        sheet
    }

    #[test]
    fn test_empty_cells_are_filled() {
        let mut sheet = sheet_with_row(CellValue::Empty, CellValue::Empty, CellValue::Empty);
        let stats = normalize_source_sheet(&mut sheet, today());

        assert_eq!(
            sheet.value(2, COL_SEQUENCE),
            &CellValue::formula(SEQUENCE_FORMULA)
        );
        assert!(matches!(
            sheet.value(2, COL_OUTBOUND_DATE),
            CellValue::DateTime(dt) if dt.date() == today()
        ));
        assert_eq!(
            sheet.value(2, COL_NET_WEIGHT),
            &CellValue::formula(NET_WEIGHT_FORMULA)
        );
        assert_eq!(
            stats,
            NormalizeStats {
                sequence_filled: 1,
                dates_filled: 1,
                net_weight_filled: 1,
            }
        );
    }

    #[test]
    fn test_manual_literal_sequence_is_kept() {
        // 手工填写的字面量序号是预期的"人工覆盖"出口
        let mut sheet = sheet_with_row(
            CellValue::Number(42.0),
            CellValue::Empty,
            CellValue::Number(5.5),
        );
        normalize_source_sheet(&mut sheet, today());

        assert_eq!(sheet.value(2, COL_SEQUENCE), &CellValue::Number(42.0));
        assert_eq!(sheet.value(2, COL_NET_WEIGHT), &CellValue::Number(5.5));
    }

    #[test]
    fn test_existing_formula_is_rewritten() {
        let mut sheet = sheet_with_row(
            CellValue::formula("ROW()-1"),
            CellValue::Empty,
            CellValue::formula("E2-F2"),
        );
        normalize_source_sheet(&mut sheet, today());

        assert_eq!(
            sheet.value(2, COL_SEQUENCE),
            &CellValue::formula(SEQUENCE_FORMULA)
        );
        assert_eq!(
            sheet.value(2, COL_NET_WEIGHT),
            &CellValue::formula(NET_WEIGHT_FORMULA)
        );
    }

    #[test]
    fn test_existing_date_value_untouched() {
        let existing = NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .expect("构造日期失败");
        let mut sheet = sheet_with_row(
            CellValue::Empty,
            CellValue::DateTime(existing),
            CellValue::Empty,
        );
        let stats = normalize_source_sheet(&mut sheet, today());

        // 值不变, 只补显示格式
        assert_eq!(
            sheet.value(2, COL_OUTBOUND_DATE),
            &CellValue::DateTime(existing)
        );
        assert_eq!(
            sheet
                .cell(2, COL_OUTBOUND_DATE)
                .map(|c| c.style.clone())
                .unwrap_or_default(),
            CellStyle {
                number_format: Some(DATE_NUMBER_FORMAT.to_string()),
                ..CellStyle::default()
            }
        );
        assert_eq!(stats.dates_filled, 0);
    }

    #[test]
    fn test_normalize_twice_is_idempotent() {
        let mut sheet = sheet_with_row(CellValue::Empty, CellValue::Empty, CellValue::Empty);
        normalize_source_sheet(&mut sheet, today());
        let first_pass = sheet.clone();

        let stats = normalize_source_sheet(&mut sheet, today());
        assert_eq!(sheet, first_pass);
        // 第二遍没有新的填充
        assert_eq!(stats.dates_filled, 0);
        assert_eq!(stats.sequence_filled, 0);
        assert_eq!(stats.net_weight_filled, 0);
    }
}
