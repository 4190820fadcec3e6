// ==========================================
// 保税库存销货清单生成系统 - 数据行提取
// ==========================================
// 职责: 源工作表数据行 → InventoryRow 投影
// 跳过: 缺出库日期或出库对象的行（占位/空行）
// ==========================================

use crate::domain::inventory::InventoryRow;
use crate::domain::types::{
    COL_CUSTOMER, COL_GROSS_WEIGHT, COL_NET_WEIGHT, COL_OUTBOUND_DATE, COL_PIECE_COUNT,
    COL_RECORDED, COL_REMARK, COL_SEQUENCE, COL_SPECIFICATION, COL_TARE_WEIGHT, DATA_START_ROW,
};
use crate::workbook::model::{CellValue, Sheet};
use chrono::NaiveDate;

/// 提取源工作表的全部有效数据行
///
/// 不变式: 返回行数 == 出库日期与出库对象均非空的物理行数
pub fn extract_rows(sheet: &Sheet) -> Vec<InventoryRow> {
    let mut rows = Vec::new();

    for row_idx in DATA_START_ROW..=sheet.max_row() {
        // 跳过空行/占位行
        let Some(outbound_date) = read_date(sheet.value(row_idx, COL_OUTBOUND_DATE)) else {
            continue;
        };
        let Some(customer) = read_text(sheet.value(row_idx, COL_CUSTOMER)) else {
            continue;
        };

        let gross_weight = read_number(sheet.value(row_idx, COL_GROSS_WEIGHT));
        let tare_weight = read_number(sheet.value(row_idx, COL_TARE_WEIGHT));

        // 净重: 公式单元格直接由毛重/除皮重算,
        // 数值转换失败时回退 0.0 而不是报错
        let net_weight = match sheet.value(row_idx, COL_NET_WEIGHT) {
            CellValue::Formula { .. } => Some(recompute_net_weight(gross_weight, tare_weight)),
            CellValue::Empty => None,
            other => read_number(other),
        };

        rows.push(InventoryRow {
            sequence: sheet.value(row_idx, COL_SEQUENCE).clone(),
            outbound_date,
            customer,
            specification: read_text(sheet.value(row_idx, COL_SPECIFICATION)).unwrap_or_default(),
            piece_count: read_number(sheet.value(row_idx, COL_PIECE_COUNT)),
            gross_weight,
            tare_weight,
            net_weight,
            recorded: read_text(sheet.value(row_idx, COL_RECORDED)),
            remark: read_text(sheet.value(row_idx, COL_REMARK)),
            source_row_index: row_idx,
        });
    }

    rows
}

fn recompute_net_weight(gross: Option<f64>, tare: Option<f64>) -> f64 {
    match (gross, tare) {
        (Some(gross), Some(tare)) => gross - tare,
        _ => 0.0,
    }
}

/// 日期时间值归一到日粒度; 兼容 `YYYY-MM-DD` 形式的文本
fn read_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    }
}

fn read_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // 数值内容按整数/小数原样转文本
        CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
            Some(format!("{}", *n as i64))
        }
        CellValue::Number(n) => Some(format!("{n}")),
        _ => None,
    }
}

fn read_number(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::normalizer::NET_WEIGHT_FORMULA;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("构造日期失败")
    }

    fn datetime_cell(y: i32, m: u32, d: u32, h: u32) -> CellValue {
        CellValue::DateTime(
            date(y, m, d)
                .and_hms_opt(h, 0, 0)
                .expect("构造日期时间失败"),
        )
    }

    fn push_row(
        sheet: &mut Sheet,
        row: u32,
        date_cell: CellValue,
        spec: &str,
        gross: CellValue,
        tare: CellValue,
        net: CellValue,
        customer: CellValue,
    ) {
        sheet.set_value(row, COL_OUTBOUND_DATE, date_cell);
        sheet.set_value(row, COL_SPECIFICATION, CellValue::Text(spec.to_string()));
        sheet.set_value(row, COL_PIECE_COUNT, CellValue::Number(1.0));
        sheet.set_value(row, COL_GROSS_WEIGHT, gross);
        sheet.set_value(row, COL_TARE_WEIGHT, tare);
        sheet.set_value(row, COL_NET_WEIGHT, net);
        sheet.set_value(row, COL_CUSTOMER, customer);
    }

    #[test]
    fn test_rows_missing_date_or_customer_are_skipped() {
        let mut sheet = Sheet::new("BondDataSheet");
        // 完整行
        push_row(
            &mut sheet,
            2,
            datetime_cell(2024, 1, 5, 0),
            "X",
            CellValue::Number(10.0),
            CellValue::Number(2.0),
            CellValue::Number(8.0),
            CellValue::Text("甲".to_string()),
        );
        // 缺日期
        push_row(
            &mut sheet,
            3,
            CellValue::Empty,
            "X",
            CellValue::Number(10.0),
            CellValue::Number(2.0),
            CellValue::Number(8.0),
            CellValue::Text("甲".to_string()),
        );
        // 缺客户
        push_row(
            &mut sheet,
            4,
            datetime_cell(2024, 1, 5, 0),
            "X",
            CellValue::Number(10.0),
            CellValue::Number(2.0),
            CellValue::Number(8.0),
            CellValue::Empty,
        );

        let rows = extract_rows(&sheet);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].source_row_index, 2);
    }

    #[test]
    fn test_formula_net_weight_is_recomputed() {
        let mut sheet = Sheet::new("BondDataSheet");
        push_row(
            &mut sheet,
            2,
            datetime_cell(2024, 1, 5, 0),
            "X",
            CellValue::Number(12.5),
            CellValue::Number(2.5),
            CellValue::formula(NET_WEIGHT_FORMULA),
            CellValue::Text("甲".to_string()),
        );

        let rows = extract_rows(&sheet);
        assert_eq!(rows[0].net_weight, Some(10.0));
    }

    #[test]
    fn test_formula_net_weight_falls_back_to_zero() {
        // 毛重非数值 → 重算失败回退 0.0
        let mut sheet = Sheet::new("BondDataSheet");
        push_row(
            &mut sheet,
            2,
            datetime_cell(2024, 1, 5, 0),
            "X",
            CellValue::Text("约十公斤".to_string()),
            CellValue::Number(2.5),
            CellValue::formula(NET_WEIGHT_FORMULA),
            CellValue::Text("甲".to_string()),
        );

        let rows = extract_rows(&sheet);
        assert_eq!(rows[0].net_weight, Some(0.0));
    }

    #[test]
    fn test_datetime_is_normalized_to_date() {
        let mut sheet = Sheet::new("BondDataSheet");
        push_row(
            &mut sheet,
            2,
            datetime_cell(2024, 1, 5, 14),
            "X",
            CellValue::Number(10.0),
            CellValue::Number(2.0),
            CellValue::Number(8.0),
            CellValue::Text("甲".to_string()),
        );

        let rows = extract_rows(&sheet);
        assert_eq!(rows[0].outbound_date, date(2024, 1, 5));
    }

    #[test]
    fn test_date_shaped_text_is_accepted() {
        let mut sheet = Sheet::new("BondDataSheet");
        push_row(
            &mut sheet,
            2,
            CellValue::Text("2024-01-06".to_string()),
            "Z",
            CellValue::Number(10.0),
            CellValue::Number(2.0),
            CellValue::Number(8.0),
            CellValue::Text("乙".to_string()),
        );

        let rows = extract_rows(&sheet);
        assert_eq!(rows[0].outbound_date, date(2024, 1, 6));
    }

    #[test]
    fn test_extraction_count_property() {
        // 有效行数 == 日期与客户均非空的行数
        let mut sheet = Sheet::new("BondDataSheet");
        for row in 2..=6u32 {
            push_row(
                &mut sheet,
                row,
                datetime_cell(2024, 1, 5, 0),
                "X",
                CellValue::Number(10.0),
                CellValue::Number(2.0),
                CellValue::Number(8.0),
                CellValue::Text("甲".to_string()),
            );
        }
        sheet.set_value(4, COL_OUTBOUND_DATE, CellValue::Empty);
        sheet.set_value(6, COL_CUSTOMER, CellValue::Empty);

        assert_eq!(extract_rows(&sheet).len(), 3);
    }
}
