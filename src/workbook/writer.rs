// ==========================================
// 保税库存销货清单生成系统 - 工作簿写出
// ==========================================
// rust_xlsxwriter 写出: 先合并区域再写单元格,
// 起始单元格覆盖 merge_range 写入的空白
// ==========================================

use crate::workbook::model::{
    CellStyle, CellValue, HorizontalAlign, Sheet, VerticalAlign, Workbook,
};
use crate::error::AppResult;
use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_xlsxwriter::{
    Format, FormatAlign, FormatBorder, Table, TableColumn, Workbook as XlsxWorkbook, Worksheet,
};
use std::path::Path;

/// 1899-12-30 的公元纪日数; 对 1900-03-01 之后的日期,
/// Excel 序列值 = 公元纪日数 - 该常量（1900 闰年错位已吸收）
const EXCEL_EPOCH_DAYS: i64 = 693_594;

/// 把内存模型整体写出为 xlsx 文件
pub fn write_workbook(workbook: &Workbook, path: &Path) -> AppResult<()> {
    let mut xlsx = XlsxWorkbook::new();

    for sheet in workbook.sheets() {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        write_sheet(worksheet, sheet)?;
    }

    xlsx.save(path)?;
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> AppResult<()> {
    // 合并区域先行: merge_range 会向整个区域写空白,
    // 随后的单元格写入覆盖起始格
    for merge in &sheet.merges {
        let format = sheet
            .cell(merge.first_row, merge.first_col)
            .map(|cell| cell_format(&cell.style))
            .unwrap_or_default();
        worksheet.merge_range(
            merge.first_row - 1,
            merge.first_col - 1,
            merge.last_row - 1,
            merge.last_col - 1,
            "",
            &format,
        )?;
    }

    for (&(row, col), cell) in sheet.cells() {
        let row0 = row - 1;
        let col0 = col - 1;
        let format = cell_format(&cell.style);

        match &cell.value {
            CellValue::Empty => {
                // 空值仅在带样式时落盘
                if !cell.style.is_default() {
                    worksheet.write_blank(row0, col0, &format)?;
                }
            }
            CellValue::Text(s) => {
                worksheet.write_string_with_format(row0, col0, s, &format)?;
            }
            CellValue::Number(n) => {
                worksheet.write_number_with_format(row0, col0, *n, &format)?;
            }
            CellValue::Bool(b) => {
                worksheet.write_boolean_with_format(row0, col0, *b, &format)?;
            }
            CellValue::DateTime(dt) => {
                // 以序列值落盘, 显示格式由样式控制
                worksheet.write_number_with_format(row0, col0, excel_serial(dt), &format)?;
            }
            CellValue::Formula { expr, .. } => {
                worksheet.write_formula_with_format(row0, col0, expr.as_str(), &format)?;
            }
        }
    }

    for (&col, &width) in &sheet.col_widths {
        worksheet.set_column_width(col - 1, width)?;
    }

    if let Some(table) = &sheet.table {
        let columns: Vec<TableColumn> = table
            .columns
            .iter()
            .map(|header| TableColumn::new().set_header(header))
            .collect();
        let def = Table::new().set_name(&table.name).set_columns(&columns);
        worksheet.add_table(
            table.first_row - 1,
            table.first_col - 1,
            table.last_row - 1,
            table.last_col - 1,
            &def,
        )?;
    }

    Ok(())
}

/// 样式常量 → rust_xlsxwriter Format
fn cell_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if let Some(name) = &style.font_name {
        format = format.set_font_name(name);
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if style.bold {
        format = format.set_bold();
    }
    match style.align {
        Some(HorizontalAlign::Left) => format = format.set_align(FormatAlign::Left),
        Some(HorizontalAlign::Center) => format = format.set_align(FormatAlign::Center),
        Some(HorizontalAlign::Right) => format = format.set_align(FormatAlign::Right),
        None => {}
    }
    match style.valign {
        Some(VerticalAlign::Top) => format = format.set_align(FormatAlign::Top),
        Some(VerticalAlign::Middle) => format = format.set_align(FormatAlign::VerticalCenter),
        Some(VerticalAlign::Bottom) => format = format.set_align(FormatAlign::Bottom),
        None => {}
    }
    if style.wrap_text {
        format = format.set_text_wrap();
    }
    if style.thin_border {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(num_format) = &style.number_format {
        format = format.set_num_format(num_format);
    }

    format
}

/// 日期时间 → Excel 序列值（1900 日期系统）
fn excel_serial(dt: &NaiveDateTime) -> f64 {
    let days = dt.date().num_days_from_ce() as i64 - EXCEL_EPOCH_DAYS;
    let seconds = dt.time().num_seconds_from_midnight() as f64;
    days as f64 + seconds / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_excel_serial_known_dates() {
        // 2023-01-01 的 Excel 序列值为 44927
        let dt = NaiveDate::from_ymd_opt(2023, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("构造日期失败");
        assert_eq!(excel_serial(&dt), 44927.0);
    }

    #[test]
    fn test_excel_serial_time_fraction() {
        // 正午 = 0.5 天
        let dt = NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("构造日期失败");
        assert_eq!(excel_serial(&dt).fract(), 0.5);
    }
}
