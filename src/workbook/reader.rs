// ==========================================
// 保税库存销货清单生成系统 - 工作簿读取
// ==========================================
// calamine 双通道读取: worksheet_range 取值,
// worksheet_formula 叠加公式标记
// ==========================================

use crate::error::{AppError, AppResult};
use crate::workbook::model::{CellValue, Sheet, Workbook};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// 读取 xlsx 工作簿为内存模型
pub fn read_workbook(path: &Path) -> AppResult<Workbook> {
    // 检查文件存在
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    // 检查扩展名
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "xlsx" {
        return Err(AppError::UnsupportedFormat(ext));
    }

    let mut xlsx: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AppError::ExcelReadError(e.to_string()))?;

    let sheet_names = xlsx.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(AppError::ExcelReadError("工作簿无工作表".to_string()));
    }

    let mut workbook = Workbook::new();
    for sheet_name in &sheet_names {
        let mut sheet = Sheet::new(sheet_name.clone());
        read_values(&mut xlsx, sheet_name, &mut sheet)?;
        overlay_formulas(&mut xlsx, sheet_name, &mut sheet);
        workbook.add_sheet(sheet)?;
    }

    Ok(workbook)
}

/// 读取数值通道
fn read_values<R>(xlsx: &mut Xlsx<R>, sheet_name: &str, sheet: &mut Sheet) -> AppResult<()>
where
    R: std::io::Read + std::io::Seek,
{
    let range = xlsx
        .worksheet_range(sheet_name)
        .map_err(|e| AppError::ExcelReadError(e.to_string()))?;

    // 数据区可能不从 A1 开始, 需要按范围起点平移
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (row_idx, row) in range.rows().enumerate() {
        for (col_idx, data) in row.iter().enumerate() {
            let target_row = start_row + row_idx as u32 + 1;
            let target_col = (start_col as usize + col_idx + 1) as u16;

            let value = match data {
                Data::Empty => continue,
                Data::String(s) => {
                    if s.is_empty() {
                        continue;
                    }
                    CellValue::Text(s.clone())
                }
                Data::Float(n) => CellValue::Number(*n),
                Data::Int(n) => CellValue::Number(*n as f64),
                Data::Bool(b) => CellValue::Bool(*b),
                Data::DateTime(dt) => match dt.as_datetime() {
                    Some(naive) => CellValue::DateTime(naive),
                    // 序列值超出可表示范围时退回数值
                    None => CellValue::Number(dt.as_f64()),
                },
                Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
                Data::Error(e) => CellValue::Text(format!("#{e:?}")),
            };
            sheet.set_value(target_row, target_col, value);
        }
    }

    Ok(())
}

/// 叠加公式通道: 把公式单元格改写为带缓存值的公式标记
fn overlay_formulas<R>(xlsx: &mut Xlsx<R>, sheet_name: &str, sheet: &mut Sheet)
where
    R: std::io::Read + std::io::Seek,
{
    // 公式范围缺失不算错误（工作表可能没有任何公式）
    let Ok(formulas) = xlsx.worksheet_formula(sheet_name) else {
        return;
    };

    let (start_row, start_col) = formulas.start().unwrap_or((0, 0));

    for (row_idx, row) in formulas.rows().enumerate() {
        for (col_idx, formula) in row.iter().enumerate() {
            let expr = formula.trim_start_matches('=');
            if expr.is_empty() {
                continue;
            }

            let target_row = start_row + row_idx as u32 + 1;
            let target_col = (start_col as usize + col_idx + 1) as u16;

            // 数值通道读到的结果作为缓存计算值保留
            let cached = match sheet.value(target_row, target_col) {
                CellValue::Number(n) => Some(*n),
                _ => None,
            };
            sheet.set_value(
                target_row,
                target_col,
                CellValue::Formula {
                    expr: expr.to_string(),
                    cached,
                },
            );
        }
    }
}
