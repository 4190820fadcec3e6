// ==========================================
// 保税库存销货清单生成系统 - 简单版清单渲染
// ==========================================
// 基于 TemplateSheet 复制: 固定坐标填表头,
// 第 5 行起每个规格占一行
// ==========================================

use crate::domain::inventory::InventoryRow;
use crate::domain::types::{InvoiceVariant, TEMPLATE_SHEET};
use crate::error::AppResult;
use crate::pipeline::grouping::group_by_product;
use crate::render::sheet_name::{invoice_sheet_name, shorten_sheet_name};
use crate::render::{detail_weights_line, round2};
use crate::workbook::model::{CellValue, Workbook};

/// 产品明细起始行
const PRODUCT_START_ROW: u32 = 5;

/// 创建简单版销货清单, 返回新工作表名
pub fn render_compact_invoice(
    workbook: &mut Workbook,
    date_str: &str,
    customer: &str,
    items: &[InventoryRow],
    invoice_no: &str,
) -> AppResult<String> {
    let canonical = invoice_sheet_name(customer, date_str, invoice_no, InvoiceVariant::Compact);
    let sheet_name = shorten_sheet_name(&canonical);

    // 按产品分组（在借用工作表之前完成）
    let products = group_by_product(items);

    // 复制模板
    let sheet = workbook.duplicate_sheet(TEMPLATE_SHEET, &sheet_name)?;

    // 客户名称 (B3)
    sheet.set_value(3, 2, CellValue::Text(format!("客户: {customer}")));
    // 开单日期 (F3)
    sheet.set_value(3, 6, CellValue::Text(format!(" 开单日期: {date_str}")));
    // 单号 (I2)
    sheet.set_value(2, 9, CellValue::Text(format!("NO {invoice_no}")));

    // 填充产品明细
    let mut row_idx = PRODUCT_START_ROW;
    for (spec, info) in &products {
        sheet.set_value(row_idx, 1, CellValue::Text(spec.clone())); // 产品名称
        sheet.set_value(row_idx, 2, CellValue::Number(f64::from(info.piece_count))); // 件数
        sheet.set_value(row_idx, 3, CellValue::Number(round2(info.total_net_weight))); // 总重量
        // 单价和金额需要手动填写
        sheet.set_value(row_idx, 4, CellValue::Text(String::new()));
        sheet.set_value(row_idx, 5, CellValue::Text(String::new()));
        // 明细净重
        sheet.set_value(
            row_idx,
            6,
            CellValue::Text(detail_weights_line(&info.net_weights)),
        );
        row_idx += 1;
    }

    Ok(sheet_name)
}
