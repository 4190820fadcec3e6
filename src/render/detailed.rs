// ==========================================
// 保税库存销货清单生成系统 - 详细版清单渲染
// ==========================================
// 不依赖模板, 从零构建: 抬头/表头/逐规格两行
// (数据行 + 合并的明细净重行)/汇总/金额/页脚
// ==========================================

use crate::domain::inventory::InventoryRow;
use crate::domain::types::InvoiceVariant;
use crate::error::AppResult;
use crate::pipeline::grouping::group_by_product;
use crate::render::sheet_name::{invoice_sheet_name, shorten_sheet_name};
use crate::render::styles::{
    detail_font, footer_font, header_font, normal_font, title_font, DETAILED_COL_WIDTHS,
};
use crate::render::{detail_weights_line, round2};
use crate::workbook::model::{CellValue, Sheet, Workbook};

/// 公司抬头
const COMPANY_NAME: &str = "东阳市欧亚金银丝有限公司";

/// 单据类型
const DOCUMENT_TYPE: &str = "销货清单";

/// 表头五列
const TABLE_HEADERS: [&str; 5] = ["产品名称", "件数", "总重量(kg)", "单价(元)", "金额(元)"];

/// 退换货条款
const RETURN_POLICY: &str =
    "备注: 1. 建议用户试样,如有质量问题,请在3日内退回。2. 如果发生法律纠纷,由东阳市人民法院管辖。";

/// 联系方式
const CONTACT_INFO: &str =
    "手机: 18606833896, 18606886823  电话: 0579-86985290  传真: 0579-86985471";

/// 创建详细版销货清单, 返回新工作表名
pub fn render_detailed_invoice(
    workbook: &mut Workbook,
    date_str: &str,
    customer: &str,
    items: &[InventoryRow],
    invoice_no: &str,
) -> AppResult<String> {
    let canonical = invoice_sheet_name(customer, date_str, invoice_no, InvoiceVariant::Detailed);
    let sheet_name = shorten_sheet_name(&canonical);

    let mut sheet = Sheet::new(sheet_name.clone());

    // 设置列宽
    for (col, width) in DETAILED_COL_WIDTHS {
        sheet.set_col_width(col, width);
    }

    // 标题
    let mut row_idx = 1u32;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(COMPANY_NAME.to_string()),
        title_font().centered(),
    );

    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(DOCUMENT_TYPE.to_string()),
        header_font().centered(),
    );

    // 客户 + 单号
    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 3);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(format!("客户: {customer}")),
        normal_font().left_aligned(),
    );
    sheet.merge(row_idx, 4, row_idx, 5);
    sheet.set_cell(
        row_idx,
        4,
        CellValue::Text(format!("No. {invoice_no}")),
        normal_font().right_aligned(),
    );

    // 开单日期
    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(format!("开单日期: {date_str}")),
        normal_font().right_aligned(),
    );

    // 表头
    row_idx += 1;
    for (col_idx, header) in TABLE_HEADERS.iter().enumerate() {
        sheet.set_cell(
            row_idx,
            col_idx as u16 + 1,
            CellValue::Text(header.to_string()),
            header_font().centered().with_border(),
        );
    }

    // 按产品分组
    let products = group_by_product(items);

    // 填充产品明细
    let mut total_pieces: u32 = 0;
    let mut total_weight: f64 = 0.0;

    for (spec, info) in &products {
        // 产品行
        row_idx += 1;
        sheet.set_cell(
            row_idx,
            1,
            CellValue::Text(spec.clone()),
            normal_font().centered().with_border(),
        );
        sheet.set_cell(
            row_idx,
            2,
            CellValue::Number(f64::from(info.piece_count)),
            normal_font().centered().with_border(),
        );
        sheet.set_cell(
            row_idx,
            3,
            CellValue::Number(round2(info.total_net_weight)),
            normal_font().centered().with_border(),
        );
        // 单价和金额留空,需要手动填写
        sheet.set_cell(
            row_idx,
            4,
            CellValue::Text(String::new()),
            normal_font().centered().with_border(),
        );
        sheet.set_cell(
            row_idx,
            5,
            CellValue::Text(String::new()),
            normal_font().centered().with_border(),
        );

        // 明细净重行
        row_idx += 1;
        sheet.merge(row_idx, 1, row_idx, 5);
        sheet.set_cell(
            row_idx,
            1,
            CellValue::Text(detail_weights_line(&info.net_weights)),
            detail_font().left_aligned().with_border(),
        );

        total_pieces += info.piece_count;
        total_weight += info.total_net_weight;
    }

    // 汇总
    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(format!(
            "汇总: 总件数 {total_pieces}箱    总重量 {}kg",
            round2(total_weight)
        )),
        header_font().centered().with_border(),
    );

    // 金额汇总(留空)
    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text("合计金额(大写): ".to_string()),
        normal_font().left_aligned().with_border(),
    );

    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text("合计金额(小写): ¥".to_string()),
        normal_font().left_aligned().with_border(),
    );

    // 备注
    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(RETURN_POLICY.to_string()),
        footer_font().left_aligned(),
    );

    row_idx += 1;
    sheet.merge(row_idx, 1, row_idx, 5);
    sheet.set_cell(
        row_idx,
        1,
        CellValue::Text(CONTACT_INFO.to_string()),
        footer_font().centered(),
    );

    workbook.add_sheet(sheet)?;
    Ok(sheet_name)
}
