// ==========================================
// 保税库存销货清单生成系统 - 运行编排
// ==========================================
// 流程: 加载 → 规范化 → 提取 → 分组 →
//       逐组渲染两版清单并标记入账 → 保存
// 无分组时跳过渲染与标记, 仍保存规范化结果
// ==========================================

use crate::config::RunConfig;
use crate::domain::inventory::RunReport;
use crate::domain::types::{
    SOURCE_SHEET, SOURCE_TABLE, TABLE_COLUMN_COUNT, TABLE_HEADERS, TEMPLATE_SHEET,
};
use crate::error::{AppError, AppResult};
use crate::pipeline::{extractor, grouping, marker, normalizer};
use crate::render::{render_compact_invoice, render_detailed_invoice};
use crate::workbook::model::{Sheet, TableDef, Workbook};
use crate::workbook::{read_workbook, write_workbook};
use chrono::Local;
use std::time::Instant;
use tracing::{debug, info};

/// 执行一次完整的清单生成运行
///
/// 工作簿在整个运行期间被独占持有; 保存是最后一步,
/// 中途失败不会留下半写的输出文件
pub fn run(config: &RunConfig) -> AppResult<RunReport> {
    let start_time = Instant::now();

    // === 步骤 1: 加载工作簿 ===
    info!(input = %config.input_path.display(), "正在加载文件");
    let mut workbook = read_workbook(&config.input_path)?;
    for required in [SOURCE_SHEET, TEMPLATE_SHEET] {
        if !workbook.contains_sheet(required) {
            return Err(AppError::SheetNotFound(required.to_string()));
        }
    }

    // === 步骤 2: 改进 BondDataTable ===
    info!("正在改进BondDataTable...");
    let today = Local::now().date_naive();
    let stats = {
        let sheet = source_sheet_mut(&mut workbook)?;
        let stats = normalizer::normalize_source_sheet(sheet, today);
        declare_source_table(sheet);
        stats
    };
    info!(
        sequence = stats.sequence_filled,
        dates = stats.dates_filled,
        net_weight = stats.net_weight_filled,
        "BondDataTable改进完成"
    );

    // === 步骤 3: 读取数据行 ===
    let rows = extractor::extract_rows(source_sheet(&workbook)?);
    let rows_extracted = rows.len();
    info!(rows = rows_extracted, "数据读取完成");

    // === 步骤 4: 按日期和客户分组 ===
    let grouped = grouping::group_by_date_and_customer(rows);

    // === 步骤 5: 逐组生成销售清单并标记入账 ===
    let mut sheets_created = 0usize;
    let mut rows_marked = 0usize;
    if grouped.is_empty() {
        info!("没有需要生成销售清单的数据(所有数据都已入账)");
    } else {
        info!("正在生成销售清单...");
        let mut invoice_counter = 1u32;
        for ((date, customer), items) in &grouped {
            let date_str = date.format("%Y-%m-%d").to_string();
            let invoice_no = format!("{invoice_counter:05}");
            info!(
                date = %date_str,
                customer = %customer,
                records = items.len(),
                "处理分组"
            );

            let compact =
                render_compact_invoice(&mut workbook, &date_str, customer, items, &invoice_no)?;
            info!(sheet = %compact, "创建简单版销售清单");

            let detailed =
                render_detailed_invoice(&mut workbook, &date_str, customer, items, &invoice_no)?;
            info!(sheet = %detailed, "创建详细版销售清单");
            sheets_created += 2;

            // 标记为已入账
            let row_indices: Vec<u32> =
                items.iter().map(|item| item.source_row_index).collect();
            rows_marked += marker::mark_recorded(source_sheet_mut(&mut workbook)?, &row_indices);

            invoice_counter += 1;
        }
        info!(groups = grouped.len(), "销售清单生成完成");
    }

    // === 步骤 6: 保存工作簿 ===
    info!(output = %config.output_path.display(), "正在保存文件");
    write_workbook(&workbook, &config.output_path)?;

    let report = RunReport {
        rows_extracted,
        group_count: grouped.len(),
        sheets_created,
        rows_marked,
        sequence_filled: stats.sequence_filled,
        dates_filled: stats.dates_filled,
        net_weight_filled: stats.net_weight_filled,
        elapsed_ms: start_time.elapsed().as_millis(),
    };
    if let Ok(json) = serde_json::to_string(&report) {
        debug!(report = %json, "运行报告");
    }
    Ok(report)
}

fn source_sheet(workbook: &Workbook) -> AppResult<&Sheet> {
    workbook
        .sheet(SOURCE_SHEET)
        .ok_or_else(|| AppError::SheetNotFound(SOURCE_SHEET.to_string()))
}

fn source_sheet_mut(workbook: &mut Workbook) -> AppResult<&mut Sheet> {
    workbook
        .sheet_mut(SOURCE_SHEET)
        .ok_or_else(|| AppError::SheetNotFound(SOURCE_SHEET.to_string()))
}

/// 重建源表的表格对象, 保证结构化引用公式在输出中有效
fn declare_source_table(sheet: &mut Sheet) {
    // 表格至少覆盖一个数据行
    let last_row = sheet.max_row().max(2);
    sheet.table = Some(TableDef {
        name: SOURCE_TABLE.to_string(),
        first_row: 1,
        first_col: 1,
        last_row,
        last_col: TABLE_COLUMN_COUNT,
        columns: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
    });
}
