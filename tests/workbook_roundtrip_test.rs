// ==========================================
// 保税库存销货清单生成系统 - 工作簿读写往返测试
// ==========================================
// 写出 → 读回: 值/公式标记/日期/工作表顺序
// ==========================================


use bonded_invoicer::workbook::{read_workbook, write_workbook, CellValue, Sheet, Workbook};
use test_helpers::parse_date;

#[test]
fn test_values_survive_roundtrip() {
    let mut wb = Workbook::new();
    let mut sheet = Sheet::new("数据");
    sheet.set_value(1, 1, CellValue::Text("规格".to_string()));
    sheet.set_value(2, 1, CellValue::Text("X".to_string()));
    sheet.set_value(2, 2, CellValue::Number(12.5));
    sheet.set_value(2, 3, CellValue::Bool(true));
    wb.add_sheet(sheet).expect("追加工作表失败");

    let (_dir, path) = test_helpers::write_temp_workbook(&wb, "往返.xlsx");
    let reread = read_workbook(&path).expect("读回失败");

    let sheet = reread.sheet("数据").expect("工作表应存在");
    assert_eq!(sheet.value(1, 1), &CellValue::Text("规格".to_string()));
    assert_eq!(sheet.value(2, 1), &CellValue::Text("X".to_string()));
    assert_eq!(sheet.value(2, 2), &CellValue::Number(12.5));
    assert_eq!(sheet.value(2, 3), &CellValue::Bool(true));
}

#[test]
fn test_formula_tag_survives_roundtrip() {
    let mut wb = Workbook::new();
    let mut sheet = Sheet::new("数据");
    sheet.set_value(2, 5, CellValue::Number(12.5));
    sheet.set_value(2, 6, CellValue::Number(2.5));
    sheet.set_value(2, 7, CellValue::formula("E2-F2"));
    wb.add_sheet(sheet).expect("追加工作表失败");

    let (_dir, path) = test_helpers::write_temp_workbook(&wb, "公式.xlsx");
    let reread = read_workbook(&path).expect("读回失败");

    let sheet = reread.sheet("数据").expect("工作表应存在");
    // 读回后仍是公式标记, 表达式不带前导 '='
    match sheet.value(2, 7) {
        CellValue::Formula { expr, .. } => assert_eq!(expr, "E2-F2"),
        other => panic!("期望公式单元格, 实际 {other:?}"),
    }
    // 普通数值不受公式通道影响
    assert_eq!(sheet.value(2, 5), &CellValue::Number(12.5));
}

#[test]
fn test_date_cell_survives_roundtrip() {
    let mut wb = Workbook::new();
    let mut sheet = Sheet::new("数据");
    let midnight = parse_date("2024-01-05")
        .and_hms_opt(0, 0, 0)
        .expect("构造日期失败");
    sheet.set_value(2, 2, CellValue::DateTime(midnight));
    sheet.set_number_format(2, 2, "yyyy-mm-dd");
    wb.add_sheet(sheet).expect("追加工作表失败");

    let (_dir, path) = test_helpers::write_temp_workbook(&wb, "日期.xlsx");
    let reread = read_workbook(&path).expect("读回失败");

    let sheet = reread.sheet("数据").expect("工作表应存在");
    match sheet.value(2, 2) {
        CellValue::DateTime(dt) => assert_eq!(dt.date(), parse_date("2024-01-05")),
        other => panic!("期望日期单元格, 实际 {other:?}"),
    }
}

#[test]
fn test_sheet_order_is_preserved() {
    let mut wb = Workbook::new();
    for name in ["BondDataSheet", "TemplateSheet", "附加"] {
        wb.add_sheet(Sheet::new(name)).expect("追加工作表失败");
    }

    let (_dir, path) = test_helpers::write_temp_workbook(&wb, "顺序.xlsx");
    let reread = read_workbook(&path).expect("读回失败");

    assert_eq!(
        reread.sheet_names(),
        vec!["BondDataSheet", "TemplateSheet", "附加"]
    );
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let mut wb = Workbook::new();
    wb.add_sheet(Sheet::new("数据")).expect("追加工作表失败");
    let result = write_workbook(&wb, std::path::Path::new("/不存在的目录/输出.xlsx"));
    assert!(result.is_err());
}
