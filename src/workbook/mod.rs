// ==========================================
// 工作簿层 - 内存模型与 xlsx 读写
// ==========================================
// 读取: calamine（数值 + 公式两个通道）
// 写出: rust_xlsxwriter（样式/合并/列宽/表格对象）
// 单元格样式不做读入往返: calamine 不暴露样式,
// 生成的工作表样式全部由渲染层重建
// ==========================================

pub mod model;
pub mod reader;
pub mod writer;

pub use model::{
    Cell, CellStyle, CellValue, HorizontalAlign, MergedRange, Sheet, TableDef, VerticalAlign,
    Workbook,
};
pub use reader::read_workbook;
pub use writer::write_workbook;
