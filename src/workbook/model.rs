// ==========================================
// 保税库存销货清单生成系统 - 工作簿内存模型
// ==========================================
// 单元格值为带标记的字面量/公式枚举,
// 使"仅在空或已是公式时覆盖"的谓词可显式测试
// ==========================================

use crate::error::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// CellValue - 单元格值
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    /// 空单元格
    Empty,
    /// 数值
    Number(f64),
    /// 文本
    Text(String),
    /// 布尔
    Bool(bool),
    /// 日期时间
    DateTime(NaiveDateTime),
    /// 公式（expr 不含前导 '='; cached 为读入时的缓存计算值）
    Formula {
        expr: String,
        cached: Option<f64>,
    },
}

impl CellValue {
    /// 构造无缓存值的公式单元格
    pub fn formula(expr: impl Into<String>) -> Self {
        CellValue::Formula {
            expr: expr.into(),
            cached: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }
}

// ==========================================
// CellStyle - 单元格样式
// ==========================================
// 仅覆盖渲染层用到的固定样式维度

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellStyle {
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
    pub bold: bool,
    pub align: Option<HorizontalAlign>,
    pub valign: Option<VerticalAlign>,
    pub wrap_text: bool,
    pub thin_border: bool,
    /// 数字显示格式（如 "yyyy-mm-dd"）
    pub number_format: Option<String>,
}

impl CellStyle {
    pub fn is_default(&self) -> bool {
        *self == CellStyle::default()
    }

    pub fn centered(mut self) -> Self {
        self.align = Some(HorizontalAlign::Center);
        self.valign = Some(VerticalAlign::Middle);
        self.wrap_text = true;
        self
    }

    pub fn left_aligned(mut self) -> Self {
        self.align = Some(HorizontalAlign::Left);
        self.valign = Some(VerticalAlign::Middle);
        self.wrap_text = true;
        self
    }

    pub fn right_aligned(mut self) -> Self {
        self.align = Some(HorizontalAlign::Right);
        self.valign = Some(VerticalAlign::Middle);
        self
    }

    pub fn with_border(mut self) -> Self {
        self.thin_border = true;
        self
    }
}

// ==========================================
// Cell - 单元格
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            value: CellValue::Empty,
            style: CellStyle::default(),
        }
    }
}

// ==========================================
// MergedRange - 合并区域（1 基, 闭区间）
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergedRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

// ==========================================
// TableDef - 表格对象定义
// ==========================================
// 源表的结构化引用公式依赖表格对象存在,
// 写出时重建（1 基, 含表头行）

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDef {
    pub name: String,
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub columns: Vec<String>,
}

// ==========================================
// Sheet - 工作表
// ==========================================
// 稀疏单元格存储, 坐标 1 基 (行, 列),
// 与电子表格宿主的 cell(row, col) 习惯一致

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub name: String,
    cells: BTreeMap<(u32, u16), Cell>,
    pub merges: Vec<MergedRange>,
    pub col_widths: BTreeMap<u16, f64>,
    pub table: Option<TableDef>,
}

static EMPTY_VALUE: CellValue = CellValue::Empty;

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
            col_widths: BTreeMap::new(),
            table: None,
        }
    }

    /// 读取单元格值; 未写入的坐标视为空
    pub fn value(&self, row: u32, col: u16) -> &CellValue {
        self.cells
            .get(&(row, col))
            .map(|cell| &cell.value)
            .unwrap_or(&EMPTY_VALUE)
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// 写入单元格值, 保留已有样式
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        self.cells.entry((row, col)).or_default().value = value;
    }

    /// 写入单元格样式, 保留已有值
    pub fn set_style(&mut self, row: u32, col: u16, style: CellStyle) {
        self.cells.entry((row, col)).or_default().style = style;
    }

    /// 同时写入值与样式
    pub fn set_cell(&mut self, row: u32, col: u16, value: CellValue, style: CellStyle) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value;
        cell.style = style;
    }

    /// 仅调整数字显示格式, 不改变底层值
    pub fn set_number_format(&mut self, row: u32, col: u16, format: &str) {
        self.cells.entry((row, col)).or_default().style.number_format = Some(format.to_string());
    }

    pub fn merge(&mut self, first_row: u32, first_col: u16, last_row: u32, last_col: u16) {
        self.merges.push(MergedRange {
            first_row,
            first_col,
            last_row,
            last_col,
        });
    }

    pub fn set_col_width(&mut self, col: u16, width: f64) {
        self.col_widths.insert(col, width);
    }

    /// 最后一个有内容的行号（1 基; 空表返回 0）
    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&(u32, u16), &Cell)> {
        self.cells.iter()
    }
}

// ==========================================
// Workbook - 工作簿
// ==========================================
// 工作表按插入顺序保存, 写出顺序与之一致

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Workbook::default()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// 追加工作表; 同名视为冲突（不做静默覆盖）
    pub fn add_sheet(&mut self, sheet: Sheet) -> AppResult<&mut Sheet> {
        if self.contains_sheet(&sheet.name) {
            return Err(AppError::SheetNameConflict(sheet.name));
        }
        self.sheets.push(sheet);
        let last = self.sheets.len() - 1;
        Ok(&mut self.sheets[last])
    }

    /// 复制既有工作表为新名（值/合并/列宽整体克隆）
    pub fn duplicate_sheet(&mut self, source: &str, new_name: &str) -> AppResult<&mut Sheet> {
        let mut copy = self
            .sheet(source)
            .ok_or_else(|| AppError::SheetNotFound(source.to_string()))?
            .clone();
        copy.name = new_name.to_string();
        self.add_sheet(copy)
    }
}
