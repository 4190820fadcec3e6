// ==========================================
// 保税库存销货清单生成系统 - 清单样式常量
// ==========================================
// 详细版清单的全部样式为固定配置, 不做计算
// ==========================================

use crate::workbook::model::CellStyle;

/// 清单正文字体
pub const FONT_SONG: &str = "宋体";

/// 详细版列宽（A-E）
pub const DETAILED_COL_WIDTHS: [(u16, f64); 5] =
    [(1, 20.0), (2, 12.0), (3, 15.0), (4, 12.0), (5, 15.0)];

fn song(size: f64, bold: bool) -> CellStyle {
    CellStyle {
        font_name: Some(FONT_SONG.to_string()),
        font_size: Some(size),
        bold,
        ..CellStyle::default()
    }
}

/// 公司抬头: 16 号加粗
pub fn title_font() -> CellStyle {
    song(16.0, true)
}

/// 表头/汇总: 12 号加粗
pub fn header_font() -> CellStyle {
    song(12.0, true)
}

/// 正文: 11 号
pub fn normal_font() -> CellStyle {
    song(11.0, false)
}

/// 明细净重行: 10 号
pub fn detail_font() -> CellStyle {
    song(10.0, false)
}

/// 页脚: 9 号
pub fn footer_font() -> CellStyle {
    song(9.0, false)
}
