// ==========================================
// 渲染层 - 销货清单工作表
// ==========================================
// 简单版: 复制模板后填充固定坐标
// 详细版: 从零构建带样式的完整清单
// ==========================================

pub mod compact;
pub mod detailed;
pub mod sheet_name;
pub mod styles;

pub use compact::render_compact_invoice;
pub use detailed::render_detailed_invoice;
pub use sheet_name::{invoice_sheet_name, shorten_sheet_name};

/// 保留两位小数
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 明细净重串: 逐件净重保留两位小数, 逗号分隔
pub(crate) fn detail_weights_line(weights: &[f64]) -> String {
    let parts: Vec<String> = weights.iter().map(|w| round2(*w).to_string()).collect();
    format!("明细净重(kg): {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(10.556), 10.56);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_detail_weights_line() {
        assert_eq!(
            detail_weights_line(&[1.234, 5.0, 10.556]),
            "明细净重(kg): 1.23, 5, 10.56"
        );
    }
}
