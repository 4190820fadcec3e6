// ==========================================
// 保税库存销货清单生成系统 - 工作表命名
// ==========================================
// 规范长名先生成, 超长时做确定性缩短:
// 前缀 + '~' + 全名 SHA-256 前 8 位十六进制,
// 避免盲截断导致两个逻辑名撞同一个表名
// ==========================================

use crate::domain::types::InvoiceVariant;
use sha2::{Digest, Sha256};

/// 宿主格式的工作表名长度上限（字符数）
pub const SHEET_NAME_LIMIT: usize = 31;

/// 缩短后保留的前缀字符数（前缀 + '~' + 8 位摘要 = 31）
const SHORT_PREFIX_CHARS: usize = 22;

/// 销货清单工作表的规范长名
pub fn invoice_sheet_name(
    customer: &str,
    date_str: &str,
    invoice_no: &str,
    variant: InvoiceVariant,
) -> String {
    format!(
        "销货清单_{customer}_{date_str}_{invoice_no}_{}",
        variant.label()
    )
}

/// 把规范名缩短到表名上限以内
///
/// 不超限的名字原样返回; 超限的名字确定性缩短,
/// 不同全名得到不同摘要后缀
pub fn shorten_sheet_name(name: &str) -> String {
    if name.chars().count() <= SHEET_NAME_LIMIT {
        return name.to_string();
    }

    let prefix: String = name.chars().take(SHORT_PREFIX_CHARS).collect();
    let digest = Sha256::digest(name.as_bytes());
    let suffix: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
    format!("{prefix}~{suffix}")
}
