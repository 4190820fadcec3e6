// ==========================================
// 保税库存销货清单生成系统 - 运行配置
// ==========================================
// 职责: 显式的运行配置值对象, 与界面层解耦
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认输入文件名
pub const DEFAULT_INPUT_FILE: &str = "库存tmep.xlsx";

/// 输出文件名后缀（插在扩展名之前）
const OUTPUT_SUFFIX: &str = "_改进版";

/// 单次运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// 输入工作簿路径
    pub input_path: PathBuf,

    /// 输出工作簿路径
    pub output_path: PathBuf,
}

impl RunConfig {
    /// 创建运行配置
    ///
    /// 输出路径缺省时按 `{输入文件名}_改进版.{扩展名}` 规则派生
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        let input_path = input.into();
        let output_path = output.unwrap_or_else(|| default_output_path(&input_path));
        Self {
            input_path,
            output_path,
        }
    }
}

/// 派生默认输出路径: `{输入文件名}_改进版.{扩展名}`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("输出");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("xlsx");
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}
