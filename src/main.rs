// ==========================================
// 保税库存销货清单生成系统 - 命令行入口
// ==========================================
// 用法:
//   bonded-invoicer [输入文件] [输出文件]
// 缺省输入 库存tmep.xlsx, 缺省输出按
// {输入文件名}_改进版.{扩展名} 派生
// ==========================================

use bonded_invoicer::config::{RunConfig, DEFAULT_INPUT_FILE};
use bonded_invoicer::{logging, orchestrator};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", bonded_invoicer::APP_NAME);
    tracing::info!("系统版本: {}", bonded_invoicer::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());
    let output = args.next().map(PathBuf::from);
    let config = RunConfig::new(input, output);

    let report = match orchestrator::run(&config) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "运行失败");
            return Err(Box::new(e));
        }
    };

    tracing::info!("==================================================");
    if report.nothing_to_do() {
        tracing::info!("没有需要生成销售清单的数据, 仅完成列规范化");
    } else {
        tracing::info!(
            groups = report.group_count,
            sheets = report.sheets_created,
            rows_marked = report.rows_marked,
            "✓ 所有操作完成!"
        );
    }
    tracing::info!("==================================================");
    tracing::info!(output = %config.output_path.display(), "输出文件");

    println!("说明:");
    println!("1. BondDataTable已优化,新增行会自动填充序号和日期");
    println!("2. 已为所有未入账的数据生成销售清单(简单版+详细版)");
    println!("3. 已生成清单的数据在'入账'列标记为'是'");
    println!("4. 销售清单中的单价和金额需要手动填写");

    Ok(())
}
