// ==========================================
// 销售线索轮转分配系统 - 诊断 CLI 入口
// ==========================================
// 用法: lead-rotation-aps <snapshot.json> [SUB|OVER]
// 职责: 加载快照, 打印下一位 / 顺位序列 / 审计投影
// 红线: 只读诊断工具, 不写任何外部存储
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Utc;
use lead_rotation_aps::{logging, Lane, RotationApi, RotationError, RotationSnapshot};
use std::env;
use std::fs;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", lead_rotation_aps::APP_NAME);
    tracing::info!("系统版本: {}", lead_rotation_aps::VERSION);
    tracing::info!("==================================================");

    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("用法: lead-rotation-aps <snapshot.json> [SUB|OVER]"),
    };
    let lanes = match args.next().as_deref() {
        None => vec![Lane::Sub, Lane::Over],
        Some("SUB") | Some("sub") => vec![Lane::Sub],
        Some("OVER") | Some("over") => vec![Lane::Over],
        Some(other) => bail!("未知泳道参数: {} (应为 SUB 或 OVER)", other),
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("读取快照失败: {}", path))?;
    let snapshot: RotationSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("解析快照失败: {}", path))?;

    let today = Utc::now().date_naive();
    let api = RotationApi::new(&snapshot, today).context("快照校验失败")?;

    for lane in lanes {
        println!("===== 泳道 {} =====", lane);

        match api.next_in_lane(lane) {
            Ok(rep_id) => println!("下一位: {}", rep_id),
            Err(RotationError::LaneClosed { .. }) => println!("下一位: (泳道关闭)"),
            Err(RotationError::EmptyBaseOrder { .. }) => println!("下一位: (未配置基准顺序)"),
            Err(err) => return Err(err.into()),
        }

        let window = snapshot.policy.default_sequence_window;
        let sequence = api.sequence(lane, window)?;
        println!("顺位序列 (前 {} 位): {}", window, sequence.join(" -> "));

        println!("审计投影:");
        for row in api.audit_lane(lane)? {
            println!(
                "  [{}] rep={} delta={:+} counted={} reason={}",
                row.entry_id, row.rep_id, row.delta, row.counted, row.reason
            );
        }
    }

    Ok(())
}
