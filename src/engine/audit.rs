// ==========================================
// 销售线索轮转分配系统 - 审计投影引擎
// ==========================================
// 职责: 逐条目解释其对指定泳道的计分贡献
// 红线: 与 HitLedger 共用 scoring::entry_contribution,
//       审计行的 delta 之和必须等于账本净命中数
// ==========================================

use crate::api::error::RotationError;
use crate::domain::snapshot::RotationSnapshot;
use crate::domain::types::{EntryId, Lane, RepId};
use crate::engine::scoring::{entry_contribution, ScoreReason};
use serde::Serialize;
use tracing::instrument;

// ==========================================
// AuditRow - 审计行
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
    pub entry_id: EntryId,
    pub rep_id: RepId,
    // 带符号贡献: -1 / 0 / +1
    pub delta: i64,
    // 是否计入净命中数 (delta != 0)
    pub counted: bool,
    // 结构化理由, 人读文本经 Display 取得
    pub reason: ScoreReason,
}

// ==========================================
// AuditTrail - 审计投影 (只读, 无状态)
// ==========================================
pub struct AuditTrail;

impl AuditTrail {
    /// 生成指定泳道的审计投影, 按条目写入顺序排列
    #[instrument(skip(snapshot), fields(%lane))]
    pub fn audit_lane(
        snapshot: &RotationSnapshot,
        lane: Lane,
    ) -> Result<Vec<AuditRow>, RotationError> {
        let mut rows = Vec::with_capacity(snapshot.entries.len());
        for entry in &snapshot.entries {
            let contribution = entry_contribution(
                entry,
                lane,
                &snapshot.leads,
                &snapshot.replacements,
                &snapshot.policy,
            )?;
            rows.push(AuditRow {
                entry_id: contribution.entry_id,
                rep_id: contribution.rep_id,
                delta: contribution.delta,
                counted: contribution.delta != 0,
                reason: contribution.reason,
            });
        }
        Ok(rows)
    }
}
