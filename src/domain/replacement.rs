// ==========================================
// 销售线索轮转分配系统 - 换单记录实体
// ==========================================
// 状态机: Marked → Replaced (完成, 终态)
//         Marked → 记录删除 (撤销标记)
//         Replaced → Marked (仅限显式取消补发)
// 红线: 记录不允许同时处于 Replaced 与 Unmarked
// ==========================================

use crate::domain::types::{Lane, LeadId, RepId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ReplacementRecord - 换单记录
// ==========================================
// 以被标记的原单 lead_id 为键
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementRecord {
    pub lead_id: LeadId,

    // 补发线索 id, Some 即处于 Replaced 状态
    #[serde(default)]
    pub replaced_by_lead_id: Option<LeadId>,

    pub lane: Lane,
    pub rep_id: RepId,
    pub account_number: String,

    pub marked_at: DateTime<Utc>,
    #[serde(default)]
    pub replaced_at: Option<DateTime<Utc>>,
}

impl ReplacementRecord {
    /// 是否已完成换单 (Replaced 状态)
    pub fn is_completed(&self) -> bool {
        self.replaced_by_lead_id.is_some()
    }
}
