// ==========================================
// 销售线索轮转分配系统 - 换单登记引擎
// ==========================================
// 职责: 换单记录的生命周期管理与分类查询
// 状态机: Marked → Replaced (完成, 终态)
//         Marked → 记录删除 (撤销标记)
//         Replaced → Marked (仅限显式取消补发)
// ==========================================

use crate::api::error::RotationError;
use crate::domain::replacement::ReplacementRecord;
use crate::domain::types::{Lane, LeadId, RepId, ReplacementClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// ReplacementRegistry - 换单登记表
// ==========================================
// 以被标记原单的 lead_id 为键
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacementRegistry {
    records: HashMap<LeadId, ReplacementRecord>,
}

impl ReplacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn record(&self, lead_id: &str) -> Option<&ReplacementRecord> {
        self.records.get(lead_id)
    }

    /// 标记线索待换
    ///
    /// # 规则
    /// - 该线索已有记录 (无论开放或已完成) → DuplicateMark
    pub fn mark(
        &mut self,
        lead_id: impl Into<LeadId>,
        lane: Lane,
        rep_id: impl Into<RepId>,
        account_number: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), RotationError> {
        let lead_id = lead_id.into();
        if self.records.contains_key(&lead_id) {
            return Err(RotationError::DuplicateMark { lead_id });
        }

        debug!(lead_id = %lead_id, %lane, "标记换单");
        self.records.insert(
            lead_id.clone(),
            ReplacementRecord {
                lead_id,
                replaced_by_lead_id: None,
                lane,
                rep_id: rep_id.into(),
                account_number: account_number.into(),
                marked_at: now,
                replaced_at: None,
            },
        );
        Ok(())
    }

    /// 完成换单, 写入补发线索 id
    ///
    /// # 规则
    /// - 无记录 → NotMarked
    /// - 已完成 → AlreadyReplaced
    pub fn complete(
        &mut self,
        lead_id: &str,
        new_lead_id: impl Into<LeadId>,
        now: DateTime<Utc>,
    ) -> Result<(), RotationError> {
        let record = self
            .records
            .get_mut(lead_id)
            .ok_or_else(|| RotationError::NotMarked {
                lead_id: lead_id.to_string(),
            })?;
        if record.is_completed() {
            return Err(RotationError::AlreadyReplaced {
                lead_id: lead_id.to_string(),
            });
        }

        let new_lead_id = new_lead_id.into();
        debug!(lead_id, new_lead_id = %new_lead_id, "完成换单");
        record.replaced_by_lead_id = Some(new_lead_id);
        record.replaced_at = Some(now);
        Ok(())
    }

    /// 撤销标记, 删除开放记录
    ///
    /// # 规则
    /// - 无记录 → NotMarked
    /// - 已完成 → CannotUnmarkCompleted (应走 cancel_replacement)
    pub fn unmark(&mut self, lead_id: &str) -> Result<(), RotationError> {
        let record = self
            .records
            .get(lead_id)
            .ok_or_else(|| RotationError::NotMarked {
                lead_id: lead_id.to_string(),
            })?;
        if record.is_completed() {
            return Err(RotationError::CannotUnmarkCompleted {
                lead_id: lead_id.to_string(),
            });
        }

        debug!(lead_id, "撤销换单标记");
        self.records.remove(lead_id);
        Ok(())
    }

    /// 取消补发, 已完成记录回到开放状态
    ///
    /// 用于 "取消补发并重新开单" 流程
    ///
    /// # 规则
    /// - 无记录 → NotMarked
    /// - 未完成 → NotReplacedYet
    pub fn cancel_replacement(&mut self, lead_id: &str) -> Result<(), RotationError> {
        let record = self
            .records
            .get_mut(lead_id)
            .ok_or_else(|| RotationError::NotMarked {
                lead_id: lead_id.to_string(),
            })?;
        if !record.is_completed() {
            return Err(RotationError::NotReplacedYet {
                lead_id: lead_id.to_string(),
            });
        }

        debug!(lead_id, "取消补发, 记录重新开放");
        record.replaced_by_lead_id = None;
        record.replaced_at = None;
        Ok(())
    }

    /// 查询线索在换单体系中的身份
    ///
    /// # 规则
    /// - lead_id 是记录键且未完成 → Marked (MFR)
    /// - lead_id 是记录键且已完成 → Completed (LTR)
    /// - lead_id 是某记录的补发线索 → Replacement (LRL)
    /// - 其余 → None (普通线索)
    pub fn classify(&self, lead_id: &str) -> ReplacementClass {
        if let Some(record) = self.records.get(lead_id) {
            if record.is_completed() {
                return ReplacementClass::Completed;
            }
            return ReplacementClass::Marked;
        }

        let is_replacement = self
            .records
            .values()
            .any(|r| r.replaced_by_lead_id.as_deref() == Some(lead_id));
        if is_replacement {
            ReplacementClass::Replacement
        } else {
            ReplacementClass::None
        }
    }
}
