// ==========================================
// 销售线索轮转分配系统 - 条目计分核心
// ==========================================
// 职责: 单条目对 (代表, 泳道) 的计分贡献判定
// 红线: HitLedger 与 AuditTrail 必须共用此函数,
//       保证账本与审计永远一致
// ==========================================

use crate::api::error::RotationError;
use crate::config::RotationPolicy;
use crate::domain::entry::RotationEntry;
use crate::domain::lead::Lead;
use crate::domain::types::{Lane, LeadId, ReplacementClass};
use crate::engine::replacement::ReplacementRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// ScoreReason - 计分理由
// ==========================================
// 审计投影逐条展示, 每个贡献必须可解释;
// 结构化变体随审计行序列化, Display 给人读的文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreReason {
    /// 本泳道普通线索 (NL), +1
    NormalLead,
    /// 标记待换 (MFR), 在线索本泳道 -1
    MarkedForReplacement,
    /// 原单已被换 (LTR), 计 0
    ReplacedOriginal,
    /// 补发线索 (LRL), 计零策略开启, 计 0
    ReplacementZeroPolicy,
    /// 补发线索 (LRL), 计零策略关闭, 按普通线索 +1
    ReplacementCounted,
    /// 手工跳过命中本泳道, +1
    SkipHit,
    /// 跳过目标不含本泳道, 计 0
    SkipOtherTarget,
    /// 线索属另一泳道, 计 0
    OtherLane,
    /// 不在岗条目只影响资格, 不计分
    OutOfOffice,
    /// 顺位标记, 纯信息
    NextMarker,
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreReason::NormalLead => write!(f, "normal lead (+1)"),
            ScoreReason::MarkedForReplacement => write!(f, "marked for replacement (-1)"),
            ScoreReason::ReplacedOriginal => write!(f, "replaced original, historical only (0)"),
            ScoreReason::ReplacementZeroPolicy => {
                write!(f, "replacement lead, zero policy on (0)")
            }
            ScoreReason::ReplacementCounted => {
                write!(f, "replacement lead, zero policy off (+1)")
            }
            ScoreReason::SkipHit => write!(f, "manual skip (+1)"),
            ScoreReason::SkipOtherTarget => write!(f, "skip targets other lane (0)"),
            ScoreReason::OtherLane => write!(f, "lead belongs to other lane (0)"),
            ScoreReason::OutOfOffice => write!(f, "ooo, eligibility only (0)"),
            ScoreReason::NextMarker => write!(f, "informational next marker (0)"),
        }
    }
}

// ==========================================
// Contribution - 单条目贡献
// ==========================================
#[derive(Debug, Clone)]
pub struct Contribution {
    pub entry_id: String,
    pub rep_id: String,
    pub delta: i64,
    pub reason: ScoreReason,
}

/// 计算单条目对指定泳道的计分贡献
///
/// # 规则 (按条目变体分发)
/// - Skip: 目标含本泳道 +1, 否则 0
/// - Ooo / Next: 恒为 0
/// - Lead: 按换单分类判定, MFR 在线索本泳道 -1 (与目标无关),
///   LTR 计 0, LRL 按全局计零策略, 普通线索在本泳道 +1
///
/// # 错误
/// - UnknownLead: Lead 条目引用的线索不在快照内 (调用方契约违反)
pub fn entry_contribution(
    entry: &RotationEntry,
    lane: Lane,
    leads: &HashMap<LeadId, Lead>,
    registry: &ReplacementRegistry,
    policy: &RotationPolicy,
) -> Result<Contribution, RotationError> {
    let (delta, reason) = match entry {
        RotationEntry::Skip { target, .. } => {
            if target.includes(lane) {
                (1, ScoreReason::SkipHit)
            } else {
                (0, ScoreReason::SkipOtherTarget)
            }
        }
        RotationEntry::Ooo { .. } => (0, ScoreReason::OutOfOffice),
        RotationEntry::Next { .. } => (0, ScoreReason::NextMarker),
        RotationEntry::Lead { lead_id, .. } => {
            let lead = leads.get(lead_id).ok_or_else(|| RotationError::UnknownLead {
                lead_id: lead_id.clone(),
            })?;
            lead_contribution(lead, registry.classify(lead_id), lane, policy)
        }
    };

    Ok(Contribution {
        entry_id: entry.id().to_string(),
        rep_id: entry.rep_id().to_string(),
        delta,
        reason,
    })
}

/// 线索条目的贡献判定 (已解析出线索与换单分类)
fn lead_contribution(
    lead: &Lead,
    class: ReplacementClass,
    lane: Lane,
    policy: &RotationPolicy,
) -> (i64, ScoreReason) {
    match class {
        // MFR: 在线索本泳道 -1, 其他泳道 0
        ReplacementClass::Marked => {
            if lead.lane == lane {
                (-1, ScoreReason::MarkedForReplacement)
            } else {
                (0, ScoreReason::OtherLane)
            }
        }
        // LTR: 换单完成后原单只留历史, 恒为 0
        ReplacementClass::Completed => (0, ScoreReason::ReplacedOriginal),
        // LRL: 全局计零策略决定
        ReplacementClass::Replacement => {
            if policy.lrl_counts_as_zero {
                (0, ScoreReason::ReplacementZeroPolicy)
            } else if lead.lane == lane {
                (1, ScoreReason::ReplacementCounted)
            } else {
                (0, ScoreReason::OtherLane)
            }
        }
        // NL: 本泳道 +1
        ReplacementClass::None => {
            if lead.lane == lane {
                (1, ScoreReason::NormalLead)
            } else {
                (0, ScoreReason::OtherLane)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RotationTarget;
    use chrono::{NaiveDate, Utc};

    fn lead_entry(id: &str, rep: &str, lead_id: &str) -> RotationEntry {
        RotationEntry::Lead {
            id: id.to_string(),
            rep_id: rep.to_string(),
            lead_id: lead_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
        }
    }

    fn leads_with(lead: Lead) -> HashMap<LeadId, Lead> {
        let mut map = HashMap::new();
        map.insert(lead.id.clone(), lead);
        map
    }

    #[test]
    fn test_normal_lead_counts_in_own_lane_only() {
        let leads = leads_with(Lead::new("L1", Some(200), vec![], Some("A".to_string())));
        let registry = ReplacementRegistry::new();
        let policy = RotationPolicy::default();
        let entry = lead_entry("E1", "A", "L1");

        let sub = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy).unwrap();
        assert_eq!(sub.delta, 1);
        assert_eq!(sub.reason, ScoreReason::NormalLead);

        let over = entry_contribution(&entry, Lane::Over, &leads, &registry, &policy).unwrap();
        assert_eq!(over.delta, 0);
        assert_eq!(over.reason, ScoreReason::OtherLane);
    }

    #[test]
    fn test_marked_lead_scores_minus_one() {
        let leads = leads_with(Lead::new("L1", Some(200), vec![], Some("A".to_string())));
        let mut registry = ReplacementRegistry::new();
        registry.mark("L1", Lane::Sub, "A", "ACC-1", Utc::now()).unwrap();
        let policy = RotationPolicy::default();
        let entry = lead_entry("E1", "A", "L1");

        let sub = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy).unwrap();
        assert_eq!(sub.delta, -1);
        assert_eq!(sub.reason, ScoreReason::MarkedForReplacement);
    }

    #[test]
    fn test_replacement_lead_policy_switch() {
        let leads = leads_with(Lead::new("L2", Some(200), vec![], Some("A".to_string())));
        let mut registry = ReplacementRegistry::new();
        registry.mark("L1", Lane::Sub, "A", "ACC-1", Utc::now()).unwrap();
        registry.complete("L1", "L2", Utc::now()).unwrap();
        let entry = lead_entry("E1", "A", "L2");

        let policy_on = RotationPolicy::default();
        let c = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy_on).unwrap();
        assert_eq!(c.delta, 0);
        assert_eq!(c.reason, ScoreReason::ReplacementZeroPolicy);

        let policy_off = RotationPolicy {
            lrl_counts_as_zero: false,
            ..RotationPolicy::default()
        };
        let c = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy_off).unwrap();
        assert_eq!(c.delta, 1);
        assert_eq!(c.reason, ScoreReason::ReplacementCounted);
    }

    #[test]
    fn test_skip_targets() {
        let leads = HashMap::new();
        let registry = ReplacementRegistry::new();
        let policy = RotationPolicy::default();
        let entry = RotationEntry::Skip {
            id: "E1".to_string(),
            rep_id: "A".to_string(),
            target: RotationTarget::Sub,
            date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
        };

        let sub = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy).unwrap();
        assert_eq!(sub.delta, 1);
        let over = entry_contribution(&entry, Lane::Over, &leads, &registry, &policy).unwrap();
        assert_eq!(over.delta, 0);
    }

    #[test]
    fn test_unknown_lead_fails_loudly() {
        let leads = HashMap::new();
        let registry = ReplacementRegistry::new();
        let policy = RotationPolicy::default();
        let entry = lead_entry("E1", "A", "L404");

        let err = entry_contribution(&entry, Lane::Sub, &leads, &registry, &policy).unwrap_err();
        assert!(matches!(err, RotationError::UnknownLead { .. }));
    }
}
