// ==========================================
// 销售线索轮转分配系统 - 命中账本引擎
// ==========================================
// 职责: 从条目流 + 换单分类折叠出每代表每泳道的净命中数
// 红线: 纯折叠, 不维护任何隐式累加计数器;
//       删除条目 = 从快照条目集中移除, 贡献自然逆转
// ==========================================

use crate::api::error::RotationError;
use crate::domain::snapshot::RotationSnapshot;
use crate::domain::types::{Lane, RepId};
use crate::engine::scoring::entry_contribution;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// HitLedger - 命中账本 (无状态引擎)
// ==========================================
pub struct HitLedger;

impl HitLedger {
    /// 计算单个代表在指定泳道的净命中数
    ///
    /// 无条目的代表净命中数为 0; 负数合法, 由顺位引擎消化
    pub fn net_hits(
        snapshot: &RotationSnapshot,
        rep_id: &str,
        lane: Lane,
    ) -> Result<i64, RotationError> {
        let mut total = 0;
        for entry in &snapshot.entries {
            if entry.rep_id() != rep_id {
                continue;
            }
            let contribution = entry_contribution(
                entry,
                lane,
                &snapshot.leads,
                &snapshot.replacements,
                &snapshot.policy,
            )?;
            total += contribution.delta;
        }
        Ok(total)
    }

    /// 计算指定泳道的全量净命中数
    ///
    /// # 返回
    /// HashMap<代表 id, 净命中数>, 仅含出现过条目的代表;
    /// 未出现的代表按 0 处理由调用方保证
    #[instrument(skip(snapshot), fields(%lane))]
    pub fn net_hits_for_lane(
        snapshot: &RotationSnapshot,
        lane: Lane,
    ) -> Result<HashMap<RepId, i64>, RotationError> {
        let mut totals: HashMap<RepId, i64> = HashMap::new();
        for entry in &snapshot.entries {
            let contribution = entry_contribution(
                entry,
                lane,
                &snapshot.leads,
                &snapshot.replacements,
                &snapshot.policy,
            )?;
            *totals.entry(contribution.rep_id).or_insert(0) += contribution.delta;
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::RotationEntry;
    use crate::domain::lead::Lead;
    use crate::domain::rep::SalesRep;
    use crate::domain::types::{RepStatus, RotationTarget};
    use chrono::{NaiveDate, Utc};

    fn rep(id: &str) -> SalesRep {
        SalesRep {
            id: id.to_string(),
            name: id.to_string(),
            property_types: vec![],
            unrestricted: true,
            max_units: None,
            can_handle_oversize: true,
            status: RepStatus::Active,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    fn snapshot_with(entries: Vec<RotationEntry>, leads: Vec<Lead>) -> RotationSnapshot {
        let mut snapshot = RotationSnapshot {
            reps: vec![rep("A"), rep("B")],
            entries,
            ..Default::default()
        };
        for lead in leads {
            snapshot.leads.insert(lead.id.clone(), lead);
        }
        snapshot
    }

    #[test]
    fn test_no_entries_zero() {
        let snapshot = snapshot_with(vec![], vec![]);
        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Sub).unwrap(), 0);
    }

    #[test]
    fn test_fold_over_entries() {
        let entries = vec![
            RotationEntry::Lead {
                id: "E1".to_string(),
                rep_id: "A".to_string(),
                lead_id: "L1".to_string(),
                date: date(),
            },
            RotationEntry::Skip {
                id: "E2".to_string(),
                rep_id: "A".to_string(),
                target: RotationTarget::Both,
                date: date(),
            },
            RotationEntry::Ooo {
                id: "E3".to_string(),
                rep_id: "A".to_string(),
                target: RotationTarget::Both,
                starts_on: date(),
                ends_on: None,
            },
        ];
        let leads = vec![Lead::new("L1", Some(100), vec![], Some("A".to_string()))];
        let snapshot = snapshot_with(entries, leads);

        // lead +1, skip +1, ooo 0
        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Sub).unwrap(), 2);
        // 大单泳道只收到 skip(BOTH) 的 +1
        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Over).unwrap(), 1);
    }

    #[test]
    fn test_marked_lead_negative_total() {
        let entries = vec![RotationEntry::Lead {
            id: "E1".to_string(),
            rep_id: "A".to_string(),
            lead_id: "L1".to_string(),
            date: date(),
        }];
        let leads = vec![Lead::new("L1", Some(100), vec![], Some("A".to_string()))];
        let mut snapshot = snapshot_with(entries, leads);
        snapshot
            .replacements
            .mark("L1", Lane::Sub, "A", "ACC-1", Utc::now())
            .unwrap();

        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Sub).unwrap(), -1);
    }

    #[test]
    fn test_entry_removal_is_exact_inverse() {
        let entries = vec![
            RotationEntry::Skip {
                id: "E1".to_string(),
                rep_id: "A".to_string(),
                target: RotationTarget::Sub,
                date: date(),
            },
            RotationEntry::Skip {
                id: "E2".to_string(),
                rep_id: "A".to_string(),
                target: RotationTarget::Sub,
                date: date(),
            },
        ];
        let mut snapshot = snapshot_with(entries, vec![]);
        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Sub).unwrap(), 2);

        snapshot.entries.retain(|e| e.id() != "E2");
        assert_eq!(HitLedger::net_hits(&snapshot, "A", Lane::Sub).unwrap(), 1);
    }

    #[test]
    fn test_lane_totals() {
        let entries = vec![
            RotationEntry::Skip {
                id: "E1".to_string(),
                rep_id: "A".to_string(),
                target: RotationTarget::Sub,
                date: date(),
            },
            RotationEntry::Skip {
                id: "E2".to_string(),
                rep_id: "B".to_string(),
                target: RotationTarget::Over,
                date: date(),
            },
        ];
        let snapshot = snapshot_with(entries, vec![]);
        let totals = HitLedger::net_hits_for_lane(&snapshot, Lane::Sub).unwrap();
        assert_eq!(totals.get("A"), Some(&1));
        assert_eq!(totals.get("B"), Some(&0));
    }
}
