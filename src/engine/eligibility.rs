// ==========================================
// 销售线索轮转分配系统 - 资格过滤引擎
// ==========================================
// 职责: 把泳道基准顺序收窄为可合法承接的代表子集
// 红线: 只过滤不排序, 输出保持基准顺序;
//       过滤为空 = 泳道关闭, 必须与引擎崩溃区分
// ==========================================

use crate::api::error::RotationError;
use crate::domain::entry::RotationEntry;
use crate::domain::lead::Lead;
use crate::domain::snapshot::RotationSnapshot;
use crate::domain::types::{Lane, RepId, RepStatus};
use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// EligibilityFilter - 资格过滤引擎 (无状态)
// ==========================================
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// 泳道级过滤 (无具体线索)
    ///
    /// # 检查项
    /// - 代表状态为在岗 (长期 OOO 双泳道生效)
    /// - 无覆盖本泳道的生效 OOO 条目
    /// - 大单泳道要求大单承接能力
    pub fn filter_for_lane(
        snapshot: &RotationSnapshot,
        lane: Lane,
        today: NaiveDate,
    ) -> Result<Vec<RepId>, RotationError> {
        let mut eligible = Vec::new();
        for rep_id in snapshot.base_order.for_lane(lane) {
            let rep = snapshot
                .rep(rep_id)
                .ok_or_else(|| RotationError::UnknownRep {
                    rep_id: rep_id.clone(),
                })?;

            if rep.status == RepStatus::Ooo {
                continue;
            }
            if Self::has_active_ooo(snapshot, rep_id, lane, today) {
                continue;
            }
            if lane == Lane::Over && !rep.can_handle_oversize {
                continue;
            }
            eligible.push(rep_id.clone());
        }
        Ok(eligible)
    }

    /// 线索级过滤
    ///
    /// 在泳道级检查之上追加:
    /// - 能力覆盖线索的物业类型 (或声明不设限)
    /// - 套数上限为空或 >= 线索套数
    pub fn filter_for_lead(
        snapshot: &RotationSnapshot,
        lead: &Lead,
        today: NaiveDate,
    ) -> Result<Vec<RepId>, RotationError> {
        let lane_eligible = Self::filter_for_lane(snapshot, lead.lane, today)?;

        let mut eligible = Vec::new();
        for rep_id in lane_eligible {
            // filter_for_lane 已校验存在性
            let rep = snapshot
                .rep(&rep_id)
                .ok_or_else(|| RotationError::UnknownRep {
                    rep_id: rep_id.clone(),
                })?;

            if !rep.covers_property_types(&lead.property_types) {
                continue;
            }
            if !rep.accepts_unit_count(lead.unit_count) {
                continue;
            }
            eligible.push(rep_id);
        }

        debug!(
            lead_id = %lead.id,
            lane = %lead.lane,
            eligible = eligible.len(),
            "线索资格过滤完成"
        );
        Ok(eligible)
    }

    /// 判断代表在指定日期是否有覆盖本泳道的生效 OOO 条目
    fn has_active_ooo(
        snapshot: &RotationSnapshot,
        rep_id: &str,
        lane: Lane,
        today: NaiveDate,
    ) -> bool {
        snapshot.entries.iter().any(|entry| match entry {
            RotationEntry::Ooo {
                rep_id: entry_rep,
                target,
                starts_on,
                ends_on,
                ..
            } => {
                entry_rep == rep_id
                    && target.includes(lane)
                    && *starts_on <= today
                    && ends_on.map_or(true, |end| today <= end)
            }
            _ => false,
        })
    }
}
