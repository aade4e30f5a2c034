// ==========================================
// 销售线索轮转分配系统 - 轮转决策接口
// ==========================================
// 职责: 面向调用方的决策门面, 组合资格过滤 + 账本 + 顺位引擎
// 红线: 纯投影, 同一快照重复调用结果一致;
//       "算出下一位" 与 "落库分配" 必须由调用方作为
//       一个原子单元串行化 (每次决策至多一次分配)
// ==========================================

use crate::api::error::RotationError;
use crate::domain::lead::Lead;
use crate::domain::snapshot::{RotationSnapshot, RotationState};
use crate::domain::types::{Lane, RepId};
use crate::engine::audit::{AuditRow, AuditTrail};
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::ledger::HitLedger;
use crate::engine::sequencer::RotationSequencer;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// AssignmentDecision - 分配决策
// ==========================================
// absorbed_cushions: 本次决策中被缓冲吸收的轮次 (按吸收顺序),
// 由调用方与分配记录一并原子落库 (每个条目递减一次 remaining)
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentDecision {
    pub lane: Lane,
    pub rep_id: RepId,
    pub absorbed_cushions: Vec<RepId>,
}

// ==========================================
// RotationApi - 轮转决策门面
// ==========================================
#[derive(Debug)]
pub struct RotationApi<'a> {
    snapshot: &'a RotationSnapshot,
    today: NaiveDate,
}

impl<'a> RotationApi<'a> {
    /// 绑定快照, 构造时即校验一致性 (畸形输入响亮失败)
    pub fn new(snapshot: &'a RotationSnapshot, today: NaiveDate) -> Result<Self, RotationError> {
        snapshot.validate()?;
        Ok(Self { snapshot, today })
    }

    /// 查询泳道下一位代表
    ///
    /// # 错误
    /// - EmptyBaseOrder: 泳道未配置基准顺序
    /// - LaneClosed: 资格过滤后无人可用
    #[instrument(skip(self), fields(%lane))]
    pub fn next_in_lane(&self, lane: Lane) -> Result<RepId, RotationError> {
        let order = self.snapshot.base_order.for_lane(lane);
        if order.is_empty() {
            return Err(RotationError::EmptyBaseOrder { lane });
        }

        let eligible = EligibilityFilter::filter_for_lane(self.snapshot, lane, self.today)?;
        if eligible.is_empty() {
            return Err(RotationError::LaneClosed { lane });
        }

        let net_hits = HitLedger::net_hits_for_lane(self.snapshot, lane)?;
        RotationSequencer::next_rep(&eligible, &net_hits)
            .ok_or(RotationError::LaneClosed { lane })
    }

    /// 查询代表在指定泳道的净命中数
    pub fn net_hits(&self, rep_id: &str, lane: Lane) -> Result<i64, RotationError> {
        if self.snapshot.rep(rep_id).is_none() {
            return Err(RotationError::UnknownRep {
                rep_id: rep_id.to_string(),
            });
        }
        HitLedger::net_hits(self.snapshot, rep_id, lane)
    }

    /// 查询泳道顺位序列前 count 位 (展示用, 不做资格过滤)
    ///
    /// 空基准顺序 → 空序列 (区别于 LaneClosed)
    pub fn sequence(&self, lane: Lane, count: usize) -> Result<Vec<RepId>, RotationError> {
        let order = self.snapshot.base_order.for_lane(lane);
        let net_hits = HitLedger::net_hits_for_lane(self.snapshot, lane)?;
        Ok(RotationSequencer::sequence(order, &net_hits, count))
    }

    /// 泳道审计投影: 逐条目解释计分贡献
    pub fn audit_lane(&self, lane: Lane) -> Result<Vec<AuditRow>, RotationError> {
        AuditTrail::audit_lane(self.snapshot, lane)
    }

    /// 轮转派生视图 (基准顺序 + 下一位), 永不落库
    pub fn rotation_state(&self, lane: Lane) -> Result<RotationState, RotationError> {
        let next_rep = match self.next_in_lane(lane) {
            Ok(rep_id) => Some(rep_id),
            Err(RotationError::LaneClosed { .. }) | Err(RotationError::EmptyBaseOrder { .. }) => {
                None
            }
            Err(err) => return Err(err),
        };
        Ok(RotationState {
            lane,
            base_order: self.snapshot.base_order.for_lane(lane).to_vec(),
            next_rep,
        })
    }

    /// 为具体线索规划分配决策
    ///
    /// # 流程
    /// 1. 线索级资格过滤 (能力 / 套数上限 / 大单能力 / OOO)
    /// 2. 顺位引擎在过滤后的子集上排位
    /// 3. 缓冲优先求值: 顺位命中仍有 remaining 的代表时,
    ///    该轮次被吸收 (不分配线索, 不记命中), 继续向后找;
    ///    吸收结果随决策返回, 由调用方原子落库
    #[instrument(skip(self, lead), fields(lead_id = %lead.id, lane = %lead.lane))]
    pub fn plan_assignment(&self, lead: &Lead) -> Result<AssignmentDecision, RotationError> {
        let lane = lead.lane;
        let order = self.snapshot.base_order.for_lane(lane);
        if order.is_empty() {
            return Err(RotationError::EmptyBaseOrder { lane });
        }

        let eligible = EligibilityFilter::filter_for_lead(self.snapshot, lead, self.today)?;
        if eligible.is_empty() {
            return Err(RotationError::LaneClosed { lane });
        }

        let net_hits = HitLedger::net_hits_for_lane(self.snapshot, lane)?;

        // 本次决策内的缓冲余量视图 (快照只读, 不回写)
        let mut remaining: HashMap<&str, u32> = self
            .snapshot
            .cushions
            .iter()
            .map(|(rep_id, cushion)| (rep_id.as_str(), cushion.remaining))
            .collect();
        let mut absorbed = Vec::new();

        for rep_id in RotationSequencer::iter(&eligible, &net_hits) {
            if let Some(count) = remaining.get_mut(rep_id.as_str()) {
                if *count > 0 {
                    *count -= 1;
                    absorbed.push(rep_id.clone());
                    debug!(rep_id = %rep_id, "缓冲吸收本轮次");
                    continue;
                }
            }
            return Ok(AssignmentDecision {
                lane,
                rep_id: rep_id.clone(),
                absorbed_cushions: absorbed,
            });
        }

        // 非空子集的顺位迭代器不枯竭, 仅空子集会走到这里
        Err(RotationError::LaneClosed { lane })
    }
}
