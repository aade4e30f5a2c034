// ==========================================
// 销售线索轮转分配系统 - 决策快照
// ==========================================
// 职责: 一次决策所需的全部只读输入
// 红线: 引擎不持有可变共享状态, 同一快照重复计算结果必须一致
//       畸形输入 (悬空引用) 必须在校验时响亮失败, 不允许静默丢弃
// ==========================================

use crate::api::error::RotationError;
use crate::config::RotationPolicy;
use crate::domain::entry::RotationEntry;
use crate::domain::lead::Lead;
use crate::domain::rep::SalesRep;
use crate::domain::types::{Lane, LeadId, RepId};
use crate::engine::replacement::ReplacementRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ==========================================
// CushionState - 缓冲状态 (外部供给, 引擎只消费效果)
// ==========================================
// damping: 外部配置的阻尼因子, 引擎透传不解释
// remaining: 剩余可吸收的轮次数, 为 0 时恢复正常计分
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CushionState {
    pub damping: i64,
    pub remaining: u32,
}

// ==========================================
// LaneOrders - 双泳道基准顺序
// ==========================================
// 管理员配置的默认循环顺序, 命中调整之前的排序基准
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaneOrders {
    #[serde(default)]
    pub sub: Vec<RepId>,
    #[serde(default)]
    pub over: Vec<RepId>,
}

impl LaneOrders {
    pub fn for_lane(&self, lane: Lane) -> &[RepId] {
        match lane {
            Lane::Sub => &self.sub,
            Lane::Over => &self.over,
        }
    }
}

// ==========================================
// RotationState - 轮转派生视图
// ==========================================
// 红线: 只是 HitLedger + 基准顺序的重算结果, 永不独立落库
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationState {
    pub lane: Lane,
    pub base_order: Vec<RepId>,
    pub next_rep: Option<RepId>,
}

// ==========================================
// RotationSnapshot - 决策快照
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotationSnapshot {
    pub reps: Vec<SalesRep>,

    // 以线索 id 为键
    #[serde(default)]
    pub leads: HashMap<LeadId, Lead>,

    // 追加式条目日志, 保持写入顺序
    #[serde(default)]
    pub entries: Vec<RotationEntry>,

    #[serde(default)]
    pub replacements: ReplacementRegistry,

    #[serde(default)]
    pub base_order: LaneOrders,

    // 每代表缓冲状态 (外部供给)
    #[serde(default)]
    pub cushions: HashMap<RepId, CushionState>,

    #[serde(default)]
    pub policy: RotationPolicy,
}

impl RotationSnapshot {
    pub fn rep(&self, rep_id: &str) -> Option<&SalesRep> {
        self.reps.iter().find(|r| r.id == rep_id)
    }

    pub fn lead(&self, lead_id: &str) -> Option<&Lead> {
        self.leads.get(lead_id)
    }

    /// 校验快照一致性
    ///
    /// # 检查项
    /// - 基准顺序内代表 id 每泳道至多出现一次
    /// - 基准顺序 / 条目 / 缓冲引用的代表必须在花名册内
    /// - Lead 条目引用的线索必须在快照内
    pub fn validate(&self) -> Result<(), RotationError> {
        let roster: HashSet<&str> = self.reps.iter().map(|r| r.id.as_str()).collect();

        for lane in [Lane::Sub, Lane::Over] {
            let order = self.base_order.for_lane(lane);
            let mut seen: HashSet<&str> = HashSet::new();
            for rep_id in order {
                if !roster.contains(rep_id.as_str()) {
                    return Err(RotationError::UnknownRep {
                        rep_id: rep_id.clone(),
                    });
                }
                if !seen.insert(rep_id.as_str()) {
                    return Err(RotationError::DuplicateRepInOrder {
                        rep_id: rep_id.clone(),
                        lane,
                    });
                }
            }
        }

        for entry in &self.entries {
            if !roster.contains(entry.rep_id()) {
                return Err(RotationError::UnknownRep {
                    rep_id: entry.rep_id().to_string(),
                });
            }
            if let RotationEntry::Lead { lead_id, .. } = entry {
                if !self.leads.contains_key(lead_id) {
                    return Err(RotationError::UnknownLead {
                        lead_id: lead_id.clone(),
                    });
                }
            }
        }

        for rep_id in self.cushions.keys() {
            if !roster.contains(rep_id.as_str()) {
                return Err(RotationError::UnknownRep {
                    rep_id: rep_id.clone(),
                });
            }
        }

        Ok(())
    }
}
