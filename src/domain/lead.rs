// ==========================================
// 销售线索轮转分配系统 - 线索实体
// ==========================================
// 红线: 泳道在创建时一次性判定, 此后不可变更
//       跨越 1000 套边界的套数修改必须拒绝, 不允许静默纠正
// ==========================================

use crate::api::error::RotationError;
use crate::domain::types::{Lane, LeadId, RepId};
use serde::{Deserialize, Serialize};

// ==========================================
// Lead - 销售线索
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,

    // 套数, None 记 0 套处理
    pub unit_count: Option<i64>,

    #[serde(default)]
    pub property_types: Vec<String>,

    // 当前被分配到的代表
    #[serde(default)]
    pub assigned_rep: Option<RepId>,

    // 创建时按套数判定, 永不变更
    pub lane: Lane,
}

impl Lead {
    /// 创建线索, 泳道在此一次性判定
    pub fn new(
        id: impl Into<LeadId>,
        unit_count: Option<i64>,
        property_types: Vec<String>,
        assigned_rep: Option<RepId>,
    ) -> Self {
        Self {
            id: id.into(),
            unit_count,
            property_types,
            assigned_rep,
            lane: Lane::classify(unit_count),
        }
    }

    /// 修改套数
    ///
    /// # 规则
    /// - 新套数判定出的泳道必须与现有泳道一致
    /// - 跨边界修改返回 InvalidLaneCrossing, 泳道与套数均不变更
    pub fn set_unit_count(&mut self, unit_count: Option<i64>) -> Result<(), RotationError> {
        let new_lane = Lane::classify(unit_count);
        if new_lane != self.lane {
            return Err(RotationError::InvalidLaneCrossing {
                lead_id: self.id.clone(),
                lane: self.lane,
                attempted_lane: new_lane,
            });
        }
        self.unit_count = unit_count;
        Ok(())
    }
}
