// ==========================================
// 销售线索轮转分配系统 - 泳道判定引擎
// ==========================================
// 职责: 按套数判定泳道 + 套数修改的边界校验
// 红线: 纯函数, 无状态, 无副作用
// ==========================================

use crate::api::error::RotationError;
use crate::domain::lead::Lead;
use crate::domain::types::Lane;

// ==========================================
// LaneClassifier - 泳道判定 (纯函数工具类)
// ==========================================
pub struct LaneClassifier;

impl LaneClassifier {
    /// 按套数判定泳道
    ///
    /// # 规则
    /// - unit_count >= 1000 → OVER
    /// - 其余 (含 None, 记 0 套) → SUB
    pub fn classify(unit_count: Option<i64>) -> Lane {
        Lane::classify(unit_count)
    }

    /// 校验套数修改是否跨越泳道边界
    ///
    /// # 返回
    /// - Ok(()): 修改后仍在原泳道
    /// - Err(InvalidLaneCrossing): 跨边界, 必须拒绝
    pub fn check_unit_edit(lead: &Lead, new_unit_count: Option<i64>) -> Result<(), RotationError> {
        let attempted = Lane::classify(new_unit_count);
        if attempted != lead.lane {
            return Err(RotationError::InvalidLaneCrossing {
                lead_id: lead.id.clone(),
                lane: lead.lane,
                attempted_lane: attempted,
            });
        }
        Ok(())
    }
}
