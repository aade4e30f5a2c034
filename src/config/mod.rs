// ==========================================
// 销售线索轮转分配系统 - 配置层
// ==========================================
// 职责: 全局轮转策略配置
// 红线: LRL 计零是全局开关, 不是每条目的选择
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RotationPolicy - 轮转策略配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationPolicy {
    // 补发线索 (LRL) 是否计 0 分; 关闭时按普通线索 +1
    pub lrl_counts_as_zero: bool,

    // 顺位序列展示窗口默认长度 (仅展示用, 不影响正确性)
    pub default_sequence_window: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            lrl_counts_as_zero: true,
            default_sequence_window: 12,
        }
    }
}
