// ==========================================
// 销售线索轮转分配系统 - 领域类型定义
// ==========================================
// 红线: 泳道必须是双变体枚举, 不允许松散字符串
// 序列化格式: SCREAMING_SNAKE_CASE (与外部存储一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 标识符别名
// ==========================================
// 外部存储使用字符串主键, 引擎侧不做包装

pub type RepId = String;
pub type LeadId = String;
pub type EntryId = String;

// ==========================================
// 泳道 (Lane)
// ==========================================
// 红线: 两条泳道彼此独立轮转, 互不影响
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lane {
    Sub,  // 小单泳道 (< 1000 套)
    Over, // 大单泳道 (>= 1000 套)
}

// 大单泳道的套数下限 (含)
pub const OVER_LANE_MIN_UNITS: i64 = 1000;

impl Lane {
    /// 按套数判定泳道
    ///
    /// # 规则
    /// - unit_count >= 1000 → OVER
    /// - 其余 (含 None, 记 0 套) → SUB
    pub fn classify(unit_count: Option<i64>) -> Lane {
        match unit_count {
            Some(n) if n >= OVER_LANE_MIN_UNITS => Lane::Over,
            _ => Lane::Sub,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Sub => write!(f, "SUB"),
            Lane::Over => write!(f, "OVER"),
        }
    }
}

// ==========================================
// 轮转作用目标 (Rotation Target)
// ==========================================
// skip/ooo 条目声明其作用于哪条泳道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationTarget {
    Sub,
    Over,
    Both,
}

impl RotationTarget {
    /// 判断目标是否覆盖指定泳道
    pub fn includes(&self, lane: Lane) -> bool {
        match self {
            RotationTarget::Both => true,
            RotationTarget::Sub => lane == Lane::Sub,
            RotationTarget::Over => lane == Lane::Over,
        }
    }
}

impl fmt::Display for RotationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationTarget::Sub => write!(f, "SUB"),
            RotationTarget::Over => write!(f, "OVER"),
            RotationTarget::Both => write!(f, "BOTH"),
        }
    }
}

// ==========================================
// 代表状态 (Rep Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepStatus {
    Active, // 在岗
    Ooo,    // 不在岗 (长期, 双泳道生效)
}

impl fmt::Display for RepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepStatus::Active => write!(f, "ACTIVE"),
            RepStatus::Ooo => write!(f, "OOO"),
        }
    }
}

// ==========================================
// 换单分类 (Replacement Class)
// ==========================================
// 线索在换单登记中的身份, 决定其计分贡献
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplacementClass {
    None,        // 普通线索 (NL)
    Marked,      // 已标记待换 (MFR)
    Completed,   // 原单已被换 (LTR)
    Replacement, // 补发线索 (LRL)
}

impl fmt::Display for ReplacementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementClass::None => write!(f, "NONE"),
            ReplacementClass::Marked => write!(f, "MARKED"),
            ReplacementClass::Completed => write!(f, "COMPLETED"),
            ReplacementClass::Replacement => write!(f, "REPLACEMENT"),
        }
    }
}
