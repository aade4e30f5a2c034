// ==========================================
// 销售线索轮转分配系统 - 销售代表实体
// ==========================================
// 归属: 花名册 (外部存储), 引擎侧只读
// ==========================================

use crate::domain::types::{RepId, RepStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// SalesRep - 销售代表
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRep {
    pub id: RepId,
    pub name: String,

    // 能力参数: 可承接的物业类型
    // unrestricted=true 时 property_types 不参与判定
    #[serde(default)]
    pub property_types: Vec<String>,
    #[serde(default)]
    pub unrestricted: bool,

    // 能力参数: 套数上限 (None 表示无上限)
    #[serde(default)]
    pub max_units: Option<i64>,

    // 能力参数: 可承接大单泳道
    #[serde(default)]
    pub can_handle_oversize: bool,

    pub status: RepStatus,
}

impl SalesRep {
    /// 判断代表能力是否覆盖给定物业类型集合
    ///
    /// # 规则
    /// - unrestricted → 全覆盖
    /// - 否则要求线索的每个物业类型都在代表能力列表中
    pub fn covers_property_types(&self, types: &[String]) -> bool {
        if self.unrestricted {
            return true;
        }
        types.iter().all(|t| self.property_types.contains(t))
    }

    /// 判断套数上限是否允许承接
    pub fn accepts_unit_count(&self, unit_count: Option<i64>) -> bool {
        match self.max_units {
            Some(cap) => unit_count.unwrap_or(0) <= cap,
            None => true,
        }
    }
}
