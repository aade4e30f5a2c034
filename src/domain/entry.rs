// ==========================================
// 销售线索轮转分配系统 - 轮转条目
// ==========================================
// 红线: 条目只追加不修改; 删除条目的效果必须是
//       其原贡献的精确代数逆 (由纯折叠计分保证)
// 设计: 每种条目一个变体, 只携带自身字段,
//       以模式匹配分发, 不做可选字段探测
// ==========================================

use crate::domain::types::{EntryId, LeadId, RepId, RotationTarget};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RotationEntry - 轮转条目 (追加式日志)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entry_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationEntry {
    /// 线索分配条目: 计分贡献由换单分类决定
    Lead {
        id: EntryId,
        rep_id: RepId,
        lead_id: LeadId,
        date: NaiveDate,
    },

    /// 手工跳过条目: 对目标泳道 +1, 用于人工校正位置
    Skip {
        id: EntryId,
        rep_id: RepId,
        target: RotationTarget,
        date: NaiveDate,
    },

    /// 不在岗条目: 不计分, 只影响资格过滤
    Ooo {
        id: EntryId,
        rep_id: RepId,
        target: RotationTarget,
        starts_on: NaiveDate,
        #[serde(default)]
        ends_on: Option<NaiveDate>,
    },

    /// 顺位标记条目: 纯信息, 不计分
    Next {
        id: EntryId,
        rep_id: RepId,
        date: NaiveDate,
    },
}

impl RotationEntry {
    pub fn id(&self) -> &str {
        match self {
            RotationEntry::Lead { id, .. }
            | RotationEntry::Skip { id, .. }
            | RotationEntry::Ooo { id, .. }
            | RotationEntry::Next { id, .. } => id,
        }
    }

    pub fn rep_id(&self) -> &str {
        match self {
            RotationEntry::Lead { rep_id, .. }
            | RotationEntry::Skip { rep_id, .. }
            | RotationEntry::Ooo { rep_id, .. }
            | RotationEntry::Next { rep_id, .. } => rep_id,
        }
    }

    /// 生成条目 id (外部存储未提供时使用)
    pub fn generate_id() -> EntryId {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serde_tagged() {
        let entry = RotationEntry::Skip {
            id: "E1".to_string(),
            rep_id: "A".to_string(),
            target: RotationTarget::Both,
            date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entry_type\":\"SKIP\""));
        assert!(json.contains("\"target\":\"BOTH\""));

        let back: RotationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), "E1");
        assert_eq!(back.rep_id(), "A");
    }

    #[test]
    fn test_generate_id_unique_v4() {
        let first = RotationEntry::generate_id();
        let second = RotationEntry::generate_id();
        assert_ne!(first, second);
        // 生成的 id 必须是合法的 v4 UUID
        let parsed = uuid::Uuid::parse_str(&first).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
}
