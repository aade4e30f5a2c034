// ==========================================
// 销售线索轮转分配系统 - API层错误类型
// ==========================================
// 职责: 定义面向调用方的错误类型
// 红线: 全部为本地校验失败, 不自动重试;
//       每个错误必须携带可解释的显式字段
// ==========================================

use crate::domain::types::Lane;
use thiserror::Error;

/// 轮转引擎错误类型
///
/// 引擎对良构输入是全函数, 不存在内部致命错误;
/// 以下错误均表示操作顺序非法或输入违反调用方契约
#[derive(Error, Debug)]
pub enum RotationError {
    // ==========================================
    // 换单生命周期错误
    // ==========================================
    /// 线索已存在换单记录, 不允许重复标记
    #[error("重复标记换单: lead_id={lead_id}")]
    DuplicateMark { lead_id: String },

    /// 线索不存在换单记录
    #[error("线索未标记换单: lead_id={lead_id}")]
    NotMarked { lead_id: String },

    /// 换单已完成, 不允许再次完成
    #[error("换单已完成: lead_id={lead_id}")]
    AlreadyReplaced { lead_id: String },

    /// 已完成的换单不允许撤销标记 (应走取消补发)
    #[error("已完成换单不可撤销标记: lead_id={lead_id}")]
    CannotUnmarkCompleted { lead_id: String },

    /// 换单尚未完成, 无补发可取消
    #[error("换单尚未完成, 无补发可取消: lead_id={lead_id}")]
    NotReplacedYet { lead_id: String },

    // ==========================================
    // 轮转决策错误
    // ==========================================
    /// 过滤后无可用代表, 泳道关闭 (区别于引擎崩溃)
    #[error("泳道关闭, 无可用代表: lane={lane}")]
    LaneClosed { lane: Lane },

    /// 泳道未配置基准顺序 (区别于泳道关闭)
    #[error("泳道基准顺序为空: lane={lane}")]
    EmptyBaseOrder { lane: Lane },

    // ==========================================
    // 领域校验错误
    // ==========================================
    /// 套数修改跨越泳道边界, 直接拒绝, 不做静默纠正
    #[error("套数修改跨越泳道边界: lead_id={lead_id}, lane={lane}, attempted={attempted_lane}")]
    InvalidLaneCrossing {
        lead_id: String,
        lane: Lane,
        attempted_lane: Lane,
    },

    // ==========================================
    // 调用方契约违反 (畸形输入, 响亮失败)
    // ==========================================
    /// 条目引用了快照中不存在的线索
    #[error("未知线索: lead_id={lead_id}")]
    UnknownLead { lead_id: String },

    /// 引用了花名册中不存在的代表
    #[error("未知代表: rep_id={rep_id}")]
    UnknownRep { rep_id: String },

    /// 同一代表在同一泳道基准顺序中出现多次
    #[error("基准顺序中代表重复: rep_id={rep_id}, lane={lane}")]
    DuplicateRepInOrder { rep_id: String, lane: Lane },
}
