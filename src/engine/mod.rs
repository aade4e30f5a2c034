// ==========================================
// 销售线索轮转分配系统 - 引擎层
// ==========================================
// 职责: 实现轮转业务规则, 全部为只读快照上的纯计算
// 红线: 引擎不做 I/O, 所有规则必须输出 reason
// ==========================================

pub mod audit;
pub mod eligibility;
pub mod lane;
pub mod ledger;
pub mod replacement;
pub mod scoring;
pub mod sequencer;

// 重导出核心引擎
pub use audit::{AuditRow, AuditTrail};
pub use eligibility::EligibilityFilter;
pub use lane::LaneClassifier;
pub use ledger::HitLedger;
pub use replacement::ReplacementRegistry;
pub use scoring::{entry_contribution, Contribution, ScoreReason};
pub use sequencer::{RotationSequencer, SequenceIter};
