// ==========================================
// 销售线索轮转分配系统 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含轮转业务规则
// ==========================================

pub mod entry;
pub mod lead;
pub mod rep;
pub mod replacement;
pub mod snapshot;
pub mod types;

// 重导出领域实体
pub use entry::RotationEntry;
pub use lead::Lead;
pub use rep::SalesRep;
pub use replacement::ReplacementRecord;
pub use snapshot::{CushionState, LaneOrders, RotationSnapshot, RotationState};
