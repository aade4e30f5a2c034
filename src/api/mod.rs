// ==========================================
// 销售线索轮转分配系统 - API 层
// ==========================================
// 职责: 面向调用方的业务接口与错误类型
// ==========================================

pub mod error;
pub mod rotation_api;

pub use error::RotationError;
pub use rotation_api::{AssignmentDecision, RotationApi};
