// ==========================================
// 销售线索轮转分配系统 - 核心库
// ==========================================
// 系统定位: 决策支持引擎 (外部存储负责写入)
// 红线: 引擎只读快照, 纯计算, 不做任何 I/O
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 轮转策略配置
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Lane, RepStatus, ReplacementClass, RotationTarget};

// 领域实体
pub use domain::{
    CushionState, LaneOrders, Lead, ReplacementRecord, RotationEntry, RotationSnapshot,
    RotationState, SalesRep,
};

// 配置
pub use config::RotationPolicy;

// 引擎
pub use engine::{
    AuditRow, AuditTrail, EligibilityFilter, HitLedger, LaneClassifier, ReplacementRegistry,
    RotationSequencer, ScoreReason, SequenceIter,
};

// API
pub use api::{AssignmentDecision, RotationApi, RotationError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "销售线索轮转分配系统";
