// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 引擎是同步纯计算, 不输出线程/行号噪音, 采用紧凑格式
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (CLI / 调用方进程)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器
///   未设置时默认只放行本 crate 的 info 及以上
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lead_rotation_aps=info"));

    fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 放行本 crate 的 debug 级别, 输出走测试捕获器;
/// 可重复调用, 后续调用为空操作
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("lead_rotation_aps=debug"))
        .with_test_writer()
        .try_init();
}
