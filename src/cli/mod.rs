//! 命令行层：参数定义、日志初始化与退出码映射

pub mod key_diff;
pub mod messages;
pub mod update_locals;

use tracing_subscriber::fmt::SubscriberBuilder;

/// 初始化控制台日志：输出到标准输出，不带时间戳与模块名
pub fn init_tracing(level: tracing::Level) {
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init();
}
