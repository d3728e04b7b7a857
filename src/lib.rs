//! JSON本地化工具库
//!
//! 提供两个命令行工具的核心逻辑：
//! - json-key-diff：比较两个JSON文件的键集合
//! - update-locals：以参考语言文件为准同步各语言文件

pub mod cli;
pub mod config;
pub mod model;
pub mod utils;

// 重新导出主要类型
pub use config::{LanguageCode, LocaleConfig};
pub use model::data_core::{AppError, JsonDocument};
pub use model::key_diff::{missing_keys, DiffReport};
pub use model::locale_merge::{merge_locale, MergeReport};
pub use model::locale_sync::{update_locale_file, SyncReport, TargetState};
