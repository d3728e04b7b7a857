//! 语言文件同步：读取参考文件与目标文件、合并、回写

use std::path::{Path, PathBuf};

use crate::config::{LanguageCode, LocaleConfig, REFERENCE_LANG};
use crate::model::data_core::{AppError, JsonDocument};
use crate::model::locale_merge::{merge_locale, MergeReport};
use crate::utils::fs::{read_json_object, write_json_file};

/// 目标文件的读取情况
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetState {
    /// 成功读取
    Loaded,
    /// 文件不存在，将新建
    Missing,
    /// 文件存在但无法读取或解析，按空字典重建
    Corrupt(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// 只合并并报告，不写文件
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub lang: LanguageCode,
    pub target_path: PathBuf,
    pub target_state: TargetState,
    pub merge: MergeReport,
    pub written: bool,
}

/// 读取目标语言文件；不存在或损坏时返回空字典
pub fn load_target(path: &Path) -> (JsonDocument, TargetState) {
    match read_json_object(path) {
        Ok(doc) => (doc, TargetState::Loaded),
        Err(AppError::NotFound(_)) => {
            tracing::warn!("警告: 未找到目标文件 {}。创建一个新的。", path.display());
            (JsonDocument::new(), TargetState::Missing)
        }
        Err(e) => {
            tracing::warn!("警告: 无法读取 {}, 从空字典开始。错误: {}", path.display(), e);
            (JsonDocument::new(), TargetState::Corrupt(e.to_string()))
        }
    }
}

/// 以参考语言文件为准更新单个语言文件
///
/// 参考文件读取失败时直接返回错误，不触碰目标文件；
/// 写入只在内存合并完成后进行。
pub fn update_locale_file(
    config: &LocaleConfig,
    lang: &LanguageCode,
    options: SyncOptions,
) -> Result<SyncReport, AppError> {
    let reference_path = config.reference_path();
    let target_path = config.locale_path(lang);

    tracing::info!("处理语言: {}", lang);
    tracing::info!("参考文件: {}", reference_path.display());
    tracing::info!("目标文件: {}", target_path.display());

    let reference = read_json_object(&reference_path)?;
    tracing::info!("成功读取 {} 个键从 {}.json", reference.len(), REFERENCE_LANG);

    let (target, target_state) = load_target(&target_path);
    if target_state == TargetState::Loaded {
        tracing::info!("成功读取 {} 个键从 {}.json", target.len(), lang);
    }

    let (merged, merge) = merge_locale(&reference, &target);
    for key in &merge.filled_empty {
        tracing::info!("  - 键 '{}' 存在但为空，用参考值填充。", key);
    }
    if merge.is_unchanged() {
        tracing::info!("{}.json 已与参考文件一致，无需补充。", lang);
    }
    if !merge.dropped.is_empty() {
        tracing::info!("  - 丢弃 {} 个参考文件中不存在的键。", merge.dropped.len());
    }

    let mut report = SyncReport {
        lang: lang.clone(),
        target_path,
        target_state,
        merge,
        written: false,
    };

    if options.dry_run {
        tracing::info!(
            "试运行: 将添加 {} 个缺失的键，未写入 {}。",
            report.merge.added.len(),
            report.target_path.display()
        );
        return Ok(report);
    }

    write_json_file(&report.target_path, &merged)?;
    report.written = true;
    tracing::info!(
        "成功更新 {}。添加了 {} 个缺失的键。",
        report.target_path.display(),
        report.merge.added.len()
    );
    if report.merge.count_mismatch() {
        tracing::warn!(
            "  - 警告: 最终键数 ({}) 与 {}.json ({}) 不同。",
            report.merge.final_keys,
            REFERENCE_LANG,
            report.merge.reference_keys
        );
    }
    Ok(report)
}
