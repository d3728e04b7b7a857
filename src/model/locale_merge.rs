//! 语言文件合并：以参考文件的键集合与键顺序为准

use crate::model::data_core::{is_truthy, JsonDocument};

/// 一次合并的统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 参考文件中的键数
    pub reference_keys: usize,
    /// 目标文件原有的键数
    pub existing_keys: usize,
    /// 目标文件中缺失、从参考文件补上的键
    pub added: Vec<String>,
    /// 目标文件中存在但为空、用参考值填充的键
    pub filled_empty: Vec<String>,
    /// 保留原有翻译的键数
    pub kept: usize,
    /// 目标文件中有而参考文件中没有、被丢弃的键
    pub dropped: Vec<String>,
    /// 合并后的键数
    pub final_keys: usize,
}

impl MergeReport {
    /// 合并结果的键数与参考文件不一致（按算法不会发生）
    pub fn count_mismatch(&self) -> bool {
        self.final_keys != self.reference_keys
    }

    /// 合并是否对目标内容没有任何改动
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.filled_empty.is_empty() && self.dropped.is_empty()
    }
}

/// 按参考文件 `reference` 的顺序合并目标文件 `target`
///
/// 目标中非空的翻译原样保留，缺失或为空的键取参考值；
/// 只在目标中出现的键不进入结果，参考文件定义完整的键集合。
pub fn merge_locale(reference: &JsonDocument, target: &JsonDocument) -> (JsonDocument, MergeReport) {
    let mut merged = JsonDocument::new();
    let mut report = MergeReport {
        reference_keys: reference.len(),
        existing_keys: target.len(),
        ..MergeReport::default()
    };

    for (key, ref_value) in reference {
        match target.get(key) {
            Some(existing) if is_truthy(existing) => {
                merged.insert(key.clone(), existing.clone());
                report.kept += 1;
            }
            Some(_) => {
                merged.insert(key.clone(), ref_value.clone());
                report.filled_empty.push(key.clone());
            }
            None => {
                merged.insert(key.clone(), ref_value.clone());
                report.added.push(key.clone());
            }
        }
    }

    report.dropped = target
        .keys()
        .filter(|k| !reference.contains_key(k.as_str()))
        .cloned()
        .collect();
    report.final_keys = merged.len();
    (merged, report)
}
