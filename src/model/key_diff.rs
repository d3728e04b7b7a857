//! 键差异：找出在一个JSON对象中存在、在另一个中缺失的键

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::model::data_core::JsonDocument;

pub const DIFF_MISSING_IN_FIRST: &str =
    "The following keys exist in the second file but are missing in the first file:";
pub const DIFF_MISSING_IN_SECOND: &str =
    "The following keys exist in the first file but are missing in the second file:";
pub const DIFF_ALL_PRESENT: &str = "All keys in the second file are present in the first file.";
pub const DIFF_ALL_PRESENT_REVERSE: &str =
    "All keys in the first file are present in the second file.";

/// 返回存在于 target 但不存在于 source 的键（只比较键，不比较值）
pub fn missing_keys(source: &JsonDocument, target: &JsonDocument) -> BTreeSet<String> {
    target
        .keys()
        .filter(|k| !source.contains_key(k.as_str()))
        .cloned()
        .collect()
}

/// 两个文件的键差异结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// 第二个文件中存在、第一个文件中缺失的键
    pub missing_in_first: BTreeSet<String>,
    /// 第一个文件中存在、第二个文件中缺失的键（仅双向比较时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_in_second: Option<BTreeSet<String>>,
}

impl DiffReport {
    /// 单向比较：只报告 B 中有而 A 中没有的键
    pub fn compare(a: &JsonDocument, b: &JsonDocument) -> Self {
        Self {
            missing_in_first: missing_keys(a, b),
            missing_in_second: None,
        }
    }

    /// 双向比较
    pub fn compare_both(a: &JsonDocument, b: &JsonDocument) -> Self {
        Self {
            missing_in_first: missing_keys(a, b),
            missing_in_second: Some(missing_keys(b, a)),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing_in_first.is_empty()
            && self.missing_in_second.as_ref().map_or(true, BTreeSet::is_empty)
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    keys: &BTreeSet<String>,
    header: &str,
    all_present: &str,
) -> fmt::Result {
    if keys.is_empty() {
        return writeln!(f, "{all_present}");
    }
    writeln!(f, "{header}")?;
    for key in keys {
        writeln!(f, "- {key}")?;
    }
    Ok(())
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, &self.missing_in_first, DIFF_MISSING_IN_FIRST, DIFF_ALL_PRESENT)?;
        if let Some(reverse) = &self.missing_in_second {
            write_section(f, reverse, DIFF_MISSING_IN_SECOND, DIFF_ALL_PRESENT_REVERSE)?;
        }
        Ok(())
    }
}
