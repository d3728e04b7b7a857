//! 本地化目录与语言配置

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::model::data_core::AppError;

/// 参考语言（其键集合即所有语言文件的完整键集合）
pub const REFERENCE_LANG: &str = "en";
/// 允许同步的语言代码（包含 zh 以便完整性检查）
pub const SUPPORTED_LANGS: &[&str] = &["de", "es", "fr", "ja", "ko", "ru", "zh"];
/// 本地化目录名，位于工具所在目录的同级
pub const LOCALS_DIR_NAME: &str = "locals";
/// 覆盖本地化目录的环境变量
pub const LOCALS_DIR_ENV: &str = "UPDATE_LOCALS_DIR";

/// 经过白名单校验的语言代码
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 白名单中的全部语言
    pub fn all() -> impl Iterator<Item = LanguageCode> {
        SUPPORTED_LANGS.iter().map(|s| LanguageCode((*s).to_string()))
    }
}

impl FromStr for LanguageCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if SUPPORTED_LANGS.contains(&s) {
            Ok(Self(s.to_string()))
        } else {
            Err(AppError::UnsupportedLanguage(s.to_string()))
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locals_dir: PathBuf,
}

impl LocaleConfig {
    pub fn new(locals_dir: impl Into<PathBuf>) -> Self {
        Self {
            locals_dir: locals_dir.into(),
        }
    }

    /// 根据可执行文件位置推导：`<可执行文件所在目录>/../locals`
    pub fn from_exe() -> Result<Self, AppError> {
        let exe = std::env::current_exe()?;
        Self::from_tool_path(&exe)
    }

    fn from_tool_path(tool: &Path) -> Result<Self, AppError> {
        let tool_dir = tool
            .parent()
            .ok_or_else(|| AppError::State(format!("无法确定工具所在目录: {}", tool.display())))?;
        let base = tool_dir.parent().unwrap_or(tool_dir);
        Ok(Self::new(base.join(LOCALS_DIR_NAME)))
    }

    pub fn reference_path(&self) -> PathBuf {
        self.locals_dir.join(format!("{REFERENCE_LANG}.json"))
    }

    pub fn locale_path(&self, lang: &LanguageCode) -> PathBuf {
        self.locals_dir.join(format!("{lang}.json"))
    }
}
