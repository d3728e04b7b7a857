//! 核心数据类型：有序JSON文档与统一错误类型

use std::path::PathBuf;

use serde_json::{Map, Value};
use thiserror::Error;

/// 有序JSON对象（依赖 serde_json 的 preserve_order，迭代顺序即文件中的键顺序）
pub type JsonDocument = Map<String, Value>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("文件未找到: {}", .0.display())]
    NotFound(PathBuf),
    #[error("JSON解析失败 {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON根节点不是对象: {}", .0.display())]
    NotObject(PathBuf),
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("写入失败 {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("语言代码 '{0}' 不支持或无效")]
    UnsupportedLanguage(String),
    #[error("状态错误: {0}")]
    State(String),
}

impl AppError {
    /// 是否属于加载阶段的失败（读取或解析输入文件）
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::Malformed { .. } | AppError::NotObject(_) | AppError::Io(_)
        )
    }
}

/// 按动态语言的真值规则判断一个值是否“非空”
///
/// `null`、`false`、数值0、空字符串、空数组、空对象视为空，其余均为非空。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(m) => !m.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_of_scalars() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(" ")));
    }

    #[test]
    fn test_truthiness_of_containers() {
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!([null])));
        assert!(is_truthy(&json!({"a": ""})));
    }

    #[test]
    fn test_load_failure_classification() {
        assert!(AppError::NotFound(PathBuf::from("a.json")).is_load_failure());
        assert!(AppError::NotObject(PathBuf::from("a.json")).is_load_failure());
        assert!(!AppError::UnsupportedLanguage("xx".into()).is_load_failure());
        let write = AppError::Write {
            path: PathBuf::from("de.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!write.is_load_failure());
    }
}
