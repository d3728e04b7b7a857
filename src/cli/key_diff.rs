//! json-key-diff：比较两个JSON文件的键差异

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::messages::{EXIT_FAILURE, EXIT_OK};
use crate::model::data_core::{AppError, JsonDocument};
use crate::model::key_diff::DiffReport;
use crate::utils::fs::read_json_object;

#[derive(Parser, Debug)]
#[command(name = "json-key-diff")]
#[command(version, about = "Compare key differences between two JSON files", long_about = None)]
pub struct KeyDiffArgs {
    /// Path to the first JSON file
    pub json_file_a: PathBuf,

    /// Path to the second JSON file
    pub json_file_b: PathBuf,

    /// Also report keys in the first file that are missing in the second
    #[arg(long)]
    pub both: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Log loaded key counts
    #[arg(short, long)]
    pub verbose: bool,
}

/// 加载失败时展示给用户的提示
pub fn load_failure_message(err: &AppError) -> String {
    match err {
        AppError::NotFound(p) => {
            format!("Error: File '{}' not found. Please check the file path.", p.display())
        }
        AppError::Malformed { path, .. } => {
            format!("Error: File '{}' is not a valid JSON format.", path.display())
        }
        AppError::NotObject(p) => {
            format!("Error: File '{}' does not contain a JSON object.", p.display())
        }
        other => format!("Error: {other}"),
    }
}

fn load(path: &Path) -> Result<JsonDocument, AppError> {
    let doc = read_json_object(path)?;
    tracing::debug!("loaded {} keys from {}", doc.len(), path.display());
    Ok(doc)
}

/// 执行比较并把结果写到 `out`，返回进程退出码
pub fn run(args: &KeyDiffArgs, out: &mut dyn Write) -> io::Result<u8> {
    let docs = load(&args.json_file_a).and_then(|a| Ok((a, load(&args.json_file_b)?)));
    let (a, b) = match docs {
        Ok(pair) => pair,
        Err(e) => {
            writeln!(out, "{}", load_failure_message(&e))?;
            return Ok(EXIT_FAILURE);
        }
    };

    let report = if args.both {
        DiffReport::compare_both(&a, &b)
    } else {
        DiffReport::compare(&a, &b)
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::key_diff::{DIFF_ALL_PRESENT, DIFF_MISSING_IN_FIRST};
    use tempfile::{tempdir, TempDir};

    fn fixture(a: &str, b: &str) -> (TempDir, KeyDiffArgs) {
        let dir = tempdir().unwrap();
        let pa = dir.path().join("a.json");
        let pb = dir.path().join("b.json");
        std::fs::write(&pa, a).unwrap();
        std::fs::write(&pb, b).unwrap();
        let args = KeyDiffArgs::parse_from(["json-key-diff", pa.to_str().unwrap(), pb.to_str().unwrap()]);
        (dir, args)
    }

    fn run_to_string(args: &KeyDiffArgs) -> (u8, String) {
        let mut buf = Vec::new();
        let code = run(args, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_reports_missing_key() {
        let (_dir, args) = fixture(r#"{"a":1,"b":2}"#, r#"{"a":1,"b":2,"c":3}"#);
        let (code, text) = run_to_string(&args);
        assert_eq!(code, EXIT_OK);
        assert_eq!(text, format!("{DIFF_MISSING_IN_FIRST}\n- c\n"));
    }

    #[test]
    fn test_all_keys_present() {
        let (_dir, args) = fixture(r#"{"x":1}"#, r#"{"x":1}"#);
        let (code, text) = run_to_string(&args);
        assert_eq!(code, EXIT_OK);
        assert_eq!(text, format!("{DIFF_ALL_PRESENT}\n"));
    }

    #[test]
    fn test_missing_file_exits_with_failure() {
        let (dir, mut args) = fixture("{}", "{}");
        args.json_file_b = dir.path().join("nope.json");
        let (code, text) = run_to_string(&args);
        assert_eq!(code, EXIT_FAILURE);
        assert!(text.starts_with("Error: File '"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_malformed_file_exits_with_failure() {
        let (_dir, args) = fixture("{oops", "{}");
        let (code, text) = run_to_string(&args);
        assert_eq!(code, EXIT_FAILURE);
        assert!(text.contains("is not a valid JSON format."));
    }

    #[test]
    fn test_json_output() {
        let (_dir, mut args) = fixture(r#"{"a":1,"only_a":1}"#, r#"{"a":1,"only_b":1}"#);
        args.json = true;
        args.both = true;
        let (code, text) = run_to_string(&args);
        assert_eq!(code, EXIT_OK);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"missing_in_first": ["only_b"], "missing_in_second": ["only_a"]})
        );
    }

    #[test]
    fn test_requires_two_paths() {
        assert!(KeyDiffArgs::try_parse_from(["json-key-diff", "a.json"]).is_err());
    }
}
