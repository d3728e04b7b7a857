//! IO helper: safe file read/write for JSON

use std::{
    fs::{self, File, Permissions},
    io::{self, BufReader, ErrorKind, Write},
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::model::data_core::{AppError, JsonDocument};

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(p.to_path_buf()),
        _ => AppError::Io(e),
    })?;
    let rdr = BufReader::new(f);
    serde_json::from_reader(rdr).map_err(|source| {
        // 读取中途的IO错误与语法错误分开上报
        if source.is_io() {
            AppError::Io(source.into())
        } else {
            AppError::Malformed {
                path: p.to_path_buf(),
                source,
            }
        }
    })
}

/// 读取根节点必须为对象的JSON文件
pub fn read_json_object(p: &Path) -> Result<JsonDocument, AppError> {
    match read_json_file(p)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::NotObject(p.to_path_buf())),
    }
}

/// 新建文件的默认权限
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// 将JSON对象整体覆盖写入文件（两空格缩进，非ASCII字符原样输出）
///
/// 先写入同目录下的临时文件再重命名，失败时原文件保持不变。
/// 目标已存在时穿透符号链接写入真实文件，并沿用其权限。
pub fn write_json_file(p: &Path, doc: &JsonDocument) -> Result<(), AppError> {
    let write_err = |source: io::Error| AppError::Write {
        path: p.to_path_buf(),
        source,
    };
    let (target, permissions) = resolve_target(p).map_err(write_err)?;
    let dir = match target.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    if let Some(perms) = permissions {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    serde_json::to_writer_pretty(&mut tmp, doc).map_err(|e| write_err(e.into()))?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// 解析实际写入路径与应使用的权限
fn resolve_target(p: &Path) -> io::Result<(PathBuf, Option<Permissions>)> {
    match fs::metadata(p) {
        Ok(meta) => Ok((fs::canonicalize(p)?, Some(meta.permissions()))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((p.to_path_buf(), new_file_permissions())),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
