//! 原子文件写入
//!
//! tempfile + atomic rename 模式：先写入同目录临时文件，再原子重命名为
//! 目标路径，中途失败不会留下损坏的目标文件。

use std::fs;
use std::io;
use std::path::Path;

/// 原子写入字符串内容
pub(crate) fn atomic_write_str(path: &Path, content: &str) -> io::Result<()> {
    // 确保目标目录存在
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // 在目标目录创建临时文件
    let parent = path.parent().unwrap_or(Path::new("."));
    let temp_file = tempfile::NamedTempFile::new_in(parent)?;
    let temp_path = temp_file.into_temp_path();

    fs::write(&temp_path, content)?;

    // rename 在同一文件系统上是原子操作
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_atomic_write_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");

        atomic_write_str(&file_path, "[]").unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deep/nested/test.json");

        atomic_write_str(&file_path, "{}").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_atomic_write_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");

        fs::write(&file_path, "old").unwrap();
        atomic_write_str(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_no_temp_files_left() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.json");

        atomic_write_str(&file_path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name().to_string_lossy(), "test.json");
    }
}
