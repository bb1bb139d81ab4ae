use crate::html::extract_classes;
use miniwing_core::normalize_classes;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 多文件扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// 去重后的类名，保持首次出现顺序
    pub classes: Vec<String>,
    /// 成功读取的文件数
    pub files_scanned: usize,
    /// 不存在或无法读取的文件
    pub missing: Vec<PathBuf>,
}

/// 扫描多个 HTML 文件
///
/// 文件缺失只记录警告，不中断扫描。
pub fn scan_files<P: AsRef<Path>>(paths: &[P]) -> ScanResult {
    let mut found = Vec::new();
    let mut result = ScanResult::default();

    for path in paths {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let classes = extract_classes(&content);
                debug!(file = %path.display(), count = classes.len(), "scanned");
                found.extend(classes);
                result.files_scanned += 1;
            }
            Err(err) => {
                warn!("File not found or unreadable: {} ({})", path.display(), err);
                result.missing.push(path.to_path_buf());
            }
        }
    }

    result.classes = normalize_classes(&found);
    result
}
