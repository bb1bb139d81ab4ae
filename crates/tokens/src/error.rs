use std::path::PathBuf;

/// 读取 token 文件或配置文件时的错误
///
/// 这些错误不会中断构建：调用方回退到默认值并记录警告。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object, found {kind}", .path.display())]
    NotAnObject { path: PathBuf, kind: &'static str },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } => path,
            LoadError::Json { path, .. } => path,
            LoadError::NotAnObject { path, .. } => path,
        }
    }
}
