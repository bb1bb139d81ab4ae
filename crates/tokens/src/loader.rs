use crate::config::Settings;
use crate::error::LoadError;
use miniwing_core::{
    merge_tokens_with_report, value_kind, Diagnostic, MergeReport, TokenCategory, TokenTable,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 默认 token 文件名
pub const DEFAULT_TOKENS_FILE: &str = "tokens.json";
/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "miniwing.config.json";

/// token 表的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// 成功读取文件
    Loaded(PathBuf),
    /// 文件缺失或无效，使用内置的最小默认表
    Defaulted { path: PathBuf, reason: String },
}

/// 配置的来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    /// 文件不存在（正常情况，不是错误）
    Absent(PathBuf),
    /// 文件存在但无法使用，按空配置处理
    Malformed { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
pub struct TokenLoad {
    pub tokens: TokenTable,
    pub source: TokenSource,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// 原始配置对象，作为 token 覆盖层传给合并器
    pub overrides: Value,
    pub settings: Settings,
    pub source: ConfigSource,
    pub diagnostics: Vec<Diagnostic>,
}

/// 完整的加载结果：默认值 → token 文件 → 配置覆盖
#[derive(Debug, Clone)]
pub struct LoadedTokens {
    pub tokens: TokenTable,
    pub token_source: TokenSource,
    pub config_source: ConfigSource,
    pub settings: Settings,
    /// 配置覆盖层的合并统计
    pub report: MergeReport,
    pub diagnostics: Vec<Diagnostic>,
}

/// 读取 token 文件
///
/// 文件缺失、无法读取、JSON 无效或根不是对象时回退到 [`TokenTable::minimal`]。
pub fn load_tokens(path: impl AsRef<Path>) -> TokenLoad {
    let path = path.as_ref();

    if !path.exists() {
        warn!("tokens file not found at {}, using defaults", path.display());
        return TokenLoad {
            tokens: TokenTable::minimal(),
            source: TokenSource::Defaulted {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            },
            diagnostics: Vec::new(),
        };
    }

    match read_json_object(path) {
        Ok(value) => {
            let (tokens, report) = merge_tokens_with_report(&TokenTable::new(), &value);
            info!("Loaded tokens from: {}", path.display());
            log_diagnostics(&report.diagnostics);
            TokenLoad {
                tokens,
                source: TokenSource::Loaded(path.to_path_buf()),
                diagnostics: report.diagnostics,
            }
        }
        Err(err) => {
            warn!("Error loading tokens: {}", err);
            TokenLoad {
                tokens: TokenTable::minimal(),
                source: TokenSource::Defaulted {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
                diagnostics: Vec::new(),
            }
        }
    }
}

/// 读取配置文件
///
/// 文件不存在或无效时返回空对象和默认设置。
pub fn load_config(path: impl AsRef<Path>) -> ConfigLoad {
    let path = path.as_ref();

    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return ConfigLoad {
            overrides: Value::Object(Map::new()),
            settings: Settings::default(),
            source: ConfigSource::Absent(path.to_path_buf()),
            diagnostics: Vec::new(),
        };
    }

    match read_json_object(path) {
        Ok(value) => {
            let (settings, diagnostics) = Settings::from_value(&value);
            info!("Loaded config from: {}", path.display());
            log_diagnostics(&diagnostics);
            ConfigLoad {
                overrides: value,
                settings,
                source: ConfigSource::Loaded(path.to_path_buf()),
                diagnostics,
            }
        }
        Err(err) => {
            warn!("Warning loading config: {}", err);
            ConfigLoad {
                overrides: Value::Object(Map::new()),
                settings: Settings::default(),
                source: ConfigSource::Malformed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
                diagnostics: Vec::new(),
            }
        }
    }
}

/// 加载 token 文件和配置文件并合并
pub fn load_and_merge(tokens_path: impl AsRef<Path>, config_path: impl AsRef<Path>) -> LoadedTokens {
    let token_load = load_tokens(tokens_path);
    let config_load = load_config(config_path);

    let (tokens, report) = merge_tokens_with_report(&token_load.tokens, &config_load.overrides);

    for category in [TokenCategory::Colors, TokenCategory::Spacing] {
        let applied = report.applied(category);
        if applied > 0 {
            info!("Merged {} custom {} value(s)", applied, category.key());
        }
    }
    debug!(total = report.total_applied(), "config overrides applied");
    log_diagnostics(&report.diagnostics);

    let diagnostics = token_load
        .diagnostics
        .into_iter()
        .chain(config_load.diagnostics)
        .chain(report.diagnostics.iter().cloned())
        .collect();

    LoadedTokens {
        tokens,
        token_source: token_load.source,
        config_source: config_load.source,
        settings: config_load.settings,
        report,
        diagnostics,
    }
}

/// 读取并解析一个根为对象的 JSON 文件
pub fn read_json_object(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_object() {
        return Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
            kind: value_kind(&value),
        });
    }

    Ok(value)
}

fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        warn!("{}", diagnostic.message);
    }
}
