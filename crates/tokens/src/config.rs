use miniwing_core::{Diagnostic, UtilitySet};
use serde_json::Value;
use std::path::PathBuf;

/// 默认输出路径
pub const DEFAULT_OUTPUT_PATH: &str = "dist/output.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub path: PathBuf,
    /// 不支持压缩，仅保留字段以便提示
    pub minify: bool,
    /// 是否输出头部注释
    pub comments: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            minify: false,
            comments: true,
        }
    }
}

/// 配置文件中与 token 无关的设置
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub output: OutputSettings,
    /// 默认扫描的 HTML 文件
    pub scan: Vec<PathBuf>,
    pub utilities: UtilitySet,
}

impl Settings {
    /// 从配置 JSON 中逐字段解析设置
    ///
    /// 某个字段格式不对时只回退该字段，并记录一条诊断。
    pub fn from_value(value: &Value) -> (Self, Vec<Diagnostic>) {
        let mut settings = Settings::default();
        let mut diagnostics = Vec::new();

        let Some(root) = value.as_object() else {
            return (settings, diagnostics);
        };

        if let Some(output) = root.get("output") {
            settings.output = parse_output(output, &mut diagnostics);
        }

        if let Some(scan) = root.get("scan") {
            settings.scan = parse_scan(scan, &mut diagnostics);
        }

        if let Some(utilities) = root.get("utilities") {
            settings.utilities = parse_utilities(utilities, &mut diagnostics);
        }

        (settings, diagnostics)
    }
}

fn parse_output(value: &Value, diagnostics: &mut Vec<Diagnostic>) -> OutputSettings {
    let mut output = OutputSettings::default();

    let Some(fields) = value.as_object() else {
        diagnostics.push(Diagnostic::warning("output must be an object, using defaults"));
        return output;
    };

    match fields.get("path") {
        None | Some(Value::Null) => {}
        Some(Value::String(path)) if !path.is_empty() => output.path = PathBuf::from(path),
        Some(_) => diagnostics.push(Diagnostic::warning(format!(
            "output.path must be a non-empty string, using {}",
            DEFAULT_OUTPUT_PATH
        ))),
    }

    if let Some(minify) = bool_field(fields.get("minify"), "output.minify", diagnostics) {
        output.minify = minify;
    }
    if let Some(comments) = bool_field(fields.get("comments"), "output.comments", diagnostics) {
        output.comments = comments;
    }

    output
}

fn bool_field(value: Option<&Value>, name: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Null => None,
        _ => {
            diagnostics.push(Diagnostic::warning(format!(
                "{} must be a boolean, using default",
                name
            )));
            None
        }
    }
}

fn parse_scan(value: &Value, diagnostics: &mut Vec<Diagnostic>) -> Vec<PathBuf> {
    let Some(entries) = value.as_array() else {
        diagnostics.push(Diagnostic::warning("scan must be an array of paths, ignored"));
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry.as_str() {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => {
                diagnostics.push(Diagnostic::warning(format!(
                    "Ignored non-string scan entry: {}",
                    entry
                )));
                None
            }
        })
        .collect()
}

fn parse_utilities(value: &Value, diagnostics: &mut Vec<Diagnostic>) -> UtilitySet {
    let Some(entries) = value.as_object() else {
        diagnostics.push(Diagnostic::warning(
            "utilities must be an object, all utilities enabled",
        ));
        return UtilitySet::all();
    };

    let mut toggles = Vec::new();
    for (key, flag) in entries {
        match flag {
            Value::Bool(enabled) => toggles.push((key.clone(), *enabled)),
            _ => diagnostics.push(Diagnostic::warning(format!(
                "utilities.{} must be a boolean, left enabled",
                key
            ))),
        }
    }

    let (utilities, toggle_diagnostics) =
        UtilitySet::from_toggles(toggles.iter().map(|(key, enabled)| (key, enabled)));
    diagnostics.extend(toggle_diagnostics);
    utilities
}
