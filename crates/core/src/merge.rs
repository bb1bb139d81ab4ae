use crate::tokens::{TokenCategory, TokenMap, TokenTable};
use crate::types::Diagnostic;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// 合并过程的统计信息
///
/// 仅用于观测（日志、摘要输出），不影响合并结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 每个类别写入的键数量
    pub applied: IndexMap<TokenCategory, usize>,
    /// 被非对象值整体替换的 typography 子类别
    pub replaced: Vec<TokenCategory>,
    /// 因值不是字符串/数字而跳过的条目数
    pub skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl MergeReport {
    pub fn applied(&self, category: TokenCategory) -> usize {
        self.applied.get(&category).copied().unwrap_or(0)
    }

    pub fn total_applied(&self) -> usize {
        self.applied.values().sum()
    }
}

/// 将覆盖配置合并到基础 token 表
///
/// 规则：
/// - 平铺类别（colors、spacing、shadows、borderRadius、opacity、zIndex）按键合并，覆盖值优先
/// - typography 合并两层：子类别按键合并；子类别为非对象值时整体替换（结果为空）
/// - 类别缺失、为 null 或不是对象时视为没有覆盖
/// - 未知的顶层键（output、scan、utilities 等）忽略
///
/// 不修改 `base`，总是返回新值。
pub fn merge_tokens(base: &TokenTable, overrides: &Value) -> TokenTable {
    merge_tokens_with_report(base, overrides).0
}

/// 与 [`merge_tokens`] 相同，额外返回合并统计
pub fn merge_tokens_with_report(base: &TokenTable, overrides: &Value) -> (TokenTable, MergeReport) {
    let mut merged = base.clone();
    let mut report = MergeReport::default();

    let Some(root) = overrides.as_object() else {
        return (merged, report);
    };

    for category in TokenCategory::FLAT {
        if let Some(entries) = root.get(category.key()).and_then(Value::as_object) {
            merge_category(merged.category_mut(category), category, entries, &mut report);
        }
    }

    if let Some(typography) = root.get("typography").and_then(Value::as_object) {
        for category in TokenCategory::TYPOGRAPHY {
            match typography.get(category.key()) {
                None => {}
                Some(Value::Object(entries)) => {
                    merge_category(merged.category_mut(category), category, entries, &mut report);
                }
                Some(other) => {
                    // 标量替换整个子类别，标量本身不含任何键
                    merged.category_mut(category).clear();
                    report.replaced.push(category);
                    report.diagnostics.push(Diagnostic::warning(format!(
                        "typography.{} is not an object ({}), sub-category replaced",
                        category.key(),
                        value_kind(other)
                    )));
                }
            }
        }
    }

    (merged, report)
}

fn merge_category(
    target: &mut TokenMap,
    category: TokenCategory,
    entries: &Map<String, Value>,
    report: &mut MergeReport,
) {
    let mut applied = 0;

    for (key, value) in entries {
        match token_value(value) {
            Some(css_value) => {
                // 后者覆盖前者，已有键保持原位置
                target.insert(key.clone(), css_value);
                applied += 1;
            }
            None => {
                report.skipped += 1;
                report.diagnostics.push(Diagnostic::warning(format!(
                    "Ignored {} value for token {}.{}",
                    value_kind(value),
                    category.key(),
                    key
                )));
            }
        }
    }

    *report.applied.entry(category).or_insert(0) += applied;
}

/// 将 JSON 值转换为 CSS 值字符串
///
/// 数字按十进制文本保存（opacity、zIndex、fontWeight 常用数字）。
/// 整数值的浮点数输出为整数（`10.0` → `10`）。
pub fn token_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        }),
        _ => None,
    }
}

/// JSON 值的类型名，用于诊断信息
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TokenTable {
    /// 从已解析的 token JSON 构建 token 表
    ///
    /// 与覆盖配置走同一条宽容的合并路径：以空表为基础合并。
    pub fn from_json_value(value: &Value) -> Self {
        merge_tokens(&TokenTable::new(), value)
    }

    /// 从 JSON 字符串构建 token 表
    pub fn from_json_str(json_str: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json_str)?;
        Ok(Self::from_json_value(&value))
    }
}
