use crate::rules::RULES;
use miniwing_core::{Declaration, TokenTable, UtilityFamily, UtilitySet};
use std::fmt;

/// CSS 规则，包含选择器和声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// 选择器（`.` + 原始类名，不做转义）
    pub selector: String,
    /// CSS 声明列表
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    pub fn new(class_name: &str, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: format!(".{}", class_name),
            declarations,
        }
    }

    /// 规则体，如 `padding-left: 1rem; padding-right: 1rem;`
    pub fn body(&self) -> String {
        self.declarations
            .iter()
            .map(|decl| format!("{}: {};", decl.property, decl.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {} }}", self.selector, self.body())
    }
}

/// 工具类解析器
///
/// 持有 token 表的只读引用，本身无状态；同一输入总是得到同一输出。
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    tokens: &'t TokenTable,
    utilities: UtilitySet,
}

impl<'t> Resolver<'t> {
    pub fn new(tokens: &'t TokenTable) -> Self {
        Self::with_utilities(tokens, UtilitySet::all())
    }

    /// 只启用指定家族的解析器
    pub fn with_utilities(tokens: &'t TokenTable, utilities: UtilitySet) -> Self {
        Self { tokens, utilities }
    }

    /// 将类名解析为 CSS 规则；不是受支持的工具类时返回 None
    pub fn resolve(&self, class_name: &str) -> Option<CssRule> {
        self.resolve_with_family(class_name)
            .map(|(_, rule)| rule)
    }

    /// 与 [`Resolver::resolve`] 相同，额外返回命中的家族
    pub fn resolve_with_family(&self, class_name: &str) -> Option<(UtilityFamily, CssRule)> {
        if class_name.is_empty() {
            return None;
        }

        RULES.iter().find_map(|rule| {
            let (family, declarations) = rule.apply(class_name, self.tokens, self.utilities)?;
            if declarations.is_empty() {
                return None;
            }
            Some((family, CssRule::new(class_name, declarations)))
        })
    }

    /// 列出所有能产生声明的家族（按规则表顺序）
    ///
    /// 第一个元素就是 `resolve` 采用的家族，其余是被优先级遮蔽的候选。
    pub fn claimants(&self, class_name: &str) -> Vec<UtilityFamily> {
        if class_name.is_empty() {
            return Vec::new();
        }

        RULES
            .iter()
            .filter_map(|rule| rule.apply(class_name, self.tokens, self.utilities))
            .filter(|(_, declarations)| !declarations.is_empty())
            .map(|(family, _)| family)
            .collect()
    }
}

/// 使用全部家族解析单个类名
pub fn resolve(class_name: &str, tokens: &TokenTable) -> Option<CssRule> {
    Resolver::new(tokens).resolve(class_name)
}
