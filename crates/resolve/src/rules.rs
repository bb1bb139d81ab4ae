use crate::literal::{lookup_literal, HEIGHT_KEYWORDS, INSET_KEYWORDS, TOP_KEYWORDS, WIDTH_KEYWORDS};
use miniwing_core::{Declaration, TokenCategory, TokenTable, UtilityFamily, UtilitySet};

/// 解析规则描述
///
/// `RULES` 中的顺序就是优先级：前面的规则先匹配。
/// 多个家族共用前缀（`text-` 同时用于对齐、颜色、字号；`border` 同时用于
/// 宽度和颜色），所以顺序必须保持，不能按前缀长度重新推导。
pub enum UtilityRule {
    /// 精确字面量（见 `literal::LITERAL_MAP`），家族由每个条目自带
    Literal,
    /// `<prefix>-<key>`，key 在 token 类别中查找
    Token(TokenRule),
    /// `<prefix>-<value>`，value 直接代入，不查 token
    Computed(ComputedRule),
}

pub struct TokenRule {
    pub family: UtilityFamily,
    pub prefix: &'static str,
    pub category: TokenCategory,
    /// 一次查找写入的属性（px/py/mx/my 为两个）
    pub properties: &'static [&'static str],
    /// 类名恰好等于前缀时使用的 key（如 `rounded` → `DEFAULT`）
    pub bare_key: Option<&'static str>,
    /// token 查找失败后的关键字回退
    pub keywords: Option<&'static phf::Map<&'static str, &'static str>>,
}

pub struct ComputedRule {
    pub family: UtilityFamily,
    pub prefix: &'static str,
    pub build: fn(&str) -> Vec<Declaration>,
}

impl UtilityRule {
    /// 规则所属家族；字面量规则的家族因条目而异，返回 None
    pub fn family(&self) -> Option<UtilityFamily> {
        match self {
            UtilityRule::Literal => None,
            UtilityRule::Token(rule) => Some(rule.family),
            UtilityRule::Computed(rule) => Some(rule.family),
        }
    }

    /// 尝试用本规则解析类名
    ///
    /// 返回匹配的家族和声明；家族被禁用时视为不匹配，继续尝试后续规则。
    pub fn apply(
        &self,
        class_name: &str,
        tokens: &TokenTable,
        utilities: UtilitySet,
    ) -> Option<(UtilityFamily, Vec<Declaration>)> {
        match self {
            UtilityRule::Literal => {
                let (family, decl) = lookup_literal(class_name)?;
                utilities.contains(family).then(|| (family, vec![decl]))
            }
            UtilityRule::Token(rule) => {
                if !utilities.contains(rule.family) {
                    return None;
                }
                rule.apply(class_name, tokens).map(|decls| (rule.family, decls))
            }
            UtilityRule::Computed(rule) => {
                if !utilities.contains(rule.family) {
                    return None;
                }
                rule.apply(class_name).map(|decls| (rule.family, decls))
            }
        }
    }
}

impl TokenRule {
    fn apply(&self, class_name: &str, tokens: &TokenTable) -> Option<Vec<Declaration>> {
        let key = match strip_utility_prefix(class_name, self.prefix) {
            // bare_key 只用于裸前缀（`rounded-DEFAULT` 不匹配）
            Some(key) if Some(key) == self.bare_key => return None,
            Some(key) => key,
            None if class_name == self.prefix => self.bare_key?,
            None => return None,
        };

        let value = tokens
            .lookup(self.category, key)
            .or_else(|| self.keywords?.get(key).copied())?;

        Some(
            self.properties
                .iter()
                .map(|&property| Declaration::new(property, value))
                .collect(),
        )
    }
}

impl ComputedRule {
    fn apply(&self, class_name: &str) -> Option<Vec<Declaration>> {
        let value = strip_utility_prefix(class_name, self.prefix)?;
        // 空值会产生缺失值的声明
        if value.is_empty() {
            return None;
        }
        Some((self.build)(value))
    }
}

/// 去掉 `<prefix>-`，返回剩余部分
///
/// `pt-4` 对前缀 `p` 不匹配（剩余 `t-4` 不以 `-` 开头）。
pub(crate) fn strip_utility_prefix<'a>(class_name: &'a str, prefix: &str) -> Option<&'a str> {
    class_name.strip_prefix(prefix)?.strip_prefix('-')
}

const fn token(
    family: UtilityFamily,
    prefix: &'static str,
    category: TokenCategory,
    properties: &'static [&'static str],
) -> UtilityRule {
    UtilityRule::Token(TokenRule {
        family,
        prefix,
        category,
        properties,
        bare_key: None,
        keywords: None,
    })
}

const fn token_with_keywords(
    family: UtilityFamily,
    prefix: &'static str,
    properties: &'static [&'static str],
    keywords: &'static phf::Map<&'static str, &'static str>,
) -> UtilityRule {
    UtilityRule::Token(TokenRule {
        family,
        prefix,
        category: TokenCategory::Spacing,
        properties,
        bare_key: None,
        keywords: Some(keywords),
    })
}

const fn token_with_default(
    family: UtilityFamily,
    prefix: &'static str,
    category: TokenCategory,
    properties: &'static [&'static str],
) -> UtilityRule {
    UtilityRule::Token(TokenRule {
        family,
        prefix,
        category,
        properties,
        bare_key: Some("DEFAULT"),
        keywords: None,
    })
}

const fn computed(
    family: UtilityFamily,
    prefix: &'static str,
    build: fn(&str) -> Vec<Declaration>,
) -> UtilityRule {
    UtilityRule::Computed(ComputedRule {
        family,
        prefix,
        build,
    })
}

use miniwing_core::TokenCategory as C;
use miniwing_core::UtilityFamily as F;

/// 有序规则表
pub static RULES: &[UtilityRule] = &[
    // 1. 精确字面量
    UtilityRule::Literal,
    // 2. 前缀 + token 查找
    token(F::BackgroundColors, "bg", C::Colors, &["background-color"]),
    token(F::TextColors, "text", C::Colors, &["color"]),
    token(F::Padding, "p", C::Spacing, &["padding"]),
    token(F::Padding, "pt", C::Spacing, &["padding-top"]),
    token(F::Padding, "pb", C::Spacing, &["padding-bottom"]),
    token(F::Padding, "pl", C::Spacing, &["padding-left"]),
    token(F::Padding, "pr", C::Spacing, &["padding-right"]),
    token(F::Margin, "m", C::Spacing, &["margin"]),
    token(F::Margin, "mt", C::Spacing, &["margin-top"]),
    token(F::Margin, "mb", C::Spacing, &["margin-bottom"]),
    token(F::Margin, "ml", C::Spacing, &["margin-left"]),
    token(F::Margin, "mr", C::Spacing, &["margin-right"]),
    token(F::Margin, "mx", C::Spacing, &["margin-left", "margin-right"]),
    token(F::Margin, "my", C::Spacing, &["margin-top", "margin-bottom"]),
    token(F::Padding, "px", C::Spacing, &["padding-left", "padding-right"]),
    token(F::Padding, "py", C::Spacing, &["padding-top", "padding-bottom"]),
    token_with_keywords(F::Width, "w", &["width"], &WIDTH_KEYWORDS),
    token_with_keywords(F::Height, "h", &["height"], &HEIGHT_KEYWORDS),
    // 颜色查找失败后才尝试字号
    token(F::FontSize, "text", C::FontSize, &["font-size"]),
    token(F::FontWeight, "font", C::FontWeight, &["font-weight"]),
    token_with_default(F::BorderRadius, "rounded", C::BorderRadius, &["border-radius"]),
    token(F::Opacity, "opacity", C::Opacity, &["opacity"]),
    token(F::ZIndex, "z", C::ZIndex, &["z-index"]),
    token_with_keywords(F::Position, "top", &["top"], &TOP_KEYWORDS),
    token_with_keywords(F::Position, "right", &["right"], &INSET_KEYWORDS),
    token_with_keywords(F::Position, "bottom", &["bottom"], &INSET_KEYWORDS),
    token_with_keywords(F::Position, "left", &["left"], &INSET_KEYWORDS),
    token(F::Border, "border", C::Colors, &["border-color"]),
    token_with_default(F::Shadow, "shadow", C::Shadows, &["box-shadow"]),
    token(F::LineHeight, "leading", C::LineHeight, &["line-height"]),
    token(F::LetterSpacing, "tracking", C::LetterSpacing, &["letter-spacing"]),
    // 3. 前缀 + 直接代入
    computed(F::Transition, "transition", build_transition),
    computed(F::Transition, "duration", build_duration),
    computed(F::Transform, "scale", build_scale),
    computed(F::Transform, "rotate", build_rotate),
    computed(F::Transform, "translate", build_translate),
];

fn build_transition(property: &str) -> Vec<Declaration> {
    vec![
        Declaration::new("transition-property", property),
        Declaration::new("transition-timing-function", "cubic-bezier(0.4, 0, 0.2, 1)"),
        Declaration::new("transition-duration", "150ms"),
    ]
}

fn build_duration(ms: &str) -> Vec<Declaration> {
    vec![Declaration::new("transition-duration", format!("{}ms", ms))]
}

fn build_scale(factor: &str) -> Vec<Declaration> {
    vec![
        Declaration::new("--tw-scale-x", factor),
        Declaration::new("--tw-scale-y", factor),
        Declaration::new("transform", "scale(var(--tw-scale-x), var(--tw-scale-y))"),
    ]
}

fn build_rotate(degrees: &str) -> Vec<Declaration> {
    vec![
        Declaration::new("--tw-rotate", format!("{}deg", degrees)),
        Declaration::new("transform", "rotate(var(--tw-rotate))"),
    ]
}

fn build_translate(offset: &str) -> Vec<Declaration> {
    vec![
        Declaration::new("--tw-translate-x", offset),
        Declaration::new("transform", "translateX(var(--tw-translate-x))"),
    ]
}
