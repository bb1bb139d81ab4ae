use serde::{Deserialize, Serialize};

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
}

/// 工具类家族
///
/// 每条解析规则都归属于一个家族，配置文件的 `utilities` 段按家族开关规则。
/// 名称与配置键一一对应（camelCase）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UtilityFamily {
    BackgroundColors,
    TextColors,
    Padding,
    Margin,
    Width,
    Height,
    Display,
    Flexbox,
    Grid,
    Position,
    Border,
    BorderRadius,
    Shadow,
    Opacity,
    ZIndex,
    FontSize,
    FontWeight,
    TextAlign,
    LineHeight,
    LetterSpacing,
    Visibility,
    Overflow,
    Cursor,
    UserSelect,
    Transition,
    Transform,
    Whitespace,
    PointerEvents,
}

impl UtilityFamily {
    pub const ALL: [UtilityFamily; 28] = [
        UtilityFamily::BackgroundColors,
        UtilityFamily::TextColors,
        UtilityFamily::Padding,
        UtilityFamily::Margin,
        UtilityFamily::Width,
        UtilityFamily::Height,
        UtilityFamily::Display,
        UtilityFamily::Flexbox,
        UtilityFamily::Grid,
        UtilityFamily::Position,
        UtilityFamily::Border,
        UtilityFamily::BorderRadius,
        UtilityFamily::Shadow,
        UtilityFamily::Opacity,
        UtilityFamily::ZIndex,
        UtilityFamily::FontSize,
        UtilityFamily::FontWeight,
        UtilityFamily::TextAlign,
        UtilityFamily::LineHeight,
        UtilityFamily::LetterSpacing,
        UtilityFamily::Visibility,
        UtilityFamily::Overflow,
        UtilityFamily::Cursor,
        UtilityFamily::UserSelect,
        UtilityFamily::Transition,
        UtilityFamily::Transform,
        UtilityFamily::Whitespace,
        UtilityFamily::PointerEvents,
    ];

    /// 配置文件中的键名
    pub fn config_key(self) -> &'static str {
        match self {
            UtilityFamily::BackgroundColors => "backgroundColors",
            UtilityFamily::TextColors => "textColors",
            UtilityFamily::Padding => "padding",
            UtilityFamily::Margin => "margin",
            UtilityFamily::Width => "width",
            UtilityFamily::Height => "height",
            UtilityFamily::Display => "display",
            UtilityFamily::Flexbox => "flexbox",
            UtilityFamily::Grid => "grid",
            UtilityFamily::Position => "position",
            UtilityFamily::Border => "border",
            UtilityFamily::BorderRadius => "borderRadius",
            UtilityFamily::Shadow => "shadow",
            UtilityFamily::Opacity => "opacity",
            UtilityFamily::ZIndex => "zIndex",
            UtilityFamily::FontSize => "fontSize",
            UtilityFamily::FontWeight => "fontWeight",
            UtilityFamily::TextAlign => "textAlign",
            UtilityFamily::LineHeight => "lineHeight",
            UtilityFamily::LetterSpacing => "letterSpacing",
            UtilityFamily::Visibility => "visibility",
            UtilityFamily::Overflow => "overflow",
            UtilityFamily::Cursor => "cursor",
            UtilityFamily::UserSelect => "userSelect",
            UtilityFamily::Transition => "transition",
            UtilityFamily::Transform => "transform",
            UtilityFamily::Whitespace => "whitespace",
            UtilityFamily::PointerEvents => "pointerEvents",
        }
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.config_key() == key)
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

/// 已启用的工具类家族集合（位集）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilitySet {
    bits: u32,
}

impl UtilitySet {
    /// 全部启用
    pub fn all() -> Self {
        let bits = UtilityFamily::ALL
            .into_iter()
            .fold(0, |acc, family| acc | family.bit());
        Self { bits }
    }

    /// 全部禁用
    pub fn none() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(&self, family: UtilityFamily) -> bool {
        self.bits & family.bit() != 0
    }

    pub fn enable(&mut self, family: UtilityFamily) {
        self.bits |= family.bit();
    }

    pub fn disable(&mut self, family: UtilityFamily) {
        self.bits &= !family.bit();
    }

    /// 从配置的 `utilities` 开关表构建集合
    ///
    /// 未出现的家族保持启用；未知的键产生警告，不影响结果。
    pub fn from_toggles<'a, I>(toggles: I) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = (&'a String, &'a bool)>,
    {
        let mut set = Self::all();
        let mut diagnostics = Vec::new();

        for (key, &enabled) in toggles {
            match UtilityFamily::from_config_key(key) {
                Some(family) if enabled => set.enable(family),
                Some(family) => set.disable(family),
                None => diagnostics.push(Diagnostic::warning(format!(
                    "Unknown utility category: {}",
                    key
                ))),
            }
        }

        (set, diagnostics)
    }
}

impl Default for UtilitySet {
    fn default() -> Self {
        Self::all()
    }
}
