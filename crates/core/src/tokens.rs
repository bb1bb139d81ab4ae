use indexmap::IndexMap;

/// 单个 token 类别：短键 → CSS 值
///
/// 使用 IndexMap 保持声明顺序，方便输出摘要时稳定。
/// 注意 IndexMap 的相等比较不考虑顺序。
pub type TokenMap = IndexMap<String, String>;

/// 排版相关的 token 子类别
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typography {
    pub font_size: TokenMap,
    pub font_weight: TokenMap,
    pub line_height: TokenMap,
    pub letter_spacing: TokenMap,
}

/// 合并后的设计 token 表
///
/// 每个类别在合并后都存在（可能为空）。某个键不存在仅表示
/// 对应的工具类不会生成，不是错误。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    pub colors: TokenMap,
    pub spacing: TokenMap,
    pub typography: Typography,
    pub shadows: TokenMap,
    pub border_radius: TokenMap,
    pub opacity: TokenMap,
    pub z_index: TokenMap,
}

/// token 类别标识，用于规则表引用某个类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Colors,
    Spacing,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Shadows,
    BorderRadius,
    Opacity,
    ZIndex,
}

impl TokenCategory {
    /// 顶层的平铺类别（不含 typography 子类别）
    pub const FLAT: [TokenCategory; 6] = [
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::Shadows,
        TokenCategory::BorderRadius,
        TokenCategory::Opacity,
        TokenCategory::ZIndex,
    ];

    /// typography 下的子类别
    pub const TYPOGRAPHY: [TokenCategory; 4] = [
        TokenCategory::FontSize,
        TokenCategory::FontWeight,
        TokenCategory::LineHeight,
        TokenCategory::LetterSpacing,
    ];

    /// JSON 中的键名
    pub fn key(self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::FontSize => "fontSize",
            TokenCategory::FontWeight => "fontWeight",
            TokenCategory::LineHeight => "lineHeight",
            TokenCategory::LetterSpacing => "letterSpacing",
            TokenCategory::Shadows => "shadows",
            TokenCategory::BorderRadius => "borderRadius",
            TokenCategory::Opacity => "opacity",
            TokenCategory::ZIndex => "zIndex",
        }
    }
}

impl TokenTable {
    /// 创建所有类别为空的 token 表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置的最小默认 token 表
    ///
    /// token 文件缺失或无法解析时使用：常用颜色和基础间距。
    pub fn minimal() -> Self {
        let colors = [
            ("blue", "#3b82f6"),
            ("red", "#ef4444"),
            ("green", "#22c55e"),
            ("yellow", "#eab308"),
            ("purple", "#a855f7"),
            ("pink", "#ec4899"),
            ("indigo", "#6366f1"),
            ("cyan", "#06b6d4"),
            ("teal", "#14b8a6"),
            ("orange", "#f97316"),
            ("gray", "#6b7280"),
            ("white", "#ffffff"),
            ("black", "#000000"),
            ("transparent", "transparent"),
        ];

        let spacing = [
            ("0", "0"),
            ("1", "0.25rem"),
            ("2", "0.5rem"),
            ("3", "0.75rem"),
            ("4", "1rem"),
            ("5", "1.25rem"),
            ("6", "1.5rem"),
            ("8", "2rem"),
            ("10", "2.5rem"),
            ("12", "3rem"),
            ("16", "4rem"),
            ("20", "5rem"),
            ("24", "6rem"),
            ("32", "8rem"),
            ("40", "10rem"),
            ("48", "12rem"),
            ("56", "14rem"),
            ("64", "16rem"),
        ];

        Self {
            colors: to_token_map(&colors),
            spacing: to_token_map(&spacing),
            ..Self::default()
        }
    }

    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::FontSize => &self.typography.font_size,
            TokenCategory::FontWeight => &self.typography.font_weight,
            TokenCategory::LineHeight => &self.typography.line_height,
            TokenCategory::LetterSpacing => &self.typography.letter_spacing,
            TokenCategory::Shadows => &self.shadows,
            TokenCategory::BorderRadius => &self.border_radius,
            TokenCategory::Opacity => &self.opacity,
            TokenCategory::ZIndex => &self.z_index,
        }
    }

    pub fn category_mut(&mut self, category: TokenCategory) -> &mut TokenMap {
        match category {
            TokenCategory::Colors => &mut self.colors,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::FontSize => &mut self.typography.font_size,
            TokenCategory::FontWeight => &mut self.typography.font_weight,
            TokenCategory::LineHeight => &mut self.typography.line_height,
            TokenCategory::LetterSpacing => &mut self.typography.letter_spacing,
            TokenCategory::Shadows => &mut self.shadows,
            TokenCategory::BorderRadius => &mut self.border_radius,
            TokenCategory::Opacity => &mut self.opacity,
            TokenCategory::ZIndex => &mut self.z_index,
        }
    }

    /// 查询某个类别中的值；空字符串视为不存在
    pub fn lookup(&self, category: TokenCategory, key: &str) -> Option<&str> {
        self.category(category)
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

fn to_token_map(entries: &[(&str, &str)]) -> TokenMap {
    entries
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
