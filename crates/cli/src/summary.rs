use miniwing_core::{TokenCategory, TokenTable};
use std::fmt;

/// token 表各类别的条目数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSummary {
    pub colors: usize,
    pub spacing: usize,
    pub font_sizes: usize,
    pub font_weights: usize,
    pub line_heights: usize,
    pub letter_spacings: usize,
    pub shadows: usize,
    pub border_radii: usize,
    pub opacity: usize,
    pub z_index: usize,
}

impl TokenSummary {
    pub fn new(tokens: &TokenTable) -> Self {
        let count = |category| tokens.category(category).len();
        Self {
            colors: count(TokenCategory::Colors),
            spacing: count(TokenCategory::Spacing),
            font_sizes: count(TokenCategory::FontSize),
            font_weights: count(TokenCategory::FontWeight),
            line_heights: count(TokenCategory::LineHeight),
            letter_spacings: count(TokenCategory::LetterSpacing),
            shadows: count(TokenCategory::Shadows),
            border_radii: count(TokenCategory::BorderRadius),
            opacity: count(TokenCategory::Opacity),
            z_index: count(TokenCategory::ZIndex),
        }
    }

    /// 详细版本，列出全部类别
    pub fn detailed(&self) -> String {
        format!(
            "{}  - Line Heights: {}\n  - Letter Spacing: {}\n  - Shadows: {}\n  - Border Radius: {}\n  - Opacity: {}\n  - Z-Index: {}\n",
            self,
            self.line_heights,
            self.letter_spacings,
            self.shadows,
            self.border_radii,
            self.opacity,
            self.z_index
        )
    }
}

impl fmt::Display for TokenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Token Summary:")?;
        writeln!(f, "  - Colors: {}", self.colors)?;
        writeln!(f, "  - Spacing: {}", self.spacing)?;
        writeln!(f, "  - Font Sizes: {}", self.font_sizes)?;
        writeln!(f, "  - Font Weights: {}", self.font_weights)
    }
}
