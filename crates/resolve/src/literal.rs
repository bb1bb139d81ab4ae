use miniwing_core::{Declaration, UtilityFamily};
use phf::phf_map;

/// 精确匹配的字面量工具类：class name → (家族, css property, css value)
///
/// 这些类不依赖 token 表，每个类名对应一条固定声明。
pub(crate) static LITERAL_MAP: phf::Map<&'static str, (UtilityFamily, &'static str, &'static str)> = phf_map! {
    // Display
    "block" => (UtilityFamily::Display, "display", "block"),
    "inline-block" => (UtilityFamily::Display, "display", "inline-block"),
    "inline" => (UtilityFamily::Display, "display", "inline"),
    "flex" => (UtilityFamily::Display, "display", "flex"),
    "inline-flex" => (UtilityFamily::Display, "display", "inline-flex"),
    "hidden" => (UtilityFamily::Display, "display", "none"),

    // Grid
    "grid" => (UtilityFamily::Grid, "display", "grid"),
    "inline-grid" => (UtilityFamily::Grid, "display", "inline-grid"),

    // Visibility
    "visible" => (UtilityFamily::Visibility, "visibility", "visible"),
    "invisible" => (UtilityFamily::Visibility, "visibility", "hidden"),

    // Flex direction / wrap
    "flex-row" => (UtilityFamily::Flexbox, "flex-direction", "row"),
    "flex-col" => (UtilityFamily::Flexbox, "flex-direction", "column"),
    "flex-wrap" => (UtilityFamily::Flexbox, "flex-wrap", "wrap"),
    "flex-nowrap" => (UtilityFamily::Flexbox, "flex-wrap", "nowrap"),

    // Items alignment
    "items-center" => (UtilityFamily::Flexbox, "align-items", "center"),
    "items-start" => (UtilityFamily::Flexbox, "align-items", "flex-start"),
    "items-end" => (UtilityFamily::Flexbox, "align-items", "flex-end"),

    // Justify content
    "justify-center" => (UtilityFamily::Flexbox, "justify-content", "center"),
    "justify-start" => (UtilityFamily::Flexbox, "justify-content", "flex-start"),
    "justify-end" => (UtilityFamily::Flexbox, "justify-content", "flex-end"),
    "justify-between" => (UtilityFamily::Flexbox, "justify-content", "space-between"),
    "justify-around" => (UtilityFamily::Flexbox, "justify-content", "space-around"),

    // Text align
    "text-center" => (UtilityFamily::TextAlign, "text-align", "center"),
    "text-left" => (UtilityFamily::TextAlign, "text-align", "left"),
    "text-right" => (UtilityFamily::TextAlign, "text-align", "right"),
    "text-justify" => (UtilityFamily::TextAlign, "text-align", "justify"),

    // Position
    "static" => (UtilityFamily::Position, "position", "static"),
    "relative" => (UtilityFamily::Position, "position", "relative"),
    "absolute" => (UtilityFamily::Position, "position", "absolute"),
    "fixed" => (UtilityFamily::Position, "position", "fixed"),
    "sticky" => (UtilityFamily::Position, "position", "sticky"),

    // Overflow
    "overflow-auto" => (UtilityFamily::Overflow, "overflow", "auto"),
    "overflow-hidden" => (UtilityFamily::Overflow, "overflow", "hidden"),
    "overflow-visible" => (UtilityFamily::Overflow, "overflow", "visible"),
    "overflow-scroll" => (UtilityFamily::Overflow, "overflow", "scroll"),

    // Cursor
    "cursor-pointer" => (UtilityFamily::Cursor, "cursor", "pointer"),
    "cursor-default" => (UtilityFamily::Cursor, "cursor", "default"),
    "cursor-not-allowed" => (UtilityFamily::Cursor, "cursor", "not-allowed"),
    "cursor-move" => (UtilityFamily::Cursor, "cursor", "move"),

    // Whitespace
    "whitespace-normal" => (UtilityFamily::Whitespace, "white-space", "normal"),
    "whitespace-nowrap" => (UtilityFamily::Whitespace, "white-space", "nowrap"),
    "whitespace-pre" => (UtilityFamily::Whitespace, "white-space", "pre"),
    "whitespace-pre-line" => (UtilityFamily::Whitespace, "white-space", "pre-line"),
    "whitespace-pre-wrap" => (UtilityFamily::Whitespace, "white-space", "pre-wrap"),

    // Pointer events
    "pointer-events-none" => (UtilityFamily::PointerEvents, "pointer-events", "none"),
    "pointer-events-auto" => (UtilityFamily::PointerEvents, "pointer-events", "auto"),

    // User select
    "select-none" => (UtilityFamily::UserSelect, "user-select", "none"),
    "select-text" => (UtilityFamily::UserSelect, "user-select", "text"),
    "select-all" => (UtilityFamily::UserSelect, "user-select", "all"),
    "select-auto" => (UtilityFamily::UserSelect, "user-select", "auto"),

    // Transform
    "transform" => (
        UtilityFamily::Transform,
        "transform",
        "translateX(var(--tw-translate-x, 0)) translateY(var(--tw-translate-y, 0)) rotate(var(--tw-rotate, 0)) skewX(var(--tw-skew-x, 0)) skewY(var(--tw-skew-y, 0)) scaleX(var(--tw-scale-x, 1)) scaleY(var(--tw-scale-y, 1))"
    ),

    // Border (valueless = 1px width)
    "border" => (UtilityFamily::Border, "border-width", "1px"),

    // Border radius / shadow keywords
    "rounded-none" => (UtilityFamily::BorderRadius, "border-radius", "0"),
    "rounded-full" => (UtilityFamily::BorderRadius, "border-radius", "9999px"),
    "shadow-none" => (UtilityFamily::Shadow, "box-shadow", "none"),
};

/// 宽度关键字回退（仅在 spacing 查找失败时使用）
pub(crate) static WIDTH_KEYWORDS: phf::Map<&'static str, &'static str> = phf_map! {
    "full" => "100%",
    "auto" => "auto",
    "screen" => "100vw",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

/// 高度关键字回退
pub(crate) static HEIGHT_KEYWORDS: phf::Map<&'static str, &'static str> = phf_map! {
    "full" => "100%",
    "auto" => "auto",
    "screen" => "100vh",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
};

/// top 的关键字/分数回退
pub(crate) static TOP_KEYWORDS: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "auto",
    "1/2" => "50%",
    "full" => "100%",
};

/// right / bottom / left 的关键字/分数回退（比 top 多一个 `0`）
pub(crate) static INSET_KEYWORDS: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "auto",
    "0" => "0",
    "1/2" => "50%",
    "full" => "100%",
};

/// 查找字面量工具类
///
/// 例如：`flex` → (Display, `display: flex`)
pub(crate) fn lookup_literal(class_name: &str) -> Option<(UtilityFamily, Declaration)> {
    let &(family, property, value) = LITERAL_MAP.get(class_name)?;
    Some((family, Declaration::new(property, value)))
}

/// 所有字面量类名（测试和调试用）
pub fn literal_names() -> impl Iterator<Item = &'static str> {
    LITERAL_MAP.keys().copied()
}
