use crate::resolver::Resolver;
use miniwing_core::TokenTable;

/// 样式表头部注释（两行 + 空行）
pub const HEADER: &str = "/* Miniwing Generated CSS */\n/* Generated from design tokens */\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    /// 是否输出头部注释（对应配置 `output.comments`）
    pub header: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self { header: true }
    }
}

/// 组装结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// 生成的 CSS 文本
    pub css: String,
    /// 输出的规则数量
    pub emitted: usize,
    /// 未能解析的类名（仅供参考，不是错误）
    pub skipped: Vec<String>,
}

impl Assembly {
    /// CSS 内容的短 hash，用于判断输出是否变化
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.css)
    }
}

/// 计算文本的短 hash（blake3 前 12 个十六进制字符）
pub fn fingerprint(css: &str) -> String {
    let hash = blake3::hash(css.as_bytes());
    let hex = format!("{}", hash);
    hex[..12].to_string()
}

/// 样式表组装器
///
/// 按输入顺序逐个解析类名，不去重（去重是提取阶段的职责）。
pub struct Assembler<'t> {
    resolver: Resolver<'t>,
    options: AssembleOptions,
}

impl<'t> Assembler<'t> {
    pub fn new(resolver: Resolver<'t>) -> Self {
        Self::with_options(resolver, AssembleOptions::default())
    }

    pub fn with_options(resolver: Resolver<'t>, options: AssembleOptions) -> Self {
        Self { resolver, options }
    }

    pub fn assemble<S: AsRef<str>>(&self, class_names: &[S]) -> Assembly {
        let mut css = String::new();
        let mut emitted = 0;
        let mut skipped = Vec::new();

        if self.options.header {
            css.push_str(HEADER);
        }

        for class_name in class_names {
            let class_name = class_name.as_ref();
            match self.resolver.resolve(class_name) {
                Some(rule) => {
                    css.push_str(&rule.to_string());
                    css.push('\n');
                    emitted += 1;
                }
                None => skipped.push(class_name.to_string()),
            }
        }

        Assembly {
            css,
            emitted,
            skipped,
        }
    }
}

/// 组装样式表（默认选项，全部家族启用）
pub fn assemble<S: AsRef<str>>(class_names: &[S], tokens: &TokenTable) -> String {
    assemble_report(class_names, tokens).css
}

/// 与 [`assemble`] 相同，返回完整的组装结果
pub fn assemble_report<S: AsRef<str>>(class_names: &[S], tokens: &TokenTable) -> Assembly {
    Assembler::new(Resolver::new(tokens)).assemble(class_names)
}
