use crate::summary::TokenSummary;
use anyhow::{Context, Result};
use miniwing_resolve::{AssembleOptions, Assembler, Resolver};
use miniwing_scanner::scan_files;
use miniwing_tokens::load_and_merge;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 构建参数
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// 要扫描的 HTML 文件；为空时使用配置中的 `scan`
    pub files: Vec<PathBuf>,
    pub tokens: PathBuf,
    pub config: PathBuf,
    /// 输出路径；为空时使用配置中的 `output.path`
    pub out: Option<PathBuf>,
    /// 额外的副本路径
    pub copy_to: Vec<PathBuf>,
}

/// 构建结果
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub output: PathBuf,
    /// 输出内容有变化并已写入
    pub written: bool,
    pub classes_found: usize,
    pub rules_emitted: usize,
    pub skipped: Vec<String>,
    pub fingerprint: String,
    pub copies: Vec<PathBuf>,
    /// 实际写入（内容有变化）的副本数
    pub copies_written: usize,
    pub summary: TokenSummary,
}

/// 执行完整构建：加载 token → 扫描 → 组装 → 写入
pub fn run_build(options: &BuildOptions) -> Result<BuildOutcome> {
    info!("[1] Loading design tokens...");
    let loaded = load_and_merge(&options.tokens, &options.config);

    if loaded.settings.output.minify {
        warn!("output.minify is not supported, writing unminified CSS");
    }

    let files = if options.files.is_empty() {
        loaded.settings.scan.clone()
    } else {
        options.files.clone()
    };
    if files.is_empty() {
        warn!("No HTML files to scan; pass files or set `scan` in the config");
    }

    info!("[2] Scanning HTML files for class names...");
    let scan = scan_files(&files);
    info!("Found {} unique class names", scan.classes.len());

    info!("[3] Generating CSS from tokens...");
    let resolver = Resolver::with_utilities(&loaded.tokens, loaded.settings.utilities);
    let assembler = Assembler::with_options(
        resolver,
        AssembleOptions {
            header: loaded.settings.output.comments,
        },
    );
    let assembly = assembler.assemble(&scan.classes);
    if !assembly.skipped.is_empty() {
        debug!(skipped = ?assembly.skipped, "classes without a matching utility");
    }

    let output = options
        .out
        .clone()
        .unwrap_or_else(|| loaded.settings.output.path.clone());
    let written = write_if_changed(&output, &assembly.css)?;
    if written {
        info!("CSS compiled to: {}", output.display());
    } else {
        info!("CSS unchanged: {}", output.display());
    }

    let mut copies = Vec::new();
    let mut copies_written = 0;
    for target in &options.copy_to {
        if write_if_changed(target, &assembly.css)? {
            info!("CSS copied to: {}", target.display());
            copies_written += 1;
        } else {
            info!("CSS unchanged: {}", target.display());
        }
        copies.push(target.clone());
    }

    Ok(BuildOutcome {
        output,
        written,
        classes_found: scan.classes.len(),
        rules_emitted: assembly.emitted,
        fingerprint: assembly.fingerprint(),
        skipped: assembly.skipped,
        copies,
        copies_written,
        summary: TokenSummary::new(&loaded.tokens),
    })
}

/// 写入文件；内容与现有文件相同时跳过
///
/// 返回是否实际写入。
pub fn write_if_changed(path: &Path, css: &str) -> Result<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == css {
            return Ok(false);
        }
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    fs::write(path, css).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
