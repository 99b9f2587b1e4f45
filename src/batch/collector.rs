//! # 文件收集器
//!
//! 扫描输入目录（不递归），按文件名识别 .gjf / .out / .log 文件。
//!
//! ## 功能
//! - 按 `KindSelector` 过滤文件类型
//! - 跟随符号链接，链接到普通文件的条目同样收集
//! - 可选 glob 模式进一步过滤文件名
//! - 结果顺序确定：先 .gjf，后 .out/.log，各自按文件名排序
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::cli::KindSelector;
use crate::error::{GjfError, Result};
use crate::models::SourceKind;

use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 处理的文件类型
    selector: KindSelector,
    /// 文件名模式
    pattern: Option<glob::Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            selector: KindSelector::Both,
            pattern: None,
        }
    }

    /// 设置处理的文件类型
    pub fn with_selector(mut self, selector: KindSelector) -> Self {
        self.selector = selector;
        self
    }

    /// 设置文件名 glob 模式
    pub fn with_pattern(mut self, pattern: Option<&str>) -> Result<Self> {
        self.pattern = pattern
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    GjfError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .transpose()?;
        Ok(self)
    }

    /// 收集所有匹配的文件及其类型
    pub fn collect(&self) -> Result<Vec<(PathBuf, SourceKind)>> {
        if !self.input.is_dir() {
            return Err(GjfError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        // 符号链接按目标文件类型判断；失效链接被丢弃
        let mut files: Vec<(PathBuf, SourceKind)> = WalkDir::new(&self.input)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                let kind = SourceKind::detect(name)?;
                if !self.selector.accepts(kind) || !self.matches_pattern(name) {
                    return None;
                }
                Some((entry.path().to_path_buf(), kind))
            })
            .collect();

        files.sort_by(|(pa, ka), (pb, kb)| kind_rank(*ka).cmp(&kind_rank(*kb)).then(pa.cmp(pb)));
        Ok(files)
    }

    fn matches_pattern(&self, name: &str) -> bool {
        self.pattern.as_ref().map_or(true, |p| p.matches(name))
    }
}

fn kind_rank(kind: SourceKind) -> u8 {
    match kind {
        SourceKind::InputDeck => 0,
        SourceKind::ComputationLog => 1,
    }
}
