//! # 源文件数据模型
//!
//! 一个待提取的源文件：文件名、类型、一次性读入的全部行。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `parsers/` 使用

use crate::error::{GjfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 源文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Gaussian 输入文件 (.gjf)
    InputDeck,
    /// Gaussian 输出文件 (.out / .log)
    ComputationLog,
}

impl SourceKind {
    /// 按文件名判断类型（子串匹配，与 `name.gjf.bak` 之类的文件名兼容）
    pub fn detect(file_name: &str) -> Option<Self> {
        if file_name.contains(".gjf") {
            Some(SourceKind::InputDeck)
        } else if file_name.contains(".out") || file_name.contains(".log") {
            Some(SourceKind::ComputationLog)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::InputDeck => write!(f, "gjf"),
            SourceKind::ComputationLog => write!(f, "log"),
        }
    }
}

/// 源文件
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// 文件名（不含目录），同时作为 `CoordinateStore` 的键
    pub name: String,
    pub kind: SourceKind,
    /// 原始行，不含换行符
    pub lines: Vec<String>,
}

impl SourceFile {
    /// 读取文件
    pub fn read(path: &Path, kind: SourceKind) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GjfError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self::from_content(name, kind, &content))
    }

    /// 从字符串内容创建
    pub fn from_content(name: impl Into<String>, kind: SourceKind, content: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            lines: content.lines().map(str::to_string).collect(),
        }
    }
}
