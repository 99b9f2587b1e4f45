//! # 解析器模块
//!
//! 提供 Gaussian 输入/输出文件的坐标提取器，以及 .gjf 生成。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: gjf, gaussian_log

pub mod gaussian_log;
pub mod gjf;

use crate::error::Result;
use crate::models::{CoordinateBlock, SourceFile, SourceKind};

/// 按源文件类型分派到对应的提取器
pub fn extract_coordinates(source: &SourceFile) -> Result<Option<CoordinateBlock>> {
    match source.kind {
        SourceKind::InputDeck => gjf::extract_coordinates(&source.lines, &source.name),
        SourceKind::ComputationLog => gaussian_log::extract_coordinates(&source.lines, &source.name),
    }
}
