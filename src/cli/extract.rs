//! # extract 子命令 CLI 定义
//!
//! 提取坐标并打印汇总表，可选导出 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use super::SourceArgs;
use clap::Args;
use std::path::PathBuf;

/// extract 子命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print every extracted coordinate block
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Save the summary table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
