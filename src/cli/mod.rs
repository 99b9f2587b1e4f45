//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 提取坐标 -> 写出 .gjf -> 写出 PBS 脚本
//! - `inputs`: 仅写出 .gjf
//! - `queue`: 仅写出 PBS 脚本
//! - `extract`: 提取坐标并打印汇总
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, extract

pub mod extract;
pub mod generate;

use crate::models::SourceKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// gjfgen - Gaussian 输入文件批量生成工具
#[derive(Parser)]
#[command(name = "gjfgen")]
#[command(version)]
#[command(
    about = "Extract geometries from Gaussian .gjf/.log files and regenerate inputs plus a PBS queue script",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract geometries, write new .gjf inputs and a PBS queue script
    Generate(generate::GenerateArgs),

    /// Extract geometries and write new .gjf inputs only
    Inputs(generate::InputsArgs),

    /// Write only the PBS queue script for the collected molecules
    Queue(generate::QueueArgs),

    /// Extract geometries and print a summary table
    Extract(extract::ExtractArgs),
}

/// 参与处理的源文件类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum KindSelector {
    /// Gaussian input files (.gjf) only
    Gjf,
    /// Gaussian output files (.out / .log) only
    #[value(alias = "out")]
    Log,
    /// Both inputs and outputs
    #[default]
    Both,
}

impl KindSelector {
    /// 是否处理该类型
    pub fn accepts(self, kind: SourceKind) -> bool {
        match self {
            KindSelector::Gjf => kind == SourceKind::InputDeck,
            KindSelector::Log => kind == SourceKind::ComputationLog,
            KindSelector::Both => true,
        }
    }
}

/// 源文件选择参数（各子命令共用）
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Directory containing .gjf / .out / .log files
    pub dir: PathBuf,

    /// Which file kinds to read
    #[arg(short, long, value_enum, default_value = "both")]
    pub kind: KindSelector,

    /// Additional glob pattern the file names must match (e.g. 'chalc*')
    #[arg(short, long)]
    pub pattern: Option<String>,
}
