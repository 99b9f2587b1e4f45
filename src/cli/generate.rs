//! # generate / inputs / queue 子命令 CLI 定义
//!
//! 写出 .gjf 输入文件与 PBS 提交脚本
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use super::SourceArgs;
use clap::Args;
use std::path::PathBuf;

/// 输出位置与命名
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output directory, relative to the input directory unless absolute
    #[arg(short, long, default_value = "inputs")]
    pub out_dir: PathBuf,

    /// Suffix appended to output names: '<name>_<suffix>.gjf'
    #[arg(short, long, default_value = "")]
    pub suffix: String,
}

// ─────────────────────────────────────────────────────────────
// .gjf options
// ─────────────────────────────────────────────────────────────

/// .gjf 头部参数
#[derive(Args, Debug)]
pub struct DeckArgs {
    /// Scratch path written to %rwf, %int and %d2e
    #[arg(long)]
    pub scratch: String,

    /// Gaussian route line, without the leading '#'
    #[arg(long)]
    pub route: String,

    /// Number of processors (%nprocshared)
    #[arg(long, default_value_t = 8)]
    pub nproc: u32,

    /// Memory in GB (%mem)
    #[arg(long, default_value_t = 16)]
    pub mem: u32,

    /// Replace '(Iso=2)' isotope labels with blanks
    #[arg(long, default_value_t = false)]
    pub strip_isotopes: bool,
}

// ─────────────────────────────────────────────────────────────
// PBS options
// ─────────────────────────────────────────────────────────────

/// PBS 脚本参数
#[derive(Args, Debug)]
pub struct QueueOpts {
    /// Job name shown in the queue (script is written to queue_<name>.pbs)
    #[arg(long)]
    pub job_name: String,

    /// Processors per node (ppn)
    #[arg(long, default_value_t = 8)]
    pub nodes: u32,

    /// Memory in GB requested from PBS (defaults to --mem, or 16)
    #[arg(long)]
    pub queue_mem: Option<u32>,

    /// Wall-clock limit in hours
    #[arg(long, default_value_t = 1440)]
    pub walltime: u32,

    /// Gaussian version to load (9 or 16)
    #[arg(long, default_value_t = 16)]
    pub gaussian: u32,
}

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub deck: DeckArgs,

    #[command(flatten)]
    pub queue: QueueOpts,
}

/// inputs 子命令参数
#[derive(Args, Debug)]
pub struct InputsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub deck: DeckArgs,
}

/// queue 子命令参数
#[derive(Args, Debug)]
pub struct QueueArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub queue: QueueOpts,
}
