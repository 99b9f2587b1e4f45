//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `models/`, `utils/`
//! - 子模块: generate, extract

pub mod extract;
pub mod generate;

use crate::batch::{build_store, FileCollector};
use crate::cli::{Commands, SourceArgs};
use crate::error::Result;
use crate::models::CoordinateStore;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate(args) => generate::execute(args),
        Commands::Inputs(args) => generate::execute_inputs(args),
        Commands::Queue(args) => generate::execute_queue(args),
        Commands::Extract(args) => extract::execute(args),
    }
}

/// 扫描目录并提取所有坐标块
fn collect_store(source: &SourceArgs) -> Result<CoordinateStore> {
    let files = FileCollector::new(source.dir.clone())
        .with_selector(source.kind)
        .with_pattern(source.pattern.as_deref())?
        .collect()?;

    output::print_info(&format!(
        "Found {} files in '{}'",
        files.len(),
        source.dir.display()
    ));

    let (store, summary) = build_store(&files)?;
    output::print_info(&format!(
        "Extracted {} geometries ({} atoms) from {} files ({} without geometry)",
        summary.success,
        summary.atoms,
        summary.total(),
        summary.skipped.len()
    ));

    Ok(store)
}
