//! # generate / inputs / queue 命令实现
//!
//! 从收集到的坐标块生成 Gaussian 输入文件与 PBS 提交脚本。
//!
//! ## 功能
//! - 可选去除 `(Iso=2)` 同位素标记
//! - 为每个分子写出 .gjf（头部 + 坐标块 + 两个空行）
//! - 写出 `queue_<job>.pbs`
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/gjf.rs`, `utils/pbs.rs`, `utils/output.rs`

use super::collect_store;
use crate::cli::generate::{DeckArgs, GenerateArgs, InputsArgs, OutputArgs, QueueArgs, QueueOpts};
use crate::cli::SourceArgs;
use crate::error::{GjfError, Result};
use crate::models::{CoordinateStore, JobBatch};
use crate::parsers::gjf::{to_gjf_string, DeckConfig};
use crate::utils::output;
use crate::utils::pbs::{generate_pbs_script, GaussianVersion, QueueConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// 未指定 --queue-mem 且没有 .gjf 内存参数时的 PBS 内存 (GB)
const DEFAULT_QUEUE_MEM_GB: u32 = 16;

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Generating Gaussian Inputs and Queue Script");

    // 版本校验先于任何文件写入
    let queue_config = queue_config(&args.queue, Some(args.deck.mem))?;
    let deck_config = deck_config(&args.deck, &args.output);

    let mut store = collect_store(&args.source)?;
    let out_dir = output_dir(&args.source, &args.output);

    write_decks_reporting(&mut store, &out_dir, &deck_config)?;

    let batch = JobBatch::from_store(&store, &args.output.suffix);
    if batch.is_empty() {
        output::print_warning("No geometries found; the queue script has no jobs");
    }
    let script = write_queue_script(&batch, &out_dir, &queue_config)?;
    output::print_success(&format!("Queue script written to '{}'", script.display()));

    output::print_separator();
    output::print_done(&format!(
        "{} molecules ready in '{}'",
        batch.len(),
        out_dir.display()
    ));
    Ok(())
}

/// 执行 inputs 命令
pub fn execute_inputs(args: InputsArgs) -> Result<()> {
    output::print_header("Generating Gaussian Inputs");

    let deck_config = deck_config(&args.deck, &args.output);
    let mut store = collect_store(&args.source)?;
    let out_dir = output_dir(&args.source, &args.output);

    let written = write_decks_reporting(&mut store, &out_dir, &deck_config)?;

    output::print_separator();
    output::print_done(&format!(
        "Wrote {} input files to '{}'",
        written,
        out_dir.display()
    ));
    Ok(())
}

/// 执行 queue 命令
pub fn execute_queue(args: QueueArgs) -> Result<()> {
    output::print_header("Generating PBS Queue Script");

    let queue_config = queue_config(&args.queue, None)?;
    let store = collect_store(&args.source)?;
    let out_dir = output_dir(&args.source, &args.output);

    let batch = JobBatch::from_store(&store, &args.output.suffix);
    warn_duplicate_outputs(&batch);
    if batch.is_empty() {
        output::print_warning("No geometries found; the queue script has no jobs");
    }
    let script = write_queue_script(&batch, &out_dir, &queue_config)?;

    output::print_separator();
    output::print_done(&format!(
        "Queued {} jobs in '{}'",
        batch.len(),
        script.display()
    ));
    Ok(())
}

fn deck_config(deck: &DeckArgs, out: &OutputArgs) -> DeckConfig {
    DeckConfig {
        scratch: deck.scratch.clone(),
        nproc: deck.nproc,
        mem_gb: deck.mem,
        route: deck.route.clone(),
        suffix: out.suffix.clone(),
        keep_isotopes: !deck.strip_isotopes,
    }
}

/// 构建 PBS 配置；不支持的 Gaussian 版本在此处被拒绝
fn queue_config(queue: &QueueOpts, deck_mem: Option<u32>) -> Result<QueueConfig> {
    let version = GaussianVersion::try_from(queue.gaussian)?;
    Ok(QueueConfig {
        job_name: queue.job_name.clone(),
        nodes: queue.nodes,
        mem_gb: queue
            .queue_mem
            .or(deck_mem)
            .unwrap_or(DEFAULT_QUEUE_MEM_GB),
        walltime_hours: queue.walltime,
        version,
    })
}

fn output_dir(source: &SourceArgs, out: &OutputArgs) -> PathBuf {
    source.dir.join(&out.out_dir)
}

/// 多个源文件映射到同一输出文件名时给出警告
fn warn_duplicate_outputs(batch: &JobBatch) {
    for name in batch.duplicate_outputs() {
        output::print_warning(&format!(
            "Several sources map to '{}'; the last one written wins",
            name
        ));
    }
}

fn write_decks_reporting(
    store: &mut CoordinateStore,
    out_dir: &Path,
    config: &DeckConfig,
) -> Result<usize> {
    let written = write_input_decks(store, out_dir, config)?;
    for (source, path) in &written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        output::print_written(source, &name);
    }
    for name in store.missing() {
        output::print_warning(&format!("{}: no geometry, no input written", name));
    }
    Ok(written.len())
}

/// 创建目录（已存在不视为错误）
fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| GjfError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 写出所有 .gjf 文件，返回 (源文件名, 输出路径)
///
/// 若 `keep_isotopes` 为假，先在存储中原位去除所有 `(Iso=2)` 标记。
pub fn write_input_decks(
    store: &mut CoordinateStore,
    out_dir: &Path,
    config: &DeckConfig,
) -> Result<Vec<(String, PathBuf)>> {
    ensure_dir(out_dir)?;

    if !config.keep_isotopes {
        let stripped = store.strip_isotopes();
        if stripped > 0 {
            output::print_info(&format!("Removed isotope labels from {} atom lines", stripped));
        }
    }

    let batch = JobBatch::from_store(store, &config.suffix);
    warn_duplicate_outputs(&batch);
    let mut written = Vec::with_capacity(batch.len());

    for entry in batch.entries() {
        let block = match store.get(&entry.source).flatten() {
            Some(b) => b,
            None => continue,
        };

        let path = out_dir.join(&entry.output);
        fs::write(&path, to_gjf_string(&entry.molecule, block, config)).map_err(|e| {
            GjfError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        written.push((entry.source.clone(), path));
    }

    Ok(written)
}

/// 写出 PBS 脚本，返回脚本路径
pub fn write_queue_script(batch: &JobBatch, out_dir: &Path, config: &QueueConfig) -> Result<PathBuf> {
    ensure_dir(out_dir)?;

    let path = out_dir.join(config.script_name());
    fs::write(&path, generate_pbs_script(config, batch)).map_err(|e| GjfError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}
