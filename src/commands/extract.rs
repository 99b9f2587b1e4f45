//! # extract 命令实现
//!
//! 提取坐标并打印汇总表。
//!
//! ## 功能
//! - 每个源文件一行：类型、原子数、电荷/多重度、状态
//! - `--show` 打印完整坐标块
//! - `--csv` 导出汇总
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `tabled` 打印表格，`csv` + `serde` 导出

use super::collect_store;
use crate::cli::extract::ExtractArgs;
use crate::error::{GjfError, Result};
use crate::models::{CoordinateBlock, CoordinateStore, SourceKind};
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总行
#[derive(Debug, Clone, Serialize, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Elements")]
    elements: String,
    #[tabled(rename = "Charge/Mult")]
    charge_multiplicity: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl SummaryRow {
    fn new(file: &str, block: Option<&CoordinateBlock>) -> Self {
        let kind = SourceKind::detect(file)
            .map(|k| k.to_string())
            .unwrap_or_default();
        match block {
            Some(b) => SummaryRow {
                file: file.to_string(),
                kind,
                atoms: b.num_atoms(),
                elements: unique_labels(b).join(" "),
                charge_multiplicity: b
                    .charge_multiplicity()
                    .map(|cm| cm.to_string())
                    .unwrap_or_default(),
                status: "ok".to_string(),
            },
            None => SummaryRow {
                file: file.to_string(),
                kind,
                atoms: 0,
                elements: String::new(),
                charge_multiplicity: String::new(),
                status: "no geometry".to_string(),
            },
        }
    }
}

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    output::print_header("Extracting Geometries");

    let store = collect_store(&args.source)?;
    if store.is_empty() {
        output::print_warning("No .gjf / .out / .log files found.");
        return Ok(());
    }

    let rows = summary_rows(&store);
    println!("{}", Table::new(&rows));

    if args.show {
        for (name, block) in store.present() {
            output::print_block(name, block.lines());
        }
        output::print_separator();
    }

    if let Some(ref path) = args.csv {
        save_summary_csv(&rows, path)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    output::print_done(&format!(
        "{} of {} files contain a geometry",
        store.present().count(),
        store.len()
    ));
    Ok(())
}

/// 按首次出现顺序去重的元素标签
fn unique_labels(block: &CoordinateBlock) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for label in block.labels() {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn summary_rows(store: &CoordinateStore) -> Vec<SummaryRow> {
    store
        .iter()
        .map(|(name, block)| SummaryRow::new(name, block))
        .collect()
}

/// 保存汇总到 CSV
fn save_summary_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| GjfError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
