//! # 批量提取执行器
//!
//! 逐个读取源文件并提取坐标，构建 `CoordinateStore`。
//!
//! ## 功能
//! - 顺序处理（每个文件读入、提取、关闭后再处理下一个）
//! - 进度条显示
//! - 统计成功与跳过（未找到坐标）的文件及原子总数
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/` 提取坐标
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::Result;
use crate::models::{CoordinateStore, SourceFile, SourceKind};
use crate::parsers;
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 提取成功（原子数）
    Success(usize),
    /// 未找到坐标块
    Skipped(String),
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 提取到的原子总数
    pub atoms: usize,
    /// 跳过的文件
    pub skipped: Vec<String>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(atoms) => {
                self.success += 1;
                self.atoms += atoms;
            }
            ProcessResult::Skipped(name) => self.skipped.push(name),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped.len()
    }
}

/// 处理单个源文件，结果写入存储
pub fn process_source(source: &SourceFile, store: &mut CoordinateStore) -> Result<ProcessResult> {
    let block = parsers::extract_coordinates(source)?;
    let result = match &block {
        Some(b) => ProcessResult::Success(b.num_atoms()),
        None => ProcessResult::Skipped(source.name.clone()),
    };
    store.insert(source.name.clone(), block);
    Ok(result)
}

/// 读取并提取所有文件
///
/// 任一文件出现解析错误即中止并返回该错误。
pub fn build_store(files: &[(PathBuf, SourceKind)]) -> Result<(CoordinateStore, BatchResult)> {
    let pb = progress::create_progress_bar(files.len() as u64, "Extracting geometries");

    let mut store = CoordinateStore::new();
    let mut summary = BatchResult::default();

    for (path, kind) in files {
        let source = SourceFile::read(path, *kind)?;
        let result = process_source(&source, &mut store)?;

        if let ProcessResult::Skipped(ref name) = result {
            pb.suspend(|| output::print_skip(&format!("{}: no geometry found", name)));
        }
        summary.merge(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok((store, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DECK: &str = "%chk=w\n# hf/sto-3g\n\nw\n\n0 1\nO 0.0 0.0 0.0\nH 0.0 0.0 0.96\n\n";

    #[test]
    fn test_process_source() {
        let mut store = CoordinateStore::new();

        let deck = SourceFile::from_content("w.gjf", SourceKind::InputDeck, DECK);
        assert_eq!(
            process_source(&deck, &mut store).unwrap(),
            ProcessResult::Success(2)
        );

        let empty = SourceFile::from_content("e.gjf", SourceKind::InputDeck, "# hf\n\nt\n\n");
        assert_eq!(
            process_source(&empty, &mut store).unwrap(),
            ProcessResult::Skipped("e.gjf".to_string())
        );

        assert_eq!(store.len(), 2);
        assert_eq!(store.missing(), vec!["e.gjf"]);
    }

    #[test]
    fn test_build_store_from_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.gjf");
        let b = dir.path().join("b.gjf");
        fs::write(&a, DECK).unwrap();
        fs::write(&b, "# hf\n\nno geometry\n\n").unwrap();

        let files = vec![(a, SourceKind::InputDeck), (b, SourceKind::InputDeck)];
        let (store, summary) = build_store(&files).unwrap();

        assert_eq!(summary.success, 1);
        assert_eq!(summary.atoms, 2);
        assert_eq!(summary.skipped, vec!["b.gjf"]);
        assert_eq!(summary.total(), 2);
        assert_eq!(store.present().count(), 1);
    }

    #[test]
    fn test_build_store_propagates_log_errors() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("broken.log");
        fs::write(&log, " Symbolic Z-matrix:\n Charge = 0 Multiplicity = 1\n C 0. 0. 0.\n").unwrap();

        let result = build_store(&[(log, SourceKind::ComputationLog)]);
        assert!(matches!(
            result,
            Err(crate::error::GjfError::MarkerNotFound { .. })
        ));
    }
}
