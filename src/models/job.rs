//! # 作业批次数据模型
//!
//! 由 `CoordinateStore` 派生的待写出/待提交分子列表，
//! 包含输出文件命名规则。
//!
//! ## 依赖关系
//! - 使用 `models/store.rs`
//! - 被 `commands/generate.rs` 和 `utils/pbs.rs` 使用

use super::store::CoordinateStore;

/// 输出输入文件扩展名
pub const DECK_EXTENSION: &str = "gjf";

/// 批次中的单个分子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobEntry {
    /// 源文件名（存储键）
    pub source: String,
    /// 分子名：源文件名第一个 `.` 之前的部分
    pub molecule: String,
    /// 输出 .gjf 文件名
    pub output: String,
}

/// 作业批次
#[derive(Debug, Clone, Default)]
pub struct JobBatch {
    entries: Vec<JobEntry>,
}

impl JobBatch {
    /// 从存储构建，跳过未找到坐标的条目
    pub fn from_store(store: &CoordinateStore, suffix: &str) -> Self {
        let entries = store
            .present()
            .map(|(name, _)| JobEntry {
                source: name.to_string(),
                molecule: molecule_name(name).to_string(),
                output: output_filename(name, suffix),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[JobEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 被多个源文件映射到的输出文件名（按首次出现顺序，每个只报告一次）
    ///
    /// 如后缀非空时 `a.gjf` 与 `a.log` 都映射为 `a_<suffix>.gjf`，
    /// 后写出的文件会覆盖先写出的。
    pub fn duplicate_outputs(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let output = entry.output.as_str();
            if !duplicates.contains(&output)
                && self.entries[..i].iter().any(|e| e.output == output)
            {
                duplicates.push(output);
            }
        }
        duplicates
    }
}

/// 分子名：第一个 `.` 之前的部分
pub fn molecule_name(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

/// 输出文件名
///
/// 源文件已是 .gjf 且无后缀时原样复用，否则为 `<molecule>_<suffix>.gjf`。
/// 后缀为空时保留末尾的 `_`（如 `mol.log` -> `mol_.gjf`）。
pub fn output_filename(file_name: &str, suffix: &str) -> String {
    let is_deck = file_name.contains(&format!(".{}", DECK_EXTENSION));
    if is_deck && suffix.is_empty() {
        file_name.to_string()
    } else {
        format!("{}_{}.{}", molecule_name(file_name), suffix, DECK_EXTENSION)
    }
}
