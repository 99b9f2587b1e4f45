//! # 坐标块存储
//!
//! 源文件名 -> 坐标块（或缺失）的有序映射，迭代顺序即插入顺序，
//! 保证输出文件与作业脚本的顺序确定。
//!
//! ## 依赖关系
//! - 由 `batch/runner.rs` 构建
//! - 被 `commands/` 和 `models/job.rs` 使用

use super::coordinates::CoordinateBlock;

/// 坐标块存储
#[derive(Debug, Clone, Default)]
pub struct CoordinateStore {
    entries: Vec<(String, Option<CoordinateBlock>)>,
}

impl CoordinateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入条目；同名条目原位替换，保持其原有位置
    pub fn insert(&mut self, name: impl Into<String>, block: Option<CoordinateBlock>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = block,
            None => self.entries.push((name, block)),
        }
    }

    /// 查询条目；外层 `None` 表示无此文件，内层 `None` 表示未找到坐标
    pub fn get(&self, name: &str) -> Option<Option<&CoordinateBlock>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历所有条目
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&CoordinateBlock>)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), b.as_ref()))
    }

    /// 仅遍历找到坐标的条目
    pub fn present(&self) -> impl Iterator<Item = (&str, &CoordinateBlock)> {
        self.entries
            .iter()
            .filter_map(|(n, b)| b.as_ref().map(|b| (n.as_str(), b)))
    }

    /// 未找到坐标的文件名
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, b)| b.is_none())
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// 在所有坐标块中去除 `(Iso=2)` 标记，返回被修改的行数
    pub fn strip_isotopes(&mut self) -> usize {
        self.entries
            .iter_mut()
            .filter_map(|(_, b)| b.as_mut())
            .map(CoordinateBlock::strip_isotopes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(label: &str) -> CoordinateBlock {
        CoordinateBlock::from_lines(vec!["0 1".to_string(), format!("{}  0.0\t0.0\t0.0", label)])
    }

    #[test]
    fn test_insertion_order() {
        let mut store = CoordinateStore::new();
        store.insert("b.gjf", Some(block("C")));
        store.insert("a.log", None);
        store.insert("c.out", Some(block("N")));

        let names: Vec<&str> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b.gjf", "a.log", "c.out"]);

        let present: Vec<&str> = store.present().map(|(n, _)| n).collect();
        assert_eq!(present, vec!["b.gjf", "c.out"]);
        assert_eq!(store.missing(), vec!["a.log"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut store = CoordinateStore::new();
        store.insert("a.gjf", None);
        store.insert("b.gjf", Some(block("C")));
        store.insert("a.gjf", Some(block("O")));

        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().next().map(|(n, _)| n), Some("a.gjf"));
        assert!(store.get("a.gjf").unwrap().is_some());
        assert!(store.get("zzz.gjf").is_none());
    }

    #[test]
    fn test_strip_isotopes_across_blocks() {
        let mut store = CoordinateStore::new();
        store.insert("a.gjf", Some(block("H(Iso=2)")));
        store.insert("b.gjf", Some(block("H(Iso=2)")));
        store.insert("c.gjf", None);

        assert_eq!(store.strip_isotopes(), 2);
        for (_, b) in store.present() {
            assert!(!b.lines()[1].contains("(Iso=2)"));
        }
    }
}
