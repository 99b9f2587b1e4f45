//! # 坐标块数据模型
//!
//! 统一的坐标块表示：第 0 行为 `"<charge> <multiplicity>"`，
//! 之后每行一个原子 `"<element>  <x>\t<y>\t<z>"`。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `models/store.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// Gaussian 同位素标记（氘）
pub const ISOTOPE_MARKER: &str = "(Iso=2)";

/// 电荷与自旋多重度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeMultiplicity {
    pub charge: i32,
    pub multiplicity: u32,
}

impl ChargeMultiplicity {
    pub fn new(charge: i32, multiplicity: u32) -> Self {
        Self {
            charge,
            multiplicity,
        }
    }

    /// 解析 Gaussian 输出中 `Symbolic Z-matrix:` 之后的电荷行
    ///
    /// ```text
    ///  Charge =  0 Multiplicity = 1
    /// ```
    ///
    /// 字段按名称定位（`Charge`、`Multiplicity`，各自后跟 `=` 与整数值），
    /// 任一字段缺失或不是整数时返回 `None`。
    pub fn parse_log_line(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let charge = named_field(&tokens, "Charge")?.parse().ok()?;
        let multiplicity = named_field(&tokens, "Multiplicity")?.parse().ok()?;
        Some(Self::new(charge, multiplicity))
    }

    /// 解析 .gjf 坐标块首行 `"<charge> <multiplicity>"`
    pub fn parse_deck_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let charge = parts.next()?.parse().ok()?;
        let multiplicity = parts.next()?.parse().ok()?;
        Some(Self::new(charge, multiplicity))
    }
}

impl std::fmt::Display for ChargeMultiplicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.charge, self.multiplicity)
    }
}

/// `key = value` 形式的字段取值
fn named_field<'a>(tokens: &[&'a str], key: &str) -> Option<&'a str> {
    let idx = tokens.iter().position(|&t| t == key)?;
    if tokens.get(idx + 1) != Some(&"=") {
        return None;
    }
    tokens.get(idx + 2).copied()
}

/// 坐标块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateBlock {
    /// 原始行（不含换行符）
    lines: Vec<String>,
}

impl CoordinateBlock {
    /// 由已格式化的行创建（首行为电荷/多重度行）
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// 由电荷/多重度与原子行创建
    pub fn new(header: ChargeMultiplicity, atom_lines: Vec<String>) -> Self {
        let mut lines = Vec::with_capacity(atom_lines.len() + 1);
        lines.push(header.to_string());
        lines.extend(atom_lines);
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 电荷/多重度行
    pub fn header_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn charge_multiplicity(&self) -> Option<ChargeMultiplicity> {
        self.header_line()
            .and_then(ChargeMultiplicity::parse_deck_line)
    }

    pub fn atom_lines(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }

    pub fn num_atoms(&self) -> usize {
        self.atom_lines().len()
    }

    /// 每个原子行的第一个字段（元素标签，可能带 `(Iso=2)` 等修饰）
    pub fn labels(&self) -> Vec<&str> {
        self.atom_lines()
            .iter()
            .filter_map(|l| l.split_whitespace().next())
            .collect()
    }

    /// 将所有 `(Iso=2)` 替换为等宽空白，返回被修改的行数
    pub fn strip_isotopes(&mut self) -> usize {
        let blank = " ".repeat(ISOTOPE_MARKER.len());
        let mut changed = 0;
        for line in &mut self.lines {
            if line.contains(ISOTOPE_MARKER) {
                *line = line.replace(ISOTOPE_MARKER, &blank);
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_charge_line() {
        let cm = ChargeMultiplicity::parse_log_line(" Charge =  0 Multiplicity = 1").unwrap();
        assert_eq!(cm, ChargeMultiplicity::new(0, 1));

        let cm = ChargeMultiplicity::parse_log_line(" Charge = -1 Multiplicity = 2").unwrap();
        assert_eq!(cm.to_string(), "-1 2");
    }

    #[test]
    fn test_parse_log_charge_line_malformed() {
        assert!(ChargeMultiplicity::parse_log_line(" Charge =  0").is_none());
        assert!(ChargeMultiplicity::parse_log_line(" Charge = x Multiplicity = 1").is_none());
        assert!(ChargeMultiplicity::parse_log_line(" C   0.0  0.0  0.0").is_none());
    }

    #[test]
    fn test_strip_isotopes_preserves_width() {
        let mut block = CoordinateBlock::from_lines(vec![
            "0 1".to_string(),
            " C                 0.0\t0.0\t0.0".to_string(),
            " H(Iso=2)          1.0\t0.0\t0.0".to_string(),
        ]);
        let before = block.lines()[2].len();

        assert_eq!(block.strip_isotopes(), 1);
        assert_eq!(block.lines()[2].len(), before);
        assert_eq!(block.lines()[2], format!(" H{}1.0\t0.0\t0.0", " ".repeat(17)));
        assert_eq!(block.labels(), vec!["C", "H"]);
    }

    #[test]
    fn test_block_accessors() {
        let block = CoordinateBlock::new(
            ChargeMultiplicity::new(1, 2),
            vec!["O  0.0\t0.0\t0.0".to_string()],
        );
        assert_eq!(block.header_line(), Some("1 2"));
        assert_eq!(block.num_atoms(), 1);
        assert_eq!(
            block.charge_multiplicity(),
            Some(ChargeMultiplicity::new(1, 2))
        );
    }
}
