//! # Gaussian .gjf 输入文件解析与生成
//!
//! 从 .gjf 中按位置启发式提取坐标块，并将坐标块写回 .gjf 格式。
//!
//! ## .gjf 格式说明
//! ```text
//! %nprocshared=8
//! %mem=16GB
//! # opt freq b3lyp/6-31g(d)
//!
//! title
//!
//! 0 1
//! C                  0.000000    0.000000    0.000000
//! H                  0.000000    0.000000    1.089000
//!
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/generate.rs` 使用
//! - 使用 `models/coordinates.rs`

use crate::error::{GjfError, Result};
use crate::models::CoordinateBlock;
use regex::Regex;
use std::sync::OnceLock;

/// 电荷/多重度行，如 `0 1`、`-1 2`
fn charge_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?[0-9]?\s?[0-9]$").expect("charge/multiplicity pattern is valid")
    })
}

/// 提取坐标块
///
/// 从头查找第一条电荷/多重度行作为起点，再查找其后第一条空行作为终点，
/// 返回 `[begin, end)` 的原始行。
///
/// 找不到电荷行时返回 `Ok(None)`。位于第 0 行的匹配同样视为未找到：
/// 合法的 .gjf 在坐标块之前总有指令行和标题。
pub fn extract_coordinates(lines: &[String], path: &str) -> Result<Option<CoordinateBlock>> {
    let pattern = charge_line_pattern();

    let begin = match lines.iter().position(|l| pattern.is_match(l)) {
        Some(0) | None => return Ok(None),
        Some(i) => i,
    };

    let end = lines[begin..]
        .iter()
        .position(|l| l.trim().is_empty())
        .map(|i| i + begin)
        .ok_or_else(|| GjfError::UnterminatedBlock {
            path: path.to_string(),
        })?;

    Ok(Some(CoordinateBlock::from_lines(lines[begin..end].to_vec())))
}

/// .gjf 头部配置
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// 临时文件路径，原样写入 %rwf / %int / %d2e
    pub scratch: String,
    /// 处理器数
    pub nproc: u32,
    /// 内存 (GB)
    pub mem_gb: u32,
    /// 计算指令行（不含前导 `#`）
    pub route: String,
    /// 输出文件名后缀
    pub suffix: String,
    /// 是否保留 `(Iso=2)` 同位素标记
    pub keep_isotopes: bool,
}

/// 生成 .gjf 头部（指令、空行、标题、空行）
pub fn deck_header(name: &str, config: &DeckConfig) -> Vec<String> {
    vec![
        format!("%rwf={}", config.scratch),
        format!("%int={}", config.scratch),
        format!("%d2e={}", config.scratch),
        "%nosave".to_string(),
        format!("%nprocshared={}", config.nproc),
        format!("%mem={}GB", config.mem_gb),
        format!("%chk={}", name),
        format!("# {} ", config.route),
        String::new(),
        name.to_string(),
        String::new(),
    ]
}

/// 将坐标块转换为完整的 .gjf 文件内容
pub fn to_gjf_string(name: &str, block: &CoordinateBlock, config: &DeckConfig) -> String {
    let mut result = String::new();

    for line in deck_header(name, config).iter().chain(block.lines()) {
        result.push_str(line);
        result.push('\n');
    }

    // 坐标块后两个空行
    result.push_str("\n\n");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    fn config() -> DeckConfig {
        DeckConfig {
            scratch: "/scratch/user/chalcone".to_string(),
            nproc: 8,
            mem_gb: 32,
            route: "opt freq=noraman M08HX/aug-cc-pvdz".to_string(),
            suffix: String::new(),
            keep_isotopes: true,
        }
    }

    const DECK: &str = r#"%nprocshared=4
%mem=8GB
%chk=water
# opt b3lyp/6-31g(d)

water

0 1
 O                 0.00000000    0.00000000    0.11730000
 H                 0.00000000    0.75720000   -0.46920000
 H                 0.00000000   -0.75720000   -0.46920000

"#;

    #[test]
    fn test_extract_gjf_basic() {
        let block = extract_coordinates(&lines(DECK), "water.gjf").unwrap().unwrap();
        assert_eq!(block.header_line(), Some("0 1"));
        assert_eq!(block.num_atoms(), 3);
        assert_eq!(block.labels(), vec!["O", "H", "H"]);
        assert_eq!(
            block.atom_lines()[1],
            " H                 0.00000000    0.75720000   -0.46920000"
        );
    }

    #[test]
    fn test_extract_gjf_signed_charge() {
        let content = "# hf/sto-3g\n\nion\n\n-1 2\nO 0.0 0.0 0.0\nH 0.0 0.0 0.97\n\n";
        let block = extract_coordinates(&lines(content), "oh.gjf").unwrap().unwrap();
        assert_eq!(block.header_line(), Some("-1 2"));
        assert_eq!(block.num_atoms(), 2);
    }

    #[test]
    fn test_extract_gjf_no_charge_line() {
        let content = "# hf/sto-3g\n\ntitle only\n\n";
        assert!(extract_coordinates(&lines(content), "x.gjf").unwrap().is_none());
    }

    #[test]
    fn test_extract_gjf_match_on_first_line_is_absent() {
        let content = "0 1\nC 0.0 0.0 0.0\n\n";
        assert!(extract_coordinates(&lines(content), "x.gjf").unwrap().is_none());
    }

    #[test]
    fn test_extract_gjf_whitespace_line_terminates_block() {
        let content = "# hf/sto-3g\n\nt\n\n0 1\nC 0.0 0.0 0.0\nO 0.0 0.0 1.2\n   \nB 1 2 1.5\n\n";
        let block = extract_coordinates(&lines(content), "co.gjf").unwrap().unwrap();
        assert_eq!(block.num_atoms(), 2);
        assert_eq!(block.atom_lines()[1], "O 0.0 0.0 1.2");

        let tabbed = content.replace("\n   \n", "\n\t \n");
        let block = extract_coordinates(&lines(&tabbed), "co.gjf").unwrap().unwrap();
        assert_eq!(block.num_atoms(), 2);
    }

    #[test]
    fn test_extract_gjf_unterminated() {
        let content = "# hf/sto-3g\n\nt\n\n0 1\nC 0.0 0.0 0.0";
        let err = extract_coordinates(&lines(content), "x.gjf").unwrap_err();
        assert!(matches!(err, GjfError::UnterminatedBlock { .. }));
    }

    #[test]
    fn test_deck_header_order() {
        let header = deck_header("chalc", &config());
        assert_eq!(
            header,
            vec![
                "%rwf=/scratch/user/chalcone",
                "%int=/scratch/user/chalcone",
                "%d2e=/scratch/user/chalcone",
                "%nosave",
                "%nprocshared=8",
                "%mem=32GB",
                "%chk=chalc",
                "# opt freq=noraman M08HX/aug-cc-pvdz ",
                "",
                "chalc",
                "",
            ]
        );
    }

    #[test]
    fn test_gjf_round_trip() {
        let first = extract_coordinates(&lines(DECK), "water.gjf").unwrap().unwrap();
        let written = to_gjf_string("water", &first, &config());
        assert!(written.ends_with("-0.46920000\n\n\n"));

        let second = extract_coordinates(&lines(&written), "water.gjf")
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
    }
}
