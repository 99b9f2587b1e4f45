//! # Gaussian 输出文件 (.out / .log) 坐标提取
//!
//! 从 Gaussian 输出中提取元素标签（`Symbolic Z-matrix:` 段）与
//! 最后一次 `Standard orientation` 表中的坐标，组装成 .gjf 坐标块。
//!
//! ## 相关片段
//! ```text
//!  Symbolic Z-matrix:
//!  Charge =  0 Multiplicity = 1
//!  C                     0.        0.        0.
//!  ...
//!  NAtoms=      2 NActive=      2 NUniq=      2
//!  ...
//!                          Standard orientation:
//!  ---------------------------------------------------------------------
//!  Center     Atomic      Atomic             Coordinates (Angstroms)
//!  Number     Number       Type             X           Y           Z
//!  ---------------------------------------------------------------------
//!       1          6           0        0.000000    0.000000   -0.545000
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/coordinates.rs`

use crate::error::{GjfError, Result};
use crate::models::{ChargeMultiplicity, CoordinateBlock};

const ATOM_COUNT_MARKER: &str = "NAtoms=";
const ZMATRIX_MARKER: &str = "Symbolic Z-matrix:";
const ORIENTATION_MARKER: &str = "Standard orientation";

/// 元素列宽
const LABEL_WIDTH: usize = 18;

/// Z-matrix 标记行到第一个原子行的偏移
const ZMATRIX_OFFSET: usize = 2;
/// Standard orientation 标记行到第一个坐标行的偏移（两条分隔线 + 两行表头）
const ORIENTATION_OFFSET: usize = 5;
/// 坐标表中 X 之前的列数（Center / Atomic Number / Atomic Type）
const ORIENTATION_SKIP_COLUMNS: usize = 3;

const FORMAT: &str = "Gaussian log";

/// 提取坐标块
///
/// `NAtoms=` 缺失是错误；`Symbolic Z-matrix:` 或 `Standard orientation`
/// 缺失时返回 `Ok(None)`。
pub fn extract_coordinates(lines: &[String], path: &str) -> Result<Option<CoordinateBlock>> {
    let n_atoms = find_atom_count(lines, path)?;

    let idx_z = match lines.iter().position(|l| l.contains(ZMATRIX_MARKER)) {
        Some(i) => i + ZMATRIX_OFFSET,
        None => return Ok(None),
    };

    let labels = table_rows(lines, idx_z, n_atoms, path, "Z-matrix")?
        .iter()
        .map(|row| {
            row.split_whitespace()
                .next()
                .ok_or_else(|| parse_error(path, format!("empty Z-matrix row: '{}'", row)))
        })
        .collect::<Result<Vec<&str>>>()?;

    // 几何优化会输出多次 Standard orientation，取最后一次
    let idx_s = match lines
        .iter()
        .enumerate()
        .skip(idx_z + labels.len())
        .filter(|(_, l)| l.contains(ORIENTATION_MARKER))
        .map(|(i, _)| i)
        .last()
    {
        Some(i) => i + ORIENTATION_OFFSET,
        None => return Ok(None),
    };

    let atom_lines = table_rows(lines, idx_s, n_atoms, path, ORIENTATION_MARKER)?
        .iter()
        .zip(&labels)
        .map(|(row, label)| {
            let fields: Vec<&str> = row.split_whitespace().collect();
            if fields.len() <= ORIENTATION_SKIP_COLUMNS {
                return Err(parse_error(
                    path,
                    format!("malformed {} row: '{}'", ORIENTATION_MARKER, row),
                ));
            }
            Ok(format!(
                "{:<width$}  {}",
                label,
                fields[ORIENTATION_SKIP_COLUMNS..].join("\t"),
                width = LABEL_WIDTH
            ))
        })
        .collect::<Result<Vec<String>>>()?;

    let header_line = lines.get(idx_z - 1).map(String::as_str).unwrap_or_default();
    let header = ChargeMultiplicity::parse_log_line(header_line).ok_or_else(|| {
        GjfError::MalformedHeaderLine {
            path: path.to_string(),
            line: header_line.trim().to_string(),
        }
    })?;

    Ok(Some(CoordinateBlock::new(header, atom_lines)))
}

/// 查找 `NAtoms=` 并解析其后的整数
fn find_atom_count(lines: &[String], path: &str) -> Result<usize> {
    let line = lines
        .iter()
        .find(|l| l.contains(ATOM_COUNT_MARKER))
        .ok_or_else(|| GjfError::MarkerNotFound {
            path: path.to_string(),
            marker: ATOM_COUNT_MARKER.to_string(),
        })?;

    let pos = line.find(ATOM_COUNT_MARKER).unwrap_or(0) + ATOM_COUNT_MARKER.len();
    line[pos..]
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(path, format!("invalid atom count: '{}'", line.trim())))
}

/// 从 `start` 开始取 `count` 行
fn table_rows<'a>(
    lines: &'a [String],
    start: usize,
    count: usize,
    path: &str,
    table: &str,
) -> Result<&'a [String]> {
    start
        .checked_add(count)
        .and_then(|end| lines.get(start..end))
        .ok_or_else(|| {
            parse_error(
                path,
                format!(
                    "{} table truncated: expected {} rows from line {}",
                    table,
                    count,
                    start + 1
                ),
            )
        })
}

fn parse_error(path: &str, reason: String) -> GjfError {
    GjfError::ParseError {
        format: FORMAT.to_string(),
        path: path.to_string(),
        reason,
    }
}
