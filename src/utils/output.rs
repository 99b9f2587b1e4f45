//! # 终端输出工具
//!
//! 带状态标签的彩色输出：`[OK]`、`[WARN]`、`[ERR]`、`[*]`、`[SKIP]`、`[DONE]`。
//! 错误写入 stderr，其余写入 stdout。
//!
//! ## 依赖关系
//! - 被 `commands/`、`batch/` 和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

pub fn print_success(msg: &str) {
    tagged("[OK]".green().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// 未找到坐标而跳过的文件
pub fn print_skip(msg: &str) {
    tagged("[SKIP]".dimmed(), msg);
}

pub fn print_done(msg: &str) {
    tagged("[DONE]".green().bold(), msg);
}

/// 源文件 -> 生成的 .gjf
pub fn print_written(source: &str, written: &str) {
    tagged(
        "[OK]".green().bold(),
        &format!("{} {} {}", source.dimmed(), "->".cyan(), written),
    );
}

/// 打印坐标块（`extract --show`）
pub fn print_block(name: &str, lines: &[String]) {
    print_separator();
    println!("{}", name.bold());
    for line in lines {
        println!("{}", line);
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("\n{}", rule.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", rule.dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
