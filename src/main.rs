//! # gjfgen - Gaussian 输入文件批量生成工具
//!
//! 从 Gaussian 输入 (.gjf) 与输出 (.out/.log) 中提取分子坐标，
//! 重新生成 .gjf 输入文件，并生成 PBS 批量提交脚本。
//!
//! ## 子命令
//! - `generate` - 提取坐标，写出 .gjf 与 PBS 脚本
//! - `inputs`   - 仅写出 .gjf
//! - `queue`    - 仅写出 PBS 脚本
//! - `extract`  - 提取坐标并打印汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (目录扫描与批量提取)
//!   │     ├── parsers/   (坐标提取器与 .gjf 生成)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、PBS 脚本)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
