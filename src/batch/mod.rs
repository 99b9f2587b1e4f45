//! # 批量处理模块
//!
//! 提供目录扫描与批量坐标提取。
//!
//! ## 功能
//! - 按类型识别输入目录中的 Gaussian 文件
//! - 顺序读取并提取坐标，构建 `CoordinateStore`
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::build_store;
