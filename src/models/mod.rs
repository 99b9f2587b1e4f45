//! # 数据模型模块
//!
//! 定义坐标块、源文件、坐标存储与作业批次。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`batch/` 和 `commands/` 使用
//! - 子模块: coordinates, source, store, job

pub mod coordinates;
pub mod job;
pub mod source;
pub mod store;

pub use coordinates::{ChargeMultiplicity, CoordinateBlock};
pub use job::JobBatch;
pub use source::{SourceFile, SourceKind};
pub use store::CoordinateStore;
