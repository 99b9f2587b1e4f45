//! # PBS 脚本生成工具
//!
//! 生成批量提交 Gaussian 作业的 PBS 脚本。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/job.rs`

use crate::error::{GjfError, Result};
use crate::models::JobBatch;

/// 每个作业提交后的等待秒数
const SUBMIT_DELAY_SECS: u32 = 3;

/// 支持的 Gaussian 版本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaussianVersion {
    V9,
    V16,
}

impl GaussianVersion {
    /// `module load softwares/gaussian-<name>` 中的模块名
    pub fn module(self) -> &'static str {
        match self {
            GaussianVersion::V9 => "09/pgi",
            GaussianVersion::V16 => "16/b01",
        }
    }

    /// 可执行文件名
    pub fn executable(self) -> &'static str {
        match self {
            GaussianVersion::V9 => "g09",
            GaussianVersion::V16 => "g16",
        }
    }
}

impl TryFrom<u32> for GaussianVersion {
    type Error = GjfError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            9 => Ok(GaussianVersion::V9),
            16 => Ok(GaussianVersion::V16),
            other => Err(GjfError::UnsupportedEngineVersion(other)),
        }
    }
}

/// PBS 作业配置
#[derive(Debug, Clone)]
pub struct QueueConfig {
    pub job_name: String,
    /// 每节点处理器数 (ppn)
    pub nodes: u32,
    /// 内存 (GB)
    pub mem_gb: u32,
    /// 墙钟时间 (小时)
    pub walltime_hours: u32,
    pub version: GaussianVersion,
}

impl QueueConfig {
    /// 脚本文件名
    pub fn script_name(&self) -> String {
        format!("queue_{}.pbs", self.job_name)
    }
}

/// 生成 PBS 脚本头部
pub fn generate_pbs_header(config: &QueueConfig) -> String {
    format!(
        r#"##
##
#PBS -S /bin/bash
#PBS -l nodes=1:ppn={}
#PBS -l mem={}GB
#PBS -l walltime={}:00:00
#PBS -N {}

cd $PBS_O_WORKDIR

echo "Job start: "`date`
echo "Hostname: " `hostname`
echo "PWD: "$PWD

module load softwares/gaussian-{}

"#,
        config.nodes,
        config.mem_gb,
        config.walltime_hours,
        config.job_name,
        config.version.module(),
    )
}

/// 生成完整 PBS 脚本：头部 + 每个分子一段提交命令
pub fn generate_pbs_script(config: &QueueConfig, batch: &JobBatch) -> String {
    let mut script = generate_pbs_header(config);
    for entry in batch.entries() {
        script.push_str(&format!(
            "{} {}\nsleep {}\n\n",
            config.version.executable(),
            entry.output,
            SUBMIT_DELAY_SECS
        ));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoordinateBlock, CoordinateStore};

    fn config(version: GaussianVersion) -> QueueConfig {
        QueueConfig {
            job_name: "Chalcona".to_string(),
            nodes: 8,
            mem_gb: 32,
            walltime_hours: 1440,
            version,
        }
    }

    #[test]
    fn test_version_lookup() {
        assert_eq!(GaussianVersion::try_from(9u32).unwrap(), GaussianVersion::V9);
        assert_eq!(GaussianVersion::try_from(16u32).unwrap().executable(), "g16");
        assert_eq!(GaussianVersion::V9.module(), "09/pgi");
        assert!(matches!(
            GaussianVersion::try_from(3u32),
            Err(GjfError::UnsupportedEngineVersion(3))
        ));
    }

    #[test]
    fn test_header_only_for_empty_batch() {
        let script = generate_pbs_script(&config(GaussianVersion::V16), &JobBatch::default());
        assert_eq!(script, generate_pbs_header(&config(GaussianVersion::V16)));
        assert!(script.starts_with("##\n##\n#PBS -S /bin/bash\n#PBS -l nodes=1:ppn=8\n"));
        assert!(script.contains("#PBS -l walltime=1440:00:00\n#PBS -N Chalcona\n\ncd $PBS_O_WORKDIR\n"));
        assert!(script.ends_with("module load softwares/gaussian-16/b01\n\n"));
    }

    #[test]
    fn test_job_stanzas() {
        let mut store = CoordinateStore::new();
        let block = CoordinateBlock::from_lines(vec!["0 1".to_string()]);
        store.insert("a.gjf", Some(block.clone()));
        store.insert("b.log", None);
        store.insert("c.out", Some(block));

        let batch = JobBatch::from_store(&store, "");
        let script = generate_pbs_script(&config(GaussianVersion::V9), &batch);

        assert!(script.contains("module load softwares/gaussian-09/pgi\n"));
        assert!(script.ends_with("g09 a.gjf\nsleep 3\n\ng09 c_.gjf\nsleep 3\n\n"));
        assert!(!script.contains("b_"));
    }
}
