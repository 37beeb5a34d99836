//! 批量导出处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责整个目录的批量导出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头
//! 2. **批量加载**：扫描并加载所有测试文件（`Vec<Test>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总成功 / 失败数、作答单元数、诊断数
//! 6. **导出冲突**：两个文件导出到同一路径时只保留按文件名排在前面的一个
//!
//! 编译本身是纯计算，测试之间互不共享状态，可以直接并发。

use crate::config::Config;
use crate::models::question::Test;
use crate::orchestrator::test_processor::{self, output_path_for, ExportOutcome};
use crate::utils::logging::{
    init_log_file, log_batch_progress, log_export_plan, write_export_summary,
};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config)?;
        info!("🚀 批量导出启动，最大并发数: {}", config.max_concurrent_tests);
        Ok(Self { config })
    }

    /// 运行批量导出
    pub async fn run(&self) -> Result<ProcessingStats> {
        let all_tests = self.load_tests().await?;

        if all_tests.is_empty() {
            warn!("⚠️ 没有找到待导出的测试文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        let (tests, rejected) = self.reject_colliding_outputs(all_tests);
        log_export_plan(tests.len(), self.config.max_concurrent_tests);

        let mut stats = self.process_all_tests(tests).await?;
        stats.failed += rejected;
        stats.total += rejected;

        write_export_summary(&stats, &self.config.output_log_file)?;

        Ok(stats)
    }

    /// 加载测试
    async fn load_tests(&self) -> Result<Vec<Test>> {
        info!("📁 正在扫描待导出的测试: {}", self.config.test_folder);
        Ok(crate::models::load_all_tests(&self.config.test_folder).await?)
    }

    /// 同名不同扩展名的文件（`a.json` / `a.toml`）会写到同一个导出文件
    ///
    /// 按文件名顺序先到先得，后来者不导出并计为失败。
    fn reject_colliding_outputs(&self, tests: Vec<Test>) -> (Vec<Test>, usize) {
        let mut claimed = HashSet::new();
        let mut rejected = 0;

        let kept = tests
            .into_iter()
            .enumerate()
            .filter_map(|(idx, test)| {
                let output_path = output_path_for(&test, idx + 1, &self.config.output_folder);
                if claimed.insert(output_path.clone()) {
                    Some(test)
                } else {
                    error!(
                        "❌ {} 与已有测试导出到同一文件 {}，跳过",
                        test.file_path.as_deref().unwrap_or(&test.title),
                        output_path.display()
                    );
                    rejected += 1;
                    None
                }
            })
            .collect();

        (kept, rejected)
    }

    /// 处理所有测试
    async fn process_all_tests(&self, all_tests: Vec<Test>) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_tests.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total_batches = all_tests.len().div_ceil(batch_size);
        let mut stats = ProcessingStats {
            total: all_tests.len(),
            ..Default::default()
        };

        for (batch_idx, batch_tests) in all_tests.chunks(batch_size).enumerate() {
            let batch_start = batch_idx * batch_size;

            let batch_stats = self
                .process_batch(batch_tests, batch_start, semaphore.clone())
                .await?;
            stats.merge(&batch_stats);

            log_batch_progress(batch_idx + 1, total_batches, &stats);
        }

        Ok(stats)
    }

    /// 处理单个批次，返回本批的累计（不含 total）
    async fn process_batch(
        &self,
        batch_tests: &[Test],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<ProcessingStats> {
        let mut batch_handles = Vec::new();

        for (idx, test) in batch_tests.iter().enumerate() {
            let test_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let test = test.clone();
            let config = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match test_processor::process_test(test, test_index, &config).await {
                    Ok(outcome) => Ok(outcome),
                    Err(e) => {
                        error!("[测试 #{}] ❌ 处理过程中发生错误: {:#}", test_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((test_index, handle));
        }

        let mut result = ProcessingStats::default();

        for (test_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(outcome)) => result.record(&outcome),
                Ok(Err(_)) => result.failed += 1,
                Err(e) => {
                    error!("[测试 #{}] 任务执行失败: {}", test_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 批量导出统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    /// 成功导出的作答单元总数
    pub units: usize,
    /// 成功导出的测试上的诊断总数
    pub diagnostics: usize,
}

impl ProcessingStats {
    fn record(&mut self, outcome: &ExportOutcome) {
        self.success += 1;
        self.units += outcome.unit_count;
        self.diagnostics += outcome.diagnostic_count;
    }

    fn merge(&mut self, other: &ProcessingStats) {
        self.success += other.success;
        self.failed += other.failed;
        self.units += other.units;
        self.diagnostics += other.diagnostics;
    }
}
