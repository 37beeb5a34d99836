//! 导出日志
//!
//! 日志文件依次记录：本次导出的目录配置、各测试的诊断（由 `DiagnosticWriter` 追加）、最终汇总。
//! 终端只输出计划和批次进度。

use crate::config::Config;
use crate::orchestrator::ProcessingStats;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 重建日志文件，写入时间和输入 / 输出目录
pub fn init_log_file(config: &Config) -> Result<()> {
    let rule = "=".repeat(60);
    let header = format!(
        "{rule}\n答案导出日志 - {}\n输入目录: {}\n输出目录: {}\n{rule}\n\n",
        timestamp(),
        config.test_folder,
        config.output_folder,
    );
    fs::write(&config.output_log_file, header)
        .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))
}

/// 导出计划：测试数与批次划分
pub fn log_export_plan(total_tests: usize, batch_size: usize) {
    let batch_size = batch_size.max(1);
    info!(
        "📋 共 {} 套测试，分 {} 批导出，每批最多 {} 套",
        total_tests,
        total_tests.div_ceil(batch_size),
        batch_size
    );
}

/// 批次完成，附带截至目前的累计结果
pub fn log_batch_progress(batch_num: usize, total_batches: usize, so_far: &ProcessingStats) {
    info!(
        "📦 第 {}/{} 批完成 | 成功 {}, 失败 {}, 作答单元 {}, 诊断 {}",
        batch_num, total_batches, so_far.success, so_far.failed, so_far.units, so_far.diagnostics
    );
}

/// 最终汇总：终端输出，同时追加到日志文件末尾
pub fn write_export_summary(stats: &ProcessingStats, log_file_path: &str) -> Result<()> {
    let summary = summary_line(stats);
    info!("{}", "=".repeat(60));
    info!("📊 {}", summary);
    info!("日志已保存至: {}", log_file_path);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
    writeln!(file, "\n[{}] {}", timestamp(), summary)?;
    Ok(())
}

fn summary_line(stats: &ProcessingStats) -> String {
    format!(
        "导出完成 {}/{} 套, 失败 {} 套 | 作答单元 {} 个, 诊断 {} 条",
        stats.success, stats.total, stats.failed, stats.units, stats.diagnostics
    )
}

/// 截断长文本用于日志显示（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
