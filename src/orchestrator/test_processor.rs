//! 单套测试处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **编译**：委托 `CompileFlow` 生成题号索引和答案表
//! 2. **导出**：把导出包写成 `<文件名>.answers.json`
//! 3. **诊断**：追加到日志文件
//! 4. **统计输出**：返回单元数和诊断数，供批量汇总

use crate::config::Config;
use crate::models::question::Test;
use crate::services::DiagnosticWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::{CompileFlow, CompiledTest, TestCtx};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 单套测试的导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub output_path: PathBuf,
    pub unit_count: usize,
    pub diagnostic_count: usize,
}

/// 处理单套测试
///
/// # 参数
/// - `test`: 测试数据
/// - `test_index`: 测试索引（用于日志）
/// - `config`: 配置
pub async fn process_test(test: Test, test_index: usize, config: &Config) -> Result<ExportOutcome> {
    let ctx = TestCtx::new(
        test_index,
        truncate_text(&test.title, 40),
        test.file_path.clone(),
    );
    log_test_start(&ctx, &test);

    // 纯计算，复用同一条流程
    let compiled = CompileFlow::new(config).run(&test, &ctx);

    DiagnosticWriter::with_path(&config.output_log_file)
        .write(&ctx.to_string(), &compiled.diagnostics)
        .with_context(|| format!("无法写入诊断: {}", config.output_log_file))?;

    let output_path = output_path_for(&test, test_index, &config.output_folder);
    write_bundle(&compiled, &output_path).await?;

    log_test_complete(&ctx, &compiled, &output_path);

    Ok(ExportOutcome {
        output_path,
        unit_count: compiled.question_count(),
        diagnostic_count: compiled.diagnostics.len(),
    })
}

/// 导出文件路径：优先使用源文件名（不含扩展名）
pub(crate) fn output_path_for(test: &Test, test_index: usize, output_folder: &str) -> PathBuf {
    let stem = test
        .file_path
        .as_deref()
        .and_then(|p| Path::new(p).file_stem())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("test_{}", test_index));

    Path::new(output_folder).join(format!("{}.answers.json", stem))
}

/// 写出导出包
async fn write_bundle(compiled: &CompiledTest, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("无法创建目录: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&compiled.to_bundle())?;
    fs::write(output_path, json)
        .await
        .with_context(|| format!("无法写入文件: {}", output_path.display()))?;

    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_test_start(ctx: &TestCtx, test: &Test) {
    info!("{} 开始处理", ctx);
    if let Some(source) = &ctx.source {
        info!("{} 来源: {}", ctx, source);
    }
    info!("{} 题目总数: {}", ctx, test.question_total());
}

fn log_test_complete(ctx: &TestCtx, compiled: &CompiledTest, output_path: &Path) {
    info!(
        "{} 统计: 作答单元 {}, 诊断 {}",
        ctx,
        compiled.question_count(),
        compiled.diagnostics.len()
    );
    info!("{} ✅ 已导出: {}\n", ctx, output_path.display());
}
