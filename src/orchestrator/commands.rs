//! 单文件命令 - 编排层
//!
//! 作者预览、计数、判分三个入口，全部走同一条 `CompileFlow`

use crate::config::Config;
use crate::models::bundle::ExportBundle;
use crate::models::report::ScoreReport;
use crate::models::{load_submission, load_test};
use crate::workflow::{CompileFlow, TestCtx};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// 编译单个测试文件，返回导出包（作者预览）
pub async fn compile_file(path: &Path, config: &Config) -> Result<ExportBundle> {
    let test = load_test(path).await?;
    let ctx = TestCtx::new(1, test.title.clone(), test.file_path.clone());
    Ok(CompileFlow::new(config).run(&test, &ctx).to_bundle())
}

/// 统计单个测试文件的作答单元数
pub async fn count_file(path: &Path, config: &Config) -> Result<usize> {
    let test = load_test(path).await?;
    Ok(CompileFlow::new(config).compile(&test).question_count())
}

/// 用测试文件编译出的答案表给提交判分
pub async fn score_files(test_path: &Path, submission_path: &Path, config: &Config) -> Result<ScoreReport> {
    let test = load_test(test_path).await?;
    let submission = load_submission(submission_path).await?;
    let ctx = TestCtx::new(1, test.title.clone(), test.file_path.clone());

    let compiled = CompileFlow::new(config).run(&test, &ctx);
    let report = compiled.score(&submission);
    info!("{} 📝 得分: {}", ctx, report);

    Ok(report)
}
