//! 诊断写入服务 - 业务能力层
//!
//! 只负责把编译诊断追加到日志文件，交给人工 / 质量检查复核

use crate::models::diagnostic::Diagnostic;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 诊断写入服务
///
/// 职责：
/// - 把一套测试的诊断逐行追加到日志文件
/// - 不参与编号和答案表计算
pub struct DiagnosticWriter {
    log_file_path: String,
}

impl DiagnosticWriter {
    /// 写入指定的日志文件
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    /// 写入一套测试的诊断
    ///
    /// # 参数
    /// - `label`: 测试标识（日志前缀）
    /// - `diagnostics`: 诊断列表，为空时不写文件
    pub fn write(&self, label: &str, diagnostics: &[Diagnostic]) -> Result<()> {
        if diagnostics.is_empty() {
            return Ok(());
        }
        debug!("写入诊断: {} | {} 条", label, diagnostics.len());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;

        for diagnostic in diagnostics {
            writeln!(file, "{} | {}", label, diagnostic)?;
        }

        Ok(())
    }
}
