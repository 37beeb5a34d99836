//! 编译流程 - 流程层
//!
//! 核心职责：定义"一套测试"的完整编译流程
//!
//! 流程顺序：
//! 1. 编号（numberer）→ 题号索引
//! 2. 答案表编译（answer_key_compiler）→ 规范答案表
//! 3. 结构诊断（gap_extractor）+ 答案诊断 → 交给质量检查
//!
//! 作者预览、导出、计数、判分都经过这里，不允许各自重新实现编号。

use crate::config::Config;
use crate::models::answer_key::AnswerKey;
use crate::models::bundle::ExportBundle;
use crate::models::catalog::UnitRule;
use crate::models::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::index::QuestionIndex;
use crate::models::question::Test;
use crate::models::report::{ScoreReport, Submission};
use crate::services::{
    build_question_index, compile_with_diagnostics, scan_gaps, score_submission,
};
use crate::workflow::test_ctx::TestCtx;
use tracing::{debug, info, warn};

/// 一套测试的编译产物
///
/// 每次都从当前快照重新计算，下游只读不改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTest {
    pub title: String,
    pub question_index: QuestionIndex,
    pub answer_key: AnswerKey,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledTest {
    /// 作答单元总数 N
    pub fn question_count(&self) -> usize {
        self.question_index.len()
    }

    /// 用本次编译出的答案表判分
    pub fn score(&self, submission: &Submission) -> ScoreReport {
        score_submission(&self.answer_key, submission)
    }

    /// 生成导出包
    pub fn to_bundle(&self) -> ExportBundle {
        ExportBundle {
            title: self.title.clone(),
            question_count: self.question_count(),
            question_index: self.question_index.clone(),
            answer_key: self.answer_key.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// 编译流程
///
/// - 只编排，不持有任何测试数据
/// - 纯计算，可以在多个测试之间并发使用
#[derive(Debug, Clone, Default)]
pub struct CompileFlow {
    verbose_logging: bool,
}

impl CompileFlow {
    /// 创建新的编译流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    /// 编译（不输出日志）
    pub fn compile(&self, test: &Test) -> CompiledTest {
        let question_index = build_question_index(test);
        let (answer_key, answer_diagnostics) = compile_with_diagnostics(test, &question_index);

        let mut diagnostics = structural_diagnostics(test, &question_index);
        diagnostics.extend(answer_diagnostics);
        diagnostics.sort_by_key(|d| (d.section_index, d.question_index, d.global_number));

        CompiledTest {
            title: test.title.clone(),
            question_index,
            answer_key,
            diagnostics,
        }
    }

    /// 编译并输出日志
    pub fn run(&self, test: &Test, ctx: &TestCtx) -> CompiledTest {
        info!(
            "{} 🔢 开始编号: {} 个 Section, {} 道题目",
            ctx,
            test.sections.len(),
            test.question_total()
        );

        let compiled = self.compile(test);

        info!(
            "{} ✓ 编号完成: 共 {} 个作答单元, 答案表 {} 条",
            ctx,
            compiled.question_count(),
            compiled.answer_key.len()
        );

        if self.verbose_logging {
            for entry in compiled.question_index.iter() {
                debug!(
                    "{}   题号 {} → Section {} 第 {} 题 {} {:?}",
                    ctx,
                    entry.global_number,
                    entry.section_index + 1,
                    entry.question_index + 1,
                    entry.question_type,
                    entry.local_unit_id
                );
            }
        }

        for diagnostic in &compiled.diagnostics {
            warn!("{} ⚠️ {}", ctx, diagnostic);
        }

        compiled
    }
}

/// 题目结构诊断：重复 / 无效的填空标记，没有作答单元的题目
fn structural_diagnostics(test: &Test, index: &QuestionIndex) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (section_index, section) in test.sections.iter().enumerate() {
        for (question_index, question) in section.questions.iter().enumerate() {
            if question.question_type.unit_rule() == UnitRule::GapMarkers {
                let scan = scan_gaps(question.gap_fields());
                diagnostics.extend(scan.duplicates.into_iter().map(|id| {
                    Diagnostic::new(
                        section_index,
                        question_index,
                        DiagnosticKind::DuplicateGapId { id },
                    )
                }));
                diagnostics.extend(scan.malformed.into_iter().map(|marker| {
                    Diagnostic::new(
                        section_index,
                        question_index,
                        DiagnosticKind::MalformedGapMarker { marker },
                    )
                }));
            }

            if index.units_of(section_index, question_index).is_empty() {
                diagnostics.push(Diagnostic::new(
                    section_index,
                    question_index,
                    DiagnosticKind::NoUnits,
                ));
            }
        }
    }

    diagnostics
}
