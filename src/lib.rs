//! # IELTS Test Compiler
//!
//! 把作者录入的雅思模考题目编译成：
//! - 连续的全局题号索引（`QuestionIndex`）
//! - 按题号寻址的规范答案表（`AnswerKey`）
//! - 对学生提交重新执行的判分（`ScoreReport`）
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/catalog` - 题型目录，唯一的题型事实来源
//! - `models/question` - Test / Section / Question，入口处完成字段归一化
//! - `models/loaders` - 读取 JSON / TOML 测试和提交
//!
//! ### ② 业务能力层（Services）
//! - `GapExtractor` - 解析 `___N___` 填空标记
//! - `Numberer` - 分配全局题号
//! - `AnswerKeyCompiler` - 生成规范答案表
//! - `Scorer` - 判分
//!
//! ### ③ 流程层（Workflow）
//! - `CompileFlow` - 编号 → 答案表 → 诊断，所有调用方共用
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量导出，管理并发
//! - `orchestrator/test_processor` - 单套测试导出
//! - `orchestrator/commands` - 预览 / 计数 / 判分
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    AnswerKey, AnswerKeyEntry, Diagnostic, ExportBundle, Question, QuestionIndex,
    QuestionIndexEntry, QuestionType, Response, ScoreReport, Section, Submission, Test,
};
pub use orchestrator::App;
pub use workflow::{CompileFlow, CompiledTest, TestCtx};

/// 用默认流程编译一套测试
pub fn compile(test: &Test) -> CompiledTest {
    CompileFlow::default().compile(test)
}
