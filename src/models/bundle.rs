use crate::models::answer_key::AnswerKey;
use crate::models::diagnostic::Diagnostic;
use crate::models::index::QuestionIndex;
use serde::{Deserialize, Serialize};

/// 导出包：写入答案文件，也原样嵌入部署产物的脚本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub title: String,
    pub question_count: usize,
    pub question_index: QuestionIndex,
    pub answer_key: AnswerKey,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}
