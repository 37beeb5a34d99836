//! 编译诊断
//!
//! 不影响编译结果，只交给外部质量检查使用。

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// 单元没有录入答案
    MissingAnswer,
    /// 同一道题里填空编号重复
    DuplicateGapId { id: u32 },
    /// 形如 `___abc___` / `___0___` 的无效标记
    MalformedGapMarker { marker: String },
    /// 题目没有产生任何作答单元
    NoUnits,
    /// 多选组正确选项数与需选数量不一致
    AcceptedCountMismatch { accepted: usize, required: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub section_index: usize,
    pub question_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_number: Option<u32>,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(section_index: usize, question_index: usize, kind: DiagnosticKind) -> Self {
        Self {
            section_index,
            question_index,
            global_number: None,
            kind,
        }
    }

    pub fn at(mut self, global_number: u32) -> Self {
        self.global_number = Some(global_number);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section {} 第 {} 题",
            self.section_index + 1,
            self.question_index + 1
        )?;
        if let Some(number) = self.global_number {
            write!(f, " (题号 {})", number)?;
        }
        match &self.kind {
            DiagnosticKind::MissingAnswer => write!(f, ": 未录入答案"),
            DiagnosticKind::DuplicateGapId { id } => write!(f, ": 填空编号 {} 重复", id),
            DiagnosticKind::MalformedGapMarker { marker } => {
                write!(f, ": 无效的填空标记 {}", marker)
            }
            DiagnosticKind::NoUnits => write!(f, ": 没有任何作答单元"),
            DiagnosticKind::AcceptedCountMismatch { accepted, required } => write!(
                f,
                ": 正确选项 {} 个，但需选 {} 个",
                accepted, required
            ),
        }
    }
}
