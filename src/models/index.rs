use crate::models::catalog::QuestionType;
use serde::{Deserialize, Serialize};

/// 多选组内的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPosition {
    /// 组内偏移，0 表示组的起始题号
    pub offset: u32,
    /// 组大小（= requiredCount）
    pub size: u32,
}

/// 题号索引条目：一个作答单元对应一条
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionIndexEntry {
    /// 从 1 开始的全局题号
    pub global_number: u32,
    pub section_index: usize,
    pub question_index: usize,
    /// 填空编号或子项 id；单答案题和多选组为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_unit_id: Option<String>,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupPosition>,
}

impl QuestionIndexEntry {
    /// 是否为多选组的起始题号
    pub fn is_group_start(&self) -> bool {
        matches!(self.group, Some(GroupPosition { offset: 0, .. }))
    }
}

/// 题号索引
///
/// 条目按全局题号升序排列，题号恰好是 `1..=N`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionIndex {
    entries: Vec<QuestionIndexEntry>,
}

impl QuestionIndex {
    pub fn new(entries: Vec<QuestionIndexEntry>) -> Self {
        Self { entries }
    }

    /// 作答单元总数 N
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QuestionIndexEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionIndexEntry> {
        self.entries.iter()
    }

    /// 按全局题号取条目
    pub fn get(&self, global_number: u32) -> Option<&QuestionIndexEntry> {
        let position = usize::try_from(global_number).ok()?.checked_sub(1)?;
        self.entries.get(position)
    }

    /// 某道题占用的全部条目
    pub fn units_of(&self, section_index: usize, question_index: usize) -> Vec<&QuestionIndexEntry> {
        self.entries
            .iter()
            .filter(|e| e.section_index == section_index && e.question_index == question_index)
            .collect()
    }
}

impl<'a> IntoIterator for &'a QuestionIndex {
    type Item = &'a QuestionIndexEntry;
    type IntoIter = std::slice::Iter<'a, QuestionIndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
