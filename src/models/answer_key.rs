use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 多选组在 JSON 中的类型标记，固定为 `"multiple"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultipleTag {
    #[default]
    #[serde(rename = "multiple")]
    Multiple,
}

/// 多选组答案：`{type: "multiple", answers: [...], count: k}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSelectAnswer {
    #[serde(rename = "type")]
    pub kind: MultipleTag,
    pub answers: Vec<String>,
    pub count: u32,
}

/// 答案表条目
///
/// 单答案序列化为字符串数组，多选组序列化为带 `type` 的对象。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKeyEntry {
    Single(Vec<String>),
    Multiple(MultiSelectAnswer),
}

impl AnswerKeyEntry {
    pub fn single(alternates: Vec<String>) -> Self {
        AnswerKeyEntry::Single(alternates)
    }

    pub fn multiple(answers: Vec<String>, count: u32) -> Self {
        AnswerKeyEntry::Multiple(MultiSelectAnswer {
            kind: MultipleTag::Multiple,
            answers,
            count,
        })
    }

    /// 占用的题号数
    pub fn span(&self) -> u32 {
        match self {
            AnswerKeyEntry::Single(_) => 1,
            AnswerKeyEntry::Multiple(group) => group.count,
        }
    }

    /// 展示用正确答案
    pub fn display(&self) -> String {
        match self {
            AnswerKeyEntry::Single(alternates) => alternates.join(" / "),
            AnswerKeyEntry::Multiple(group) => group.answers.join(", "),
        }
    }

    /// 未填写答案（`[""]`）
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerKeyEntry::Single(alternates) => alternates.iter().all(|a| a.is_empty()),
            AnswerKeyEntry::Multiple(group) => group.answers.is_empty(),
        }
    }
}

/// 规范答案表：全局题号 → 答案
///
/// 多选组只在起始题号上出现一次。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(BTreeMap<u32, AnswerKeyEntry>);

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, global_number: u32, entry: AnswerKeyEntry) {
        self.0.insert(global_number, entry);
    }

    pub fn get(&self, global_number: u32) -> Option<&AnswerKeyEntry> {
        self.0.get(&global_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerKeyEntry)> {
        self.0.iter().map(|(n, e)| (*n, e))
    }

    /// 条目数（多选组算一条）
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 覆盖的题号总数 N
    pub fn total_units(&self) -> u32 {
        self.0.values().map(AnswerKeyEntry::span).sum()
    }
}

impl FromIterator<(u32, AnswerKeyEntry)> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = (u32, AnswerKeyEntry)>>(iter: I) -> Self {
        AnswerKey(iter.into_iter().collect())
    }
}
