//! 题型目录（QuestionCatalog）
//!
//! 所有题型的唯一事实来源：
//! - 答案存储形态（`AnswerShape`）
//! - 作答单元计数规则（`UnitRule`）
//!
//! 编号、答案表、计数、判分全部从这里查表，任何调用方都不应再按题型自行 switch。

use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 多选题未声明需选数量时的默认值
pub const DEFAULT_REQUIRED_COUNT: u32 = 2;

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionType {
    /// 单选
    MultipleChoice,
    /// True / False / Not Given
    TrueFalseNotGiven,
    /// Yes / No / Not Given
    YesNoNotGiven,
    /// 多选（一组占多个题号）
    MultipleChoiceMultiple,
    /// 笔记填空
    NoteCompletion,
    /// 表单填空
    FormCompletion,
    /// 表格填空
    TableCompletion,
    /// 流程图填空
    FlowChartCompletion,
    /// 摘要填空（自由填写）
    SummaryCompletion,
    /// 摘要填空（选词）
    SummaryCompletionWordBank,
    /// 句子填空
    SentenceCompletion,
    /// 简答
    ShortAnswer,
    /// 信息匹配
    MatchingInformation,
    /// 段落标题匹配
    MatchingHeadings,
    /// 特征匹配
    MatchingFeatures,
    /// 句尾匹配
    MatchingSentenceEndings,
    /// 陈述 / 人物匹配
    MatchingStatements,
    /// 平面图 / 地图 / 示意图标注
    PlanMapDiagram,
    /// 单空填空
    FillInBlank,
}

/// 答案存储形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// `correctAnswer` 单个字符串
    Direct,
    /// `correctAnswers` 作为同义答案数组
    Alternates,
    /// `correctAnswers` 作为 局部ID → 答案 的映射
    Keyed,
    /// `correctAnswers` + `requiredCount` 的多选组
    MultiSelect,
}

/// 作答单元计数规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRule {
    /// 恰好一个单元
    Single,
    /// 文本中的 `___N___` 标记，按局部ID升序
    GapMarkers,
    /// 显式子项列表，保持作者顺序
    ItemList,
    /// 多选组，占 `requiredCount` 个连续题号
    Group,
}

/// 题型标签表（含历史别名）
static TYPE_TAGS: phf::Map<&'static str, QuestionType> = phf_map! {
    "multiple-choice" => QuestionType::MultipleChoice,
    "mcq" => QuestionType::MultipleChoice,
    "true-false-not-given" => QuestionType::TrueFalseNotGiven,
    "tfng" => QuestionType::TrueFalseNotGiven,
    "yes-no-not-given" => QuestionType::YesNoNotGiven,
    "ynng" => QuestionType::YesNoNotGiven,
    "multiple-choice-multiple" => QuestionType::MultipleChoiceMultiple,
    "multiple-choice-multi" => QuestionType::MultipleChoiceMultiple,
    "note-completion" => QuestionType::NoteCompletion,
    "notes-completion" => QuestionType::NoteCompletion,
    "form-completion" => QuestionType::FormCompletion,
    "table-completion" => QuestionType::TableCompletion,
    "flow-chart-completion" => QuestionType::FlowChartCompletion,
    "flowchart-completion" => QuestionType::FlowChartCompletion,
    "summary-completion" => QuestionType::SummaryCompletion,
    "summary-completion-word-bank" => QuestionType::SummaryCompletionWordBank,
    "summary-word-bank" => QuestionType::SummaryCompletionWordBank,
    "sentence-completion" => QuestionType::SentenceCompletion,
    "short-answer" => QuestionType::ShortAnswer,
    "matching-information" => QuestionType::MatchingInformation,
    "matching-headings" => QuestionType::MatchingHeadings,
    "matching-features" => QuestionType::MatchingFeatures,
    "matching-sentence-endings" => QuestionType::MatchingSentenceEndings,
    "matching-statements" => QuestionType::MatchingStatements,
    "matching-people" => QuestionType::MatchingStatements,
    "plan-map-diagram" => QuestionType::PlanMapDiagram,
    "diagram-labelling" => QuestionType::PlanMapDiagram,
    "map-labelling" => QuestionType::PlanMapDiagram,
    "fill-in-blank" => QuestionType::FillInBlank,
    "fill-in-the-blank" => QuestionType::FillInBlank,
};

impl QuestionType {
    /// 全部题型
    pub const ALL: [QuestionType; 19] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalseNotGiven,
        QuestionType::YesNoNotGiven,
        QuestionType::MultipleChoiceMultiple,
        QuestionType::NoteCompletion,
        QuestionType::FormCompletion,
        QuestionType::TableCompletion,
        QuestionType::FlowChartCompletion,
        QuestionType::SummaryCompletion,
        QuestionType::SummaryCompletionWordBank,
        QuestionType::SentenceCompletion,
        QuestionType::ShortAnswer,
        QuestionType::MatchingInformation,
        QuestionType::MatchingHeadings,
        QuestionType::MatchingFeatures,
        QuestionType::MatchingSentenceEndings,
        QuestionType::MatchingStatements,
        QuestionType::PlanMapDiagram,
        QuestionType::FillInBlank,
    ];

    /// 规范标签（序列化时使用）
    pub fn tag(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalseNotGiven => "true-false-not-given",
            QuestionType::YesNoNotGiven => "yes-no-not-given",
            QuestionType::MultipleChoiceMultiple => "multiple-choice-multiple",
            QuestionType::NoteCompletion => "note-completion",
            QuestionType::FormCompletion => "form-completion",
            QuestionType::TableCompletion => "table-completion",
            QuestionType::FlowChartCompletion => "flow-chart-completion",
            QuestionType::SummaryCompletion => "summary-completion",
            QuestionType::SummaryCompletionWordBank => "summary-completion-word-bank",
            QuestionType::SentenceCompletion => "sentence-completion",
            QuestionType::ShortAnswer => "short-answer",
            QuestionType::MatchingInformation => "matching-information",
            QuestionType::MatchingHeadings => "matching-headings",
            QuestionType::MatchingFeatures => "matching-features",
            QuestionType::MatchingSentenceEndings => "matching-sentence-endings",
            QuestionType::MatchingStatements => "matching-statements",
            QuestionType::PlanMapDiagram => "plan-map-diagram",
            QuestionType::FillInBlank => "fill-in-blank",
        }
    }

    /// 从标签解析题型（大小写、首尾空白、下划线不敏感）
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_lowercase().replace('_', "-");
        TYPE_TAGS.get(normalized.as_str()).copied()
    }

    /// 答案存储形态
    pub fn answer_shape(self) -> AnswerShape {
        match self.unit_rule() {
            UnitRule::GapMarkers | UnitRule::ItemList => AnswerShape::Keyed,
            UnitRule::Group => AnswerShape::MultiSelect,
            UnitRule::Single => match self {
                QuestionType::FillInBlank => AnswerShape::Alternates,
                _ => AnswerShape::Direct,
            },
        }
    }

    /// 作答单元计数规则
    pub fn unit_rule(self) -> UnitRule {
        match self {
            QuestionType::MultipleChoice
            | QuestionType::TrueFalseNotGiven
            | QuestionType::YesNoNotGiven
            | QuestionType::FillInBlank => UnitRule::Single,
            QuestionType::MultipleChoiceMultiple => UnitRule::Group,
            QuestionType::NoteCompletion
            | QuestionType::FormCompletion
            | QuestionType::TableCompletion
            | QuestionType::FlowChartCompletion
            | QuestionType::SummaryCompletion
            | QuestionType::SummaryCompletionWordBank => UnitRule::GapMarkers,
            QuestionType::SentenceCompletion
            | QuestionType::ShortAnswer
            | QuestionType::MatchingInformation
            | QuestionType::MatchingHeadings
            | QuestionType::MatchingFeatures
            | QuestionType::MatchingSentenceEndings
            | QuestionType::MatchingStatements
            | QuestionType::PlanMapDiagram => UnitRule::ItemList,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for QuestionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        QuestionType::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("未知题型: {}", tag)))
    }
}
