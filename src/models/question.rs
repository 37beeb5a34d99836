use crate::models::catalog::{QuestionType, DEFAULT_REQUIRED_COUNT};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// 一套完整的测试（按顺序排列的 Section）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub sections: Vec<Section>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl Test {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 按 (section, question) 下标取题目
    pub fn question(&self, section_index: usize, question_index: usize) -> Option<&Question> {
        self.sections
            .get(section_index)?
            .questions
            .get(question_index)
    }

    /// 题目总数（不是作答单元数）
    pub fn question_total(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSection")]
pub struct Section {
    pub title: String,
    /// 音频 / 文章等外部资源引用，编译器不解析
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub questions: Vec<Question>,
}

/// 单道题目
///
/// 各题型的字段并不全部使用，具体读取哪些字段由 [`QuestionType`] 的目录条目决定。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawQuestion")]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 题干 / 说明文字
    pub text: String,
    /// 含 `___N___` 标记的正文（笔记、表单、摘要）
    pub content: String,
    /// 表格单元格
    pub rows: Vec<Vec<String>>,
    /// 流程图步骤
    pub steps: Vec<String>,
    pub items: Vec<SubItem>,
    pub options: Vec<OptionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<AnswerStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_count: Option<u32>,
}

impl Question {
    /// 所有可能包含填空标记的文本字段：正文 → 表格 → 流程图
    pub fn gap_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.content.as_str())
            .chain(self.rows.iter().flatten().map(String::as_str))
            .chain(self.steps.iter().map(String::as_str))
    }

    /// 多选题需选数量
    pub fn required_count(&self) -> u32 {
        self.required_count.unwrap_or(DEFAULT_REQUIRED_COUNT)
    }

    /// 按局部ID查找子项
    pub fn item_by_local_id(&self, local_id: &str) -> Option<&SubItem> {
        self.items
            .iter()
            .enumerate()
            .find(|(ordinal, item)| item.local_id(*ordinal) == local_id)
            .map(|(_, item)| item)
    }
}

/// 结构化子项（匹配题陈述、简答小题、句子等）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawItemFields")]
pub struct SubItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AnswerText>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<AnswerValue>,
}

impl SubItem {
    /// 局部ID：作者给出的 id，缺省时使用从 1 开始的序号
    pub fn local_id(&self, ordinal: usize) -> String {
        match &self.id {
            Some(id) if !id.as_str().trim().is_empty() => id.as_str().trim().to_string(),
            _ => (ordinal + 1).to_string(),
        }
    }
}

/// 归一化后的选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: String,
    pub text: String,
}

/// 答案文本
///
/// 作者录入的数据里答案可能是字符串、数字、布尔或 null，统一收敛为字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerText(pub String);

impl AnswerText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for AnswerText {
    fn from(value: &str) -> Self {
        AnswerText(value.to_string())
    }
}

impl<'de> Deserialize<'de> for AnswerText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        use std::fmt;

        struct AnswerTextVisitor;

        impl<'de> Visitor<'de> for AnswerTextVisitor {
            type Value = AnswerText;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, boolean or null answer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value.to_string()))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText(value.to_string()))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText::default())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(AnswerText::default())
            }
        }

        deserializer.deserialize_any(AnswerTextVisitor)
    }
}

/// 单个单元的答案：一个值或一组同义答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(AnswerText),
    Many(Vec<AnswerText>),
}

impl AnswerValue {
    pub fn alternates(&self) -> Vec<&str> {
        match self {
            AnswerValue::One(text) => vec![text.as_str()],
            AnswerValue::Many(texts) => texts.iter().map(AnswerText::as_str).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::One(text) => text.is_blank(),
            AnswerValue::Many(texts) => texts.iter().all(AnswerText::is_blank),
        }
    }
}

/// `correctAnswers` 的两种存储方式
///
/// 单独一个标量按只有一个元素的数组读入。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerStore {
    /// 数组：同义答案，或多选题的正确选项
    List(Vec<AnswerText>),
    /// 局部ID（填空编号 / 子项 id）→ 答案
    Keyed(BTreeMap<String, AnswerValue>),
}

impl AnswerStore {
    /// 按局部ID查找
    ///
    /// 键先按原样比较，再去掉首尾空白比较，数字键按数值比较（`"01"` 对应填空 1）。
    pub fn lookup(&self, local_id: &str) -> Option<&AnswerValue> {
        let AnswerStore::Keyed(map) = self else {
            return None;
        };
        let numeric = local_id.trim().parse::<u32>().ok();

        map.get(local_id)
            .or_else(|| map.iter().find(|(k, _)| k.trim() == local_id).map(|(_, v)| v))
            .or_else(|| {
                let numeric = numeric?;
                map.iter()
                    .find(|(k, _)| k.trim().parse::<u32>().ok() == Some(numeric))
                    .map(|(_, v)| v)
            })
    }

    /// 所有答案按存储顺序展平
    pub fn flatten(&self) -> Vec<&str> {
        match self {
            AnswerStore::List(texts) => texts.iter().map(AnswerText::as_str).collect(),
            AnswerStore::Keyed(map) => map.values().flat_map(AnswerValue::alternates).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStore {
    List(Vec<AnswerText>),
    Keyed(BTreeMap<String, AnswerValue>),
    One(AnswerText),
}

impl<'de> Deserialize<'de> for AnswerStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawStore::deserialize(deserializer)? {
            RawStore::List(list) => AnswerStore::List(list),
            RawStore::Keyed(map) => AnswerStore::Keyed(map),
            RawStore::One(text) => AnswerStore::List(vec![text]),
        })
    }
}

// ========== 入口归一化 ==========
//
// 作者数据里同一含义常有多个字段名，且可能同时出现；
// 先按原始字段读入，再取第一个非空值。

/// 文本字段：标量转字符串，null 视为空
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AnswerText>::deserialize(deserializer)?
        .map(|text| text.0)
        .unwrap_or_default())
}

/// 列表字段：null 视为空列表
fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_text<const N: usize>(candidates: [Option<AnswerText>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|text| !text.is_blank())
        .map(|text| text.0)
        .unwrap_or_default()
}

fn first_non_empty<T, const N: usize>(candidates: [Option<Vec<T>>; N]) -> Vec<T> {
    candidates
        .into_iter()
        .flatten()
        .find(|list| !list.is_empty())
        .unwrap_or_default()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    #[serde(default)]
    title: Option<AnswerText>,
    #[serde(default)]
    media: Option<AnswerText>,
    #[serde(default)]
    audio: Option<AnswerText>,
    #[serde(default)]
    passage: Option<AnswerText>,
    #[serde(default, deserialize_with = "deserialize_list")]
    questions: Vec<Question>,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        let media = first_text([raw.media, raw.audio, raw.passage]);
        Section {
            title: first_text([raw.title]),
            media: (!media.is_empty()).then_some(media),
            questions: raw.questions,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(default)]
    id: Option<AnswerText>,
    #[serde(rename = "type")]
    question_type: QuestionType,
    #[serde(default)]
    text: Option<AnswerText>,
    #[serde(default)]
    question: Option<AnswerText>,
    #[serde(default)]
    instructions: Option<AnswerText>,
    #[serde(default)]
    content: Option<AnswerText>,
    #[serde(default)]
    rows: Option<Vec<Option<Vec<AnswerText>>>>,
    #[serde(default)]
    steps: Option<Vec<AnswerText>>,
    #[serde(default)]
    items: Option<Vec<RawSubItem>>,
    #[serde(default)]
    statements: Option<Vec<RawSubItem>>,
    #[serde(default)]
    sentences: Option<Vec<RawSubItem>>,
    #[serde(default)]
    question_list: Option<Vec<RawSubItem>>,
    #[serde(default)]
    sub_questions: Option<Vec<RawSubItem>>,
    #[serde(default)]
    paragraphs: Option<Vec<RawSubItem>>,
    #[serde(default)]
    options: Option<RawOptions>,
    #[serde(default)]
    categories: Option<RawOptions>,
    #[serde(default)]
    correct_answer: Option<AnswerValue>,
    #[serde(default)]
    correct_answers: Option<AnswerStore>,
    #[serde(default, deserialize_with = "deserialize_required_count")]
    required_count: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_required_count")]
    number_of_answers: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_required_count")]
    correct_count: Option<u32>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let id = first_text([raw.id]);
        let items = first_non_empty([
            raw.items,
            raw.statements,
            raw.sentences,
            raw.question_list,
            raw.sub_questions,
            raw.paragraphs,
        ]);
        let options = [raw.options, raw.categories]
            .into_iter()
            .flatten()
            .map(normalize_options)
            .find(|options| !options.is_empty())
            .unwrap_or_default();

        Question {
            id: (!id.is_empty()).then_some(id),
            question_type: raw.question_type,
            text: first_text([raw.text, raw.question, raw.instructions]),
            content: first_text([raw.content]),
            rows: raw
                .rows
                .unwrap_or_default()
                .into_iter()
                .map(|row| row.unwrap_or_default().into_iter().map(|cell| cell.0).collect())
                .collect(),
            steps: raw.steps.unwrap_or_default().into_iter().map(|s| s.0).collect(),
            items: items.into_iter().map(SubItem::from).collect(),
            options,
            correct_answer: raw.correct_answer,
            correct_answers: raw.correct_answers,
            required_count: raw
                .required_count
                .or(raw.number_of_answers)
                .or(raw.correct_count),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItemFields {
    #[serde(default)]
    id: Option<AnswerText>,
    #[serde(default)]
    text: Option<AnswerText>,
    #[serde(default)]
    question: Option<AnswerText>,
    #[serde(default)]
    statement: Option<AnswerText>,
    #[serde(default)]
    answer: Option<AnswerValue>,
    #[serde(default)]
    correct_answer: Option<AnswerValue>,
}

impl From<RawItemFields> for SubItem {
    fn from(raw: RawItemFields) -> Self {
        let answer = [raw.answer, raw.correct_answer]
            .into_iter()
            .flatten()
            .find(|answer| !answer.is_blank());
        SubItem {
            id: raw.id.filter(|id| !id.is_blank()),
            text: first_text([raw.text, raw.question, raw.statement]),
            answer,
        }
    }
}

/// 子项可以只写文本
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubItem {
    Text(AnswerText),
    Item(RawItemFields),
}

impl From<RawSubItem> for SubItem {
    fn from(raw: RawSubItem) -> Self {
        match raw {
            RawSubItem::Text(text) => SubItem {
                text: text.0,
                ..Default::default()
            },
            RawSubItem::Item(fields) => fields.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Text(AnswerText),
    Item {
        #[serde(default)]
        id: Option<AnswerText>,
        #[serde(default)]
        text: Option<AnswerText>,
        #[serde(default)]
        label: Option<AnswerText>,
        #[serde(default)]
        value: Option<AnswerText>,
    },
}

/// 选项既可能是数组也可能是对象，统一成 `{id, text}` 列表
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptions {
    List(Vec<RawOption>),
    Keyed(BTreeMap<String, AnswerText>),
}

fn normalize_options(raw: RawOptions) -> Vec<OptionItem> {
    match raw {
        RawOptions::List(list) => list
            .into_iter()
            .enumerate()
            .map(|(ordinal, option)| match option {
                RawOption::Text(text) => OptionItem {
                    id: option_letter(ordinal),
                    text: text.0,
                },
                RawOption::Item {
                    id,
                    text,
                    label,
                    value,
                } => OptionItem {
                    id: id
                        .map(|id| id.0.trim().to_string())
                        .filter(|id| !id.is_empty())
                        .unwrap_or_else(|| option_letter(ordinal)),
                    text: first_text([text, label, value]),
                },
            })
            .collect(),
        RawOptions::Keyed(map) => map
            .into_iter()
            .map(|(id, text)| OptionItem {
                id: id.trim().to_string(),
                text: text.0,
            })
            .collect(),
    }
}

/// 0 → A, 1 → B ... 超过 26 个时退回数字序号
fn option_letter(ordinal: usize) -> String {
    if ordinal < 26 {
        char::from(b'A' + ordinal as u8).to_string()
    } else {
        (ordinal + 1).to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Int(i64),
    Text(String),
}

/// 需选数量：整数或数字字符串；负数属于调用方错误，直接拒绝
fn deserialize_required_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = match Option::<RawCount>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawCount::Int(value)) => value,
        Some(RawCount::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(RawCount::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("requiredCount 不是整数: {}", text)))?,
    };

    if value < 0 {
        return Err(D::Error::custom(format!("requiredCount 不能为负数: {}", value)));
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("requiredCount 超出范围: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Question {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_options_from_string_array() {
        let question = parse(json!({
            "type": "multiple-choice",
            "options": ["red", "green", "blue"]
        }));
        let ids: Vec<&str> = question.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(question.options[2].text, "blue");
    }

    #[test]
    fn test_options_from_object_and_items() {
        let keyed = parse(json!({
            "type": "matching-features",
            "options": {"B": "Smith", "A": "Jones"}
        }));
        assert_eq!(keyed.options[0], OptionItem { id: "A".into(), text: "Jones".into() });

        let listed = parse(json!({
            "type": "matching-headings",
            "options": [{"id": "i", "text": "Origins"}, {"label": "Decline"}]
        }));
        assert_eq!(listed.options[0].id, "i");
        assert_eq!(listed.options[1].id, "B");
        assert_eq!(listed.options[1].text, "Decline");
    }

    #[test]
    fn test_correct_answers_shapes() {
        let keyed = parse(json!({
            "type": "note-completion",
            "correctAnswers": {"1": "ring", "2": ["colour", "color"], "3": 42}
        }));
        let store = keyed.correct_answers.unwrap();
        assert_eq!(store.lookup("1").unwrap().alternates(), vec!["ring"]);
        assert_eq!(store.lookup("2").unwrap().alternates(), vec!["colour", "color"]);
        assert_eq!(store.lookup("3").unwrap().alternates(), vec!["42"]);

        let listed = parse(json!({
            "type": "multiple-choice-multiple",
            "correctAnswers": ["A", "D"]
        }));
        assert_eq!(listed.correct_answers.unwrap().flatten(), vec!["A", "D"]);
    }

    #[test]
    fn test_required_count_aliases_and_rejection() {
        let q = parse(json!({"type": "multiple-choice-multiple", "numberOfAnswers": "3"}));
        assert_eq!(q.required_count(), 3);
        let q = parse(json!({"type": "multiple-choice-multiple"}));
        assert_eq!(q.required_count(), DEFAULT_REQUIRED_COUNT);

        let negative: Result<Question, _> = serde_json::from_value(json!({
            "type": "multiple-choice-multiple",
            "correctCount": -1
        }));
        assert!(negative.is_err());
    }

    #[test]
    fn test_items_accept_plain_strings() {
        let q = parse(json!({
            "type": "matching-information",
            "statements": ["a reference to a storm", {"id": "q7", "text": "a date", "answer": "C"}]
        }));
        assert_eq!(q.items.len(), 2);
        assert_eq!(q.items[0].local_id(0), "1");
        assert_eq!(q.items[1].local_id(1), "q7");
        assert!(q.item_by_local_id("q7").is_some());
    }

    #[test]
    fn test_gap_fields_cover_rows_and_steps() {
        let q = parse(json!({
            "type": "table-completion",
            "content": "intro ___1___",
            "rows": [["a", "___2___"], ["___3___", "b"]],
            "steps": ["___4___"]
        }));
        let joined: Vec<&str> = q.gap_fields().collect();
        assert_eq!(joined, vec!["intro ___1___", "a", "___2___", "___3___", "b", "___4___"]);
    }

    #[test]
    fn test_scalar_cells_and_null_fields_are_read_as_text() {
        let q = parse(json!({
            "type": "table-completion",
            "text": null,
            "content": 2024,
            "rows": [["Price", 25, "___1___"], [null, "___2___"], null],
            "steps": [true, "___3___"]
        }));
        assert_eq!(q.text, "");
        assert_eq!(q.content, "2024");
        assert_eq!(q.rows[0], vec!["Price", "25", "___1___"]);
        assert_eq!(q.rows[1], vec!["", "___2___"]);
        assert!(q.rows[2].is_empty());
        assert_eq!(q.steps, vec!["true", "___3___"]);
    }

    #[test]
    fn test_lone_string_correct_answers_is_one_element_list() {
        let q = parse(json!({"type": "fill-in-blank", "correctAnswers": "color"}));
        assert_eq!(q.correct_answers, Some(AnswerStore::List(vec!["color".into()])));

        let q = parse(json!({"type": "fill-in-blank", "correctAnswers": 7}));
        assert_eq!(q.correct_answers.unwrap().flatten(), vec!["7"]);
    }

    #[test]
    fn test_synonym_fields_present_together() {
        let q = parse(json!({
            "type": "multiple-choice",
            "text": "Choose ONE letter",
            "question": "What did she lose?",
            "instructions": ""
        }));
        assert_eq!(q.text, "Choose ONE letter");

        let q = parse(json!({"type": "multiple-choice", "text": "", "question": "What?"}));
        assert_eq!(q.text, "What?");

        let q = parse(json!({
            "type": "short-answer",
            "subQuestions": [{"id": 3, "text": "Who?", "answer": "", "correctAnswer": "Darwin"}],
            "statements": []
        }));
        assert_eq!(q.items.len(), 1);
        assert_eq!(q.items[0].local_id(0), "3");
        assert_eq!(q.items[0].answer, Some(AnswerValue::One("Darwin".into())));

        let q = parse(json!({
            "type": "multiple-choice-multiple",
            "requiredCount": 3,
            "numberOfAnswers": 2
        }));
        assert_eq!(q.required_count(), 3);
    }

    #[test]
    fn test_section_media_aliases_together() {
        let section: Section = serde_json::from_value(json!({
            "audio": "s1.mp3",
            "passage": null,
            "questions": null
        }))
        .unwrap();
        assert_eq!(section.media.as_deref(), Some("s1.mp3"));
        assert!(section.questions.is_empty());
    }

    #[test]
    fn test_numeric_keys_match_by_value() {
        let q = parse(json!({
            "type": "note-completion",
            "correctAnswers": {"01": "ring", " 2 ": "wedding"}
        }));
        let store = q.correct_answers.unwrap();
        assert_eq!(store.lookup("1").unwrap().alternates(), vec!["ring"]);
        assert_eq!(store.lookup("2").unwrap().alternates(), vec!["wedding"]);
        assert!(store.lookup("3").is_none());
    }
}
