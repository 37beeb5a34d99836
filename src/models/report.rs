use crate::models::question::AnswerText;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// 学生作答
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// 单答案单元的文本
    Text(String),
    /// 多选组起始题号上的选项 id 集合
    Selection(Vec<String>),
}

impl From<&str> for Response {
    fn from(value: &str) -> Self {
        Response::Text(value.to_string())
    }
}

impl From<Vec<&str>> for Response {
    fn from(value: Vec<&str>) -> Self {
        Response::Selection(value.into_iter().map(str::to_string).collect())
    }
}

/// 提交里单个作答的原始形态
///
/// 数字 / 布尔转成文本，null 与无法识别的值视为未作答。
#[derive(Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Missing,
    Selection(Vec<AnswerText>),
    Text(AnswerText),
    Unreadable(IgnoredAny),
}

impl RawResponse {
    fn into_response(self) -> Option<Response> {
        match self {
            RawResponse::Selection(values) => Some(Response::Selection(
                values.into_iter().map(|v| v.0).collect(),
            )),
            RawResponse::Text(text) => Some(Response::Text(text.0)),
            RawResponse::Missing | RawResponse::Unreadable(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        RawResponse::deserialize(deserializer)?
            .into_response()
            .ok_or_else(|| D::Error::custom("作答必须是文本或选项数组"))
    }
}

/// 学生提交：全局题号 → 作答
///
/// 读入时丢弃 null / 无法识别的作答，以及不是正整数的题号；它们在判分时按未作答处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission(BTreeMap<u32, Response>);

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, RawResponse>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(number, response)| {
                let number = number.trim().parse::<u32>().ok()?;
                Some((number, response.into_response()?))
            })
            .collect())
    }
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, global_number: u32, response: impl Into<Response>) {
        self.0.insert(global_number, response.into());
    }

    pub fn get(&self, global_number: u32) -> Option<&Response> {
        self.0.get(&global_number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, Response)> for Submission {
    fn from_iter<I: IntoIterator<Item = (u32, Response)>>(iter: I) -> Self {
        Submission(iter.into_iter().collect())
    }
}

/// 单个题号的判分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub global_number: u32,
    pub learner_answer: String,
    pub display_correct_answer: String,
    pub is_correct: bool,
}

/// 判分报告，交给外部报告 / PDF 生成
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub results: Vec<QuestionResult>,
    pub score: u32,
    pub max_score: u32,
}

impl ScoreReport {
    pub fn result(&self, global_number: u32) -> Option<&QuestionResult> {
        self.results.iter().find(|r| r.global_number == global_number)
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.score, self.max_score)
    }
}
