//! 判分 - 业务能力层
//!
//! 用规范答案表给学生提交判分。作者预览和部署产物里的判分脚本执行的是同一套规则：
//! - 单答案：去首尾空白、忽略大小写后与任一同义答案相等即正确
//! - 多选组：选了恰好 k 个时逐个给分，否则整组 0 分
//! - 缺失或无法对应的作答一律判错，不报错

use crate::models::answer_key::{AnswerKey, AnswerKeyEntry, MultiSelectAnswer};
use crate::models::report::{QuestionResult, Response, ScoreReport, Submission};
use tracing::debug;

/// 比较前的归一化
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 作答是否与任一同义答案匹配
pub fn matches_any(response: &str, alternates: &[String]) -> bool {
    let response = normalize(response);
    alternates.iter().any(|alt| normalize(alt) == response)
}

/// 给整份提交判分
pub fn score_submission(key: &AnswerKey, submission: &Submission) -> ScoreReport {
    let mut results = Vec::new();

    for (global_number, entry) in key.iter() {
        match entry {
            AnswerKeyEntry::Single(alternates) => {
                results.push(score_single(global_number, alternates, submission.get(global_number)));
            }
            AnswerKeyEntry::Multiple(group) => {
                results.extend(score_group(global_number, group, submission.get(global_number)));
            }
        }
    }

    let score = results.iter().filter(|r| r.is_correct).count() as u32;
    let max_score = key.total_units();
    debug!("判分完成: {}/{}", score, max_score);

    ScoreReport {
        results,
        score,
        max_score,
    }
}

fn score_single(global_number: u32, alternates: &[String], response: Option<&Response>) -> QuestionResult {
    let learner_answer = match response {
        Some(Response::Text(text)) => Some(text.as_str()),
        // 数组只在恰好一个元素时视为文本作答
        Some(Response::Selection(values)) if values.len() == 1 => Some(values[0].as_str()),
        _ => None,
    };

    QuestionResult {
        global_number,
        learner_answer: learner_answer.unwrap_or_default().to_string(),
        display_correct_answer: alternates.join(" / "),
        is_correct: learner_answer.is_some_and(|answer| matches_any(answer, alternates)),
    }
}

/// 多选组：第 i 个选择记在起始题号 + i 上
fn score_group(start: u32, group: &MultiSelectAnswer, response: Option<&Response>) -> Vec<QuestionResult> {
    let picks = selected_options(response);
    let accepted: Vec<String> = group.answers.iter().map(|a| normalize(a)).collect();
    let display = group.answers.join(", ");
    let gated = picks.len() == group.count as usize;

    (0..group.count)
        .map(|offset| {
            let pick = picks.get(offset as usize);
            let learner_answer = if gated {
                pick.map(|(_, raw)| raw.clone()).unwrap_or_default()
            } else if offset == 0 {
                picks.iter().map(|(_, raw)| raw.as_str()).collect::<Vec<_>>().join(", ")
            } else {
                String::new()
            };

            QuestionResult {
                global_number: start + offset,
                learner_answer,
                display_correct_answer: display.clone(),
                is_correct: gated && pick.is_some_and(|(normalized, _)| accepted.contains(normalized)),
            }
        })
        .collect()
}

/// 去重并排序后的选择，返回 (归一化值, 原始值)
fn selected_options(response: Option<&Response>) -> Vec<(String, String)> {
    let raw: Vec<&str> = match response {
        Some(Response::Selection(values)) => values.iter().map(String::as_str).collect(),
        Some(Response::Text(text)) => vec![text.as_str()],
        None => Vec::new(),
    };

    let mut picks: Vec<(String, String)> = Vec::new();
    for value in raw {
        let normalized = normalize(value);
        if !normalized.is_empty() && !picks.iter().any(|(n, _)| *n == normalized) {
            picks.push((normalized, value.trim().to_string()));
        }
    }
    picks.sort();
    picks
}
