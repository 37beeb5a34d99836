//! 答案表编译 - 业务能力层
//!
//! 按题号索引，从所属题目里取出规范答案。缺失答案不报错，落成 `[""]` 并记录诊断。

use crate::models::answer_key::{AnswerKey, AnswerKeyEntry};
use crate::models::catalog::AnswerShape;
use crate::models::diagnostic::{Diagnostic, DiagnosticKind};
use crate::models::index::{QuestionIndex, QuestionIndexEntry};
use crate::models::question::{AnswerStore, AnswerValue, Question, Test};
use tracing::debug;

/// 编译答案表
pub fn compile_answer_key(test: &Test, index: &QuestionIndex) -> AnswerKey {
    compile_with_diagnostics(test, index).0
}

/// 编译答案表，同时返回答案相关的诊断
pub fn compile_with_diagnostics(test: &Test, index: &QuestionIndex) -> (AnswerKey, Vec<Diagnostic>) {
    let mut key = AnswerKey::new();
    let mut diagnostics = Vec::new();
    // 当前题目的 (section, question, 第一个题号)，用于计算单元在题内的序号
    let mut current: Option<(usize, usize, u32)> = None;

    for entry in index {
        let owner = (entry.section_index, entry.question_index);
        let first_number = match current {
            Some((s, q, first)) if (s, q) == owner => first,
            _ => {
                current = Some((owner.0, owner.1, entry.global_number));
                entry.global_number
            }
        };
        let ordinal = (entry.global_number - first_number) as usize;

        let Some(question) = test.question(entry.section_index, entry.question_index) else {
            debug!("题号 {} 找不到所属题目，跳过", entry.global_number);
            continue;
        };

        let resolved = match entry.group {
            Some(group) if group.offset == 0 => {
                let accepted = resolve_multi_select(question);
                if accepted.len() != group.size as usize {
                    diagnostics.push(
                        Diagnostic::new(
                            entry.section_index,
                            entry.question_index,
                            DiagnosticKind::AcceptedCountMismatch {
                                accepted: accepted.len(),
                                required: group.size,
                            },
                        )
                        .at(entry.global_number),
                    );
                }
                AnswerKeyEntry::multiple(accepted, group.size)
            }
            // 组内其余题号由起始题号代表
            Some(_) => continue,
            None => AnswerKeyEntry::single(resolve_alternates(question, entry, ordinal)),
        };

        if resolved.is_blank() {
            diagnostics.push(
                Diagnostic::new(
                    entry.section_index,
                    entry.question_index,
                    DiagnosticKind::MissingAnswer,
                )
                .at(entry.global_number),
            );
        }
        key.insert(entry.global_number, resolved);
    }

    (key, diagnostics)
}

/// 单答案单元的同义答案列表
fn resolve_alternates(question: &Question, entry: &QuestionIndexEntry, ordinal: usize) -> Vec<String> {
    let raw: Vec<&str> = match question.question_type.answer_shape() {
        AnswerShape::Direct => direct(question)
            .or_else(|| listed(question))
            .unwrap_or_default(),
        AnswerShape::Alternates | AnswerShape::MultiSelect => listed(question)
            .or_else(|| direct(question))
            .unwrap_or_default(),
        AnswerShape::Keyed => keyed(question, entry, ordinal).unwrap_or_default(),
    };
    normalize_alternates(raw)
}

fn direct(question: &Question) -> Option<Vec<&str>> {
    question.correct_answer.as_ref().map(AnswerValue::alternates)
}

fn listed(question: &Question) -> Option<Vec<&str>> {
    match question.correct_answers.as_ref()? {
        store @ AnswerStore::List(_) => Some(store.flatten()),
        AnswerStore::Keyed(_) => None,
    }
}

/// 按局部ID查找；数组形式按题内序号取；再退回子项自带的答案
fn keyed<'a>(question: &'a Question, entry: &QuestionIndexEntry, ordinal: usize) -> Option<Vec<&'a str>> {
    let local_id = entry.local_unit_id.as_deref()?;

    let from_store = question.correct_answers.as_ref().and_then(|store| match store {
        AnswerStore::Keyed(_) => store.lookup(local_id).map(|v| v.alternates()),
        AnswerStore::List(list) => list.get(ordinal).map(|a| vec![a.as_str()]),
    });

    from_store.or_else(|| {
        question
            .item_by_local_id(local_id)
            .and_then(|item| item.answer.as_ref())
            .map(|v| v.alternates())
    })
}

/// 多选组的正确选项，保持作者顺序
fn resolve_multi_select(question: &Question) -> Vec<String> {
    let raw: Vec<&str> = match &question.correct_answers {
        Some(store) => store.flatten(),
        None => match &question.correct_answer {
            Some(AnswerValue::One(text)) => text.as_str().split(',').collect(),
            Some(many) => many.alternates(),
            None => Vec::new(),
        },
    };
    dedup_trimmed(raw)
}

/// 去空白、去空串、去重；全部为空时返回 `[""]`
fn normalize_alternates(raw: Vec<&str>) -> Vec<String> {
    let alternates = dedup_trimmed(raw);
    if alternates.is_empty() {
        vec![String::new()]
    } else {
        alternates
    }
}

fn dedup_trimmed(raw: Vec<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in raw {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::numberer::build_question_index;
    use serde_json::json;

    fn compile(value: serde_json::Value) -> (AnswerKey, Vec<Diagnostic>) {
        let test: Test = serde_json::from_value(value).unwrap();
        let index = build_question_index(&test);
        compile_with_diagnostics(&test, &index)
    }

    fn single(values: &[&str]) -> AnswerKeyEntry {
        AnswerKeyEntry::single(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_direct_answer_is_trimmed() {
        let (key, diagnostics) = compile(json!({"sections": [{"questions": [
            {"type": "multiple-choice", "correctAnswer": "  B "}
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&["B"])));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_alternates_used_as_is() {
        let (key, _) = compile(json!({"sections": [{"questions": [
            {"type": "fill-in-blank", "correctAnswers": ["colour", " color", "colour"]}
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&["colour", "color"])));
    }

    #[test]
    fn test_keyed_lookup_by_gap_id() {
        let (key, _) = compile(json!({"sections": [{"questions": [
            {
                "type": "note-completion",
                "content": "a ___2___ and a ___1___",
                "correctAnswers": {"1": "ring", "2": ["wedding", "marriage"]}
            }
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&["ring"])));
        assert_eq!(key.get(2), Some(&single(&["wedding", "marriage"])));
    }

    #[test]
    fn test_keyed_list_is_positional() {
        let (key, _) = compile(json!({"sections": [{"questions": [
            {"type": "multiple-choice"},
            {
                "type": "sentence-completion",
                "sentences": ["first", "second"],
                "correctAnswers": ["alpha", "beta"]
            }
        ]}]}));
        assert_eq!(key.get(2), Some(&single(&["alpha"])));
        assert_eq!(key.get(3), Some(&single(&["beta"])));
    }

    #[test]
    fn test_item_own_answer_fallback() {
        let (key, _) = compile(json!({"sections": [{"questions": [
            {
                "type": "matching-information",
                "statements": [
                    {"id": "s1", "text": "a storm", "answer": "C"},
                    {"id": "s2", "text": "a date"}
                ],
                "correctAnswers": {"s2": "A"}
            }
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&["C"])));
        assert_eq!(key.get(2), Some(&single(&["A"])));
    }

    #[test]
    fn test_missing_answer_is_blank_not_error() {
        let (key, diagnostics) = compile(json!({"sections": [{"questions": [
            {"type": "tfng"},
            {"type": "note-completion", "content": "___1___", "correctAnswers": {"1": "   "}}
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&[""])));
        assert_eq!(key.get(2), Some(&single(&[""])));
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.kind == DiagnosticKind::MissingAnswer));
        assert_eq!(diagnostics[1].global_number, Some(2));
    }

    #[test]
    fn test_multi_select_group_keyed_at_start() {
        let (key, diagnostics) = compile(json!({"sections": [{"questions": [
            {"type": "multiple-choice"},
            {"type": "multiple-choice-multiple", "correctAnswers": ["A", " D "]},
            {"type": "yes-no-not-given", "correctAnswer": "NO"}
        ]}]}));
        assert_eq!(key.get(2), Some(&AnswerKeyEntry::multiple(vec!["A".into(), "D".into()], 2)));
        assert_eq!(key.get(3), None);
        assert_eq!(key.get(4), Some(&single(&["NO"])));
        assert_eq!(key.total_units(), 4);
        // 第 1 题缺答案
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_accepted_count_mismatch_reported() {
        let (_, diagnostics) = compile(json!({"sections": [{"questions": [
            {"type": "multiple-choice-multiple", "requiredCount": 3, "correctAnswer": "A, C"}
        ]}]}));
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::AcceptedCountMismatch { accepted: 2, required: 3 }
        );
    }

    #[test]
    fn test_loosely_typed_author_data_compiles() {
        let (key, diagnostics) = compile(json!({"sections": [{"questions": [
            {"type": "table-completion", "rows": [["Price", 25, "___1___"], [null, "___2___"]],
             "correctAnswers": {"01": 12.5, "2": "free"}},
            {"type": "fill-in-blank", "correctAnswers": "color"},
            {"type": "multiple-choice", "correctAnswer": ["B", "b "]},
            {"type": "multiple-choice-multiple", "correctAnswer": ["A", "E"]}
        ]}]}));
        assert_eq!(key.get(1), Some(&single(&["12.5"])));
        assert_eq!(key.get(2), Some(&single(&["free"])));
        assert_eq!(key.get(3), Some(&single(&["color"])));
        assert_eq!(key.get(4), Some(&single(&["B", "b"])));
        assert_eq!(key.get(5), Some(&AnswerKeyEntry::multiple(vec!["A".into(), "E".into()], 2)));
        assert!(diagnostics.is_empty());
    }
}
