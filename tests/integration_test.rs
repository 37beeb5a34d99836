use ielts_test_compiler::models::{AnswerKeyEntry, Response};
use ielts_test_compiler::orchestrator::{compile_file, count_file, score_files};
use ielts_test_compiler::services::{build_question_index, compile_answer_key, count_units};
use ielts_test_compiler::{compile, Config, QuestionType, Submission, Test};
use serde_json::json;
use std::path::PathBuf;

fn end_to_end_test() -> Test {
    serde_json::from_value(json!({
        "title": "Listening Section 1",
        "sections": [{
            "audio": "section1.mp3",
            "questions": [
                {"type": "multiple-choice", "options": ["A", "B", "C"], "correctAnswer": "B"},
                {
                    "type": "note-completion",
                    "content": "She lost her ___2___ ring, it was a ___1___.",
                    "correctAnswers": {"1": "ring", "2": "wedding"}
                },
                {
                    "type": "multiple-choice-multiple",
                    "requiredCount": 2,
                    "options": ["A", "B", "C", "D", "E"],
                    "correctAnswers": ["A", "D"]
                }
            ]
        }]
    }))
    .unwrap()
}

/// 覆盖全部题型的一套测试
fn full_reading_test() -> Test {
    serde_json::from_value(json!({
        "title": "Reading Mock",
        "sections": [
            {"passage": "passage-1", "questions": [
                {"type": "true-false-not-given", "correctAnswer": "NOT GIVEN"},
                {"type": "yes-no-not-given", "correctAnswer": "YES"},
                {"type": "fill-in-blank", "correctAnswers": ["colour", "color"]},
                {"type": "form-completion", "content": "Name ___1___ Phone ___2___",
                 "correctAnswers": {"1": "Smith", "2": "0412"}},
                {"type": "table-completion", "rows": [["Day", "___4___"], ["___3___", "Cost"]],
                 "correctAnswers": {"3": "Monday", "4": "free"}},
                {"type": "flow-chart-completion", "steps": ["Collect ___2___", "Dry the ___1___"],
                 "correctAnswers": {"1": "leaves", "2": "seeds"}}
            ]},
            {"passage": "passage-2", "questions": [
                {"type": "summary-completion", "content": "___1___ and ___2___",
                 "correctAnswers": {"1": "salt", "2": "pepper"}},
                {"type": "summary-completion-word-bank", "content": "___1___",
                 "options": {"A": "river", "B": "lake"}, "correctAnswers": {"1": "B"}},
                {"type": "sentence-completion", "sentences": ["s1", "s2"],
                 "correctAnswers": {"1": "bridge", "2": ["tunnel", "underpass"]}},
                {"type": "short-answer", "subQuestions": [{"id": "a", "text": "Who?", "answer": "Darwin"}]},
                {"type": "matching-information", "statements": ["x", "y"],
                 "correctAnswers": {"1": "C", "2": "A"}}
            ]},
            {"passage": "passage-3", "questions": [
                {"type": "matching-headings", "paragraphs": [{"id": "B"}, {"id": "A"}],
                 "options": ["i", "ii", "iii"], "correctAnswers": {"A": "iii", "B": "i"}},
                {"type": "matching-features", "statements": ["p"], "categories": ["Smith", "Jones"],
                 "correctAnswers": {"1": "B"}},
                {"type": "matching-sentence-endings", "sentences": ["begin"], "correctAnswers": {"1": "E"}},
                {"type": "matching-people", "statements": ["q"], "correctAnswers": {"1": "D"}},
                {"type": "plan-map-diagram", "questionList": ["library", "cafe"],
                 "correctAnswers": {"1": "F", "2": "G"}},
                {"type": "multiple-choice-multiple", "numberOfAnswers": 3,
                 "correctAnswers": ["A", "C", "E"]}
            ]}
        ]
    }))
    .unwrap()
}

/// 用答案表里每个题号的第一个同义答案构造提交
fn perfect_submission(test: &Test) -> Submission {
    let compiled = compile(test);
    compiled
        .answer_key
        .iter()
        .map(|(number, entry)| {
            let response = match entry {
                AnswerKeyEntry::Single(alternates) => Response::Text(alternates[0].clone()),
                AnswerKeyEntry::Multiple(group) => Response::Selection(group.answers.clone()),
            };
            (number, response)
        })
        .collect()
}

#[test]
fn test_end_to_end_numbering_and_key() {
    let test = end_to_end_test();
    let index = build_question_index(&test);

    assert_eq!(index.len(), 5);
    assert_eq!(index.get(1).unwrap().question_type, QuestionType::MultipleChoice);
    assert_eq!(index.get(2).unwrap().local_unit_id.as_deref(), Some("1"));
    assert_eq!(index.get(3).unwrap().local_unit_id.as_deref(), Some("2"));
    assert!(index.get(4).unwrap().is_group_start());
    assert_eq!(
        index.get(5).unwrap().question_type,
        QuestionType::MultipleChoiceMultiple
    );

    let key = compile_answer_key(&test, &index);
    assert_eq!(
        serde_json::to_value(&key).unwrap(),
        json!({
            "1": ["B"],
            "2": ["ring"],
            "3": ["wedding"],
            "4": {"type": "multiple", "answers": ["A", "D"], "count": 2}
        })
    );
}

#[test]
fn test_contiguity_and_count_agree() {
    let test = full_reading_test();
    let compiled = compile(&test);

    let numbers: Vec<u32> = compiled.question_index.iter().map(|e| e.global_number).collect();
    let n = numbers.len() as u32;
    assert_eq!(numbers, (1..=n).collect::<Vec<_>>());
    assert_eq!(count_units(&test), n as usize);
    assert_eq!(compiled.answer_key.total_units(), n);
    assert_eq!(n, 27);
}

#[test]
fn test_determinism() {
    let test = full_reading_test();
    let first = serde_json::to_string(&compile(&test).to_bundle()).unwrap();
    let second = serde_json::to_string(&compile(&test).to_bundle()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_scores_full_marks() {
    for test in [end_to_end_test(), full_reading_test()] {
        let compiled = compile(&test);
        let report = compiled.score(&perfect_submission(&test));

        assert!(report.results.iter().all(|r| r.is_correct));
        assert_eq!(report.score as usize, compiled.question_count());
        assert_eq!(report.max_score, report.score);
        assert!(compiled.diagnostics.is_empty(), "{:?}", compiled.diagnostics);
    }
}

#[test]
fn test_structural_order_and_alternates() {
    let test = full_reading_test();
    let compiled = compile(&test);
    let key = &compiled.answer_key;

    // 表格：3 在 4 之前，跨单元格收集
    assert_eq!(key.get(6), Some(&AnswerKeyEntry::single(vec!["Monday".into()])));
    assert_eq!(key.get(7), Some(&AnswerKeyEntry::single(vec!["free".into()])));
    // 流程图：按编号而不是步骤顺序
    assert_eq!(key.get(8), Some(&AnswerKeyEntry::single(vec!["leaves".into()])));
    // 段落标题匹配保持作者顺序 B, A
    let headings = compiled.question_index.get(18).unwrap();
    assert_eq!(headings.local_unit_id.as_deref(), Some("B"));
    assert_eq!(key.get(18), Some(&AnswerKeyEntry::single(vec!["i".into()])));

    let mut submission = Submission::new();
    submission.insert(3, " COLOR ");
    submission.insert(14, "Underpass");
    let report = compiled.score(&submission);
    assert!(report.result(3).unwrap().is_correct);
    assert!(report.result(14).unwrap().is_correct);
    assert_eq!(report.result(14).unwrap().display_correct_answer, "tunnel / underpass");
    assert_eq!(report.score, 2);
}

#[test]
fn test_multi_select_gating_end_to_end() {
    let test = end_to_end_test();
    let compiled = compile(&test);

    let score_with = |selection: Vec<&str>| {
        let mut submission = Submission::new();
        submission.insert(4, selection);
        compiled.score(&submission).score
    };

    assert_eq!(score_with(vec!["A", "B"]), 1);
    assert_eq!(score_with(vec!["A"]), 0);
    assert_eq!(score_with(vec!["A", "C", "D"]), 0);
    assert_eq!(score_with(vec!["d", "a"]), 2);
}

#[test]
fn test_incomplete_authoring_never_fails() {
    let test: Test = serde_json::from_value(json!({
        "sections": [
            {"questions": []},
            {"questions": [
                {"type": "note-completion", "content": "___0___ ___abc___ ___5___ ___5___"},
                {"type": "matching-headings"},
                {"type": "multiple-choice-multiple", "requiredCount": 0}
            ]}
        ]
    }))
    .unwrap();

    let compiled = compile(&test);
    assert_eq!(compiled.question_count(), 1);
    assert_eq!(
        compiled.answer_key.get(1),
        Some(&AnswerKeyEntry::single(vec![String::new()]))
    );
    assert!(!compiled.diagnostics.is_empty());

    let report = compiled.score(&Submission::new());
    assert_eq!(report.score, 0);
    assert_eq!(report.max_score, 1);
}

#[test]
fn test_negative_required_count_is_rejected() {
    let result: Result<Test, _> = serde_json::from_value(json!({
        "sections": [{"questions": [{"type": "multiple-choice-multiple", "requiredCount": -2}]}]
    }));
    assert!(result.is_err());
}

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ielts_it_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_file_commands() {
    let config = Config::default();
    let test_path = write_fixture(
        "e2e.json",
        &serde_json::to_string(&json!({
            "title": "E2E",
            "sections": [{"questions": [
                {"type": "multiple-choice", "correctAnswer": "B"},
                {"type": "note-completion", "content": "___2___ ___1___",
                 "correctAnswers": {"1": "ring", "2": "wedding"}},
                {"type": "multiple-choice-multiple", "correctAnswers": ["A", "D"]}
            ]}]
        }))
        .unwrap(),
    );
    let submission_path = write_fixture(
        "e2e-submission.json",
        r#"{"1": "b", "2": " Ring ", "3": "bride", "4": ["A", "C"]}"#,
    );

    let bundle = compile_file(&test_path, &config).await.unwrap();
    assert_eq!(bundle.question_count, 5);
    assert_eq!(count_file(&test_path, &config).await.unwrap(), 5);

    let report = score_files(&test_path, &submission_path, &config).await.unwrap();
    assert_eq!(report.max_score, 5);
    assert_eq!(report.score, 3);
    assert!(!report.result(3).unwrap().is_correct);
    assert!(!report.result(5).unwrap().is_correct);

    std::fs::remove_file(&test_path).ok();
    std::fs::remove_file(&submission_path).ok();
}

#[tokio::test]
async fn test_loose_submission_scores_without_error() {
    let config = Config::default();
    let test_path = write_fixture(
        "loose.json",
        &serde_json::to_string(&json!({
            "title": "Loose",
            "sections": [{"questions": [
                {"type": "multiple-choice", "correctAnswer": "B"},
                {"type": "table-completion", "rows": [["Price", 25, "___1___"]],
                 "correctAnswers": {"1": 12}},
                {"type": "fill-in-blank", "correctAnswers": "color"}
            ]}]
        }))
        .unwrap(),
    );
    let submission_path = write_fixture(
        "loose-submission.json",
        r#"{"1": null, "2": 12, "3": "Color", "4": "extra"}"#,
    );

    let report = score_files(&test_path, &submission_path, &config).await.unwrap();
    assert_eq!(report.max_score, 3);
    assert_eq!(report.score, 2);
    assert!(!report.result(1).unwrap().is_correct);
    assert_eq!(report.result(1).unwrap().learner_answer, "");

    std::fs::remove_file(&test_path).ok();
    std::fs::remove_file(&submission_path).ok();
}
