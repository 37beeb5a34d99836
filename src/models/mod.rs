pub mod answer_key;
pub mod bundle;
pub mod catalog;
pub mod diagnostic;
pub mod index;
pub mod loaders;
pub mod question;
pub mod report;

pub use answer_key::{AnswerKey, AnswerKeyEntry, MultiSelectAnswer};
pub use bundle::ExportBundle;
pub use catalog::{AnswerShape, QuestionType, UnitRule, DEFAULT_REQUIRED_COUNT};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use index::{GroupPosition, QuestionIndex, QuestionIndexEntry};
pub use loaders::{load_all_tests, load_submission, load_test};
pub use question::{AnswerStore, AnswerText, AnswerValue, OptionItem, Question, Section, SubItem, Test};
pub use report::{QuestionResult, Response, ScoreReport, Submission};
