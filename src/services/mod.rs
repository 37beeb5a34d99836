pub mod answer_key_compiler;
pub mod diagnostic_writer;
pub mod gap_extractor;
pub mod numberer;
pub mod scorer;

pub use answer_key_compiler::{compile_answer_key, compile_with_diagnostics};
pub use diagnostic_writer::DiagnosticWriter;
pub use gap_extractor::{extract_gap_ids, scan_gaps, GapScan};
pub use numberer::{build_question_index, count_units, number_question, question_units, UnitSlot};
pub use scorer::{matches_any, normalize, score_submission};
