//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量导出处理器
//! - 批量加载测试（Vec<Test>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `test_processor` - 单套测试处理器
//! - 编译、写出导出包、记录诊断
//!
//! ### `commands` - 单文件命令
//! - 预览 / 计数 / 判分
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Test>)
//!     ↓
//! test_processor / commands (处理单个 Test)
//!     ↓
//! workflow::CompileFlow (编号 → 答案表 → 诊断)
//!     ↓
//! services (能力层：gap_extractor / numberer / answer_key_compiler / scorer)
//!     ↓
//! models (题型目录与数据结构)
//! ```

pub mod batch_processor;
pub mod commands;
pub mod test_processor;

pub use batch_processor::{App, ProcessingStats};
pub use commands::{compile_file, count_file, score_files};
pub use test_processor::{process_test, ExportOutcome};
