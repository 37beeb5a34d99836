//! 测试处理上下文
//!
//! 封装"我正在处理哪一套测试"这一信息

use std::fmt::Display;

/// 测试处理上下文
#[derive(Debug, Clone)]
pub struct TestCtx {
    /// 测试索引（从1开始，仅用于日志显示）
    pub test_index: usize,

    /// 测试标题
    pub title: String,

    /// 来源文件
    pub source: Option<String>,
}

impl TestCtx {
    /// 创建新的测试上下文
    pub fn new(test_index: usize, title: impl Into<String>, source: Option<String>) -> Self {
        Self {
            test_index,
            title: title.into(),
            source,
        }
    }
}

impl Display for TestCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            write!(f, "[测试 #{}]", self.test_index)
        } else {
            write!(f, "[测试 #{} {}]", self.test_index, self.title)
        }
    }
}
