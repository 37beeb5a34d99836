//! 填空标记解析 - 业务能力层
//!
//! 只负责从文本里找出 `___N___` 标记，不关心题号

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// 候选标记：三个下划线包住一段不含下划线和空白的内容
static GAP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"___([^_\s]+)___").expect("gap marker pattern"));

/// 一道题所有文本字段的扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapScan {
    /// 升序、去重后的局部填空编号
    pub ids: Vec<u32>,
    /// 重复出现的编号（按首次重复的文本顺序）
    pub duplicates: Vec<u32>,
    /// 无效标记原文，例如 `___abc___`、`___0___`
    pub malformed: Vec<String>,
}

/// 解析标记内的编号，只接受正整数
fn parse_gap_id(raw: &str) -> Option<u32> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|id| *id > 0)
}

/// 扫描多个文本字段
///
/// 同一道题的填空可能分散在正文、表格单元格、流程图步骤里，必须全部收集后再排序。
pub fn scan_gaps<'a, I>(fields: I) -> GapScan
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    let mut malformed = Vec::new();

    for field in fields {
        for caps in GAP_MARKER.captures_iter(field) {
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            match parse_gap_id(inner) {
                Some(id) => {
                    if !seen.insert(id) && !duplicates.contains(&id) {
                        duplicates.push(id);
                    }
                }
                None => {
                    if let Some(whole) = caps.get(0) {
                        malformed.push(whole.as_str().to_string());
                    }
                }
            }
        }
    }

    GapScan {
        ids: seen.into_iter().collect(),
        duplicates,
        malformed,
    }
}

/// 只取升序去重后的编号
pub fn extract_gap_ids<'a, I>(fields: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    scan_gaps(fields).ids
}
