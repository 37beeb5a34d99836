//! 题号编排 - 业务能力层
//!
//! 按 Section → Question → 单元 的顺序分配连续的全局题号。
//! 这是全仓库唯一的编号实现：预览、导出、计数、判分都消费它的输出。

use crate::models::catalog::UnitRule;
use crate::models::index::{GroupPosition, QuestionIndex, QuestionIndexEntry};
use crate::models::question::{Question, Test};
use crate::services::gap_extractor::extract_gap_ids;
use tracing::debug;

/// 一道题贡献的单个作答单元（尚未分配题号）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSlot {
    /// 单答案题
    Single,
    /// 填空，局部编号
    Gap(u32),
    /// 结构化子项，局部 id
    Item(String),
    /// 多选组成员
    GroupMember { offset: u32, size: u32 },
}

impl UnitSlot {
    fn local_unit_id(&self) -> Option<String> {
        match self {
            UnitSlot::Gap(id) => Some(id.to_string()),
            UnitSlot::Item(id) => Some(id.clone()),
            UnitSlot::Single | UnitSlot::GroupMember { .. } => None,
        }
    }

    fn group(&self) -> Option<GroupPosition> {
        match self {
            UnitSlot::GroupMember { offset, size } => Some(GroupPosition {
                offset: *offset,
                size: *size,
            }),
            _ => None,
        }
    }
}

/// 按题型目录计算一道题的作答单元
///
/// - 填空类：标记编号升序
/// - 结构化列表：作者顺序，不重排
/// - 多选：`requiredCount` 个组成员
/// - 其余：一个单元
pub fn question_units(question: &Question) -> Vec<UnitSlot> {
    match question.question_type.unit_rule() {
        UnitRule::Single => vec![UnitSlot::Single],
        UnitRule::GapMarkers => extract_gap_ids(question.gap_fields())
            .into_iter()
            .map(UnitSlot::Gap)
            .collect(),
        UnitRule::ItemList => question
            .items
            .iter()
            .enumerate()
            .map(|(ordinal, item)| UnitSlot::Item(item.local_id(ordinal)))
            .collect(),
        UnitRule::Group => {
            let size = question.required_count();
            (0..size)
                .map(|offset| UnitSlot::GroupMember { offset, size })
                .collect()
        }
    }
}

/// 给单道题编号，`first_number` 为它的第一个题号
///
/// 每道题可以独立编号，便于单测。
pub fn number_question(
    first_number: u32,
    section_index: usize,
    question_index: usize,
    question: &Question,
) -> Vec<QuestionIndexEntry> {
    question_units(question)
        .into_iter()
        .zip(first_number..)
        .map(|(slot, global_number)| QuestionIndexEntry {
            global_number,
            section_index,
            question_index,
            local_unit_id: slot.local_unit_id(),
            question_type: question.question_type,
            group: slot.group(),
        })
        .collect()
}

/// 生成整套测试的题号索引
///
/// 以 `(下一个题号, 已生成条目)` 做折叠，没有跨调用的可变计数器。
pub fn build_question_index(test: &Test) -> QuestionIndex {
    let (next_number, entries) = test
        .sections
        .iter()
        .enumerate()
        .flat_map(|(section_index, section)| {
            section
                .questions
                .iter()
                .enumerate()
                .map(move |(question_index, question)| (section_index, question_index, question))
        })
        .fold(
            (1u32, Vec::new()),
            |(next_number, mut emitted), (section_index, question_index, question)| {
                let units = number_question(next_number, section_index, question_index, question);
                debug!(
                    "Section {} 第 {} 题 ({}) → {} 个单元",
                    section_index + 1,
                    question_index + 1,
                    question.question_type,
                    units.len()
                );
                let next_number = next_number + units.len() as u32;
                emitted.extend(units);
                (next_number, emitted)
            },
        );

    debug!("编号完成，共 {} 个单元", next_number - 1);
    QuestionIndex::new(entries)
}

/// 作答单元总数（题目数量估算）
pub fn count_units(test: &Test) -> usize {
    test.sections
        .iter()
        .flat_map(|s| s.questions.iter())
        .map(|q| question_units(q).len())
        .sum()
}
