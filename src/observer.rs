//! 变更观察
//!
//! 宿主页面把DOM变更以 [`MutationRecord`] 批次交给运行时。对新插入的元素，
//! RTL 模式下把内联 `direction: ltr` 改为 `rtl`；是否需要重新翻译由调用方
//! 根据 [`ObservedBatch::added_elements`] 决定并做防抖。

use std::time::Duration;

use markup5ever_rcdom::{Handle, NodeData};
use tracing::trace;

use crate::layout::flip_direction;

/// 重新翻译的防抖延迟
pub const RETRANSLATE_DELAY: Duration = Duration::from_millis(100);

/// 一条DOM变更记录
#[derive(Debug, Clone)]
pub enum MutationRecord {
    /// 子节点的增删
    ChildList {
        target: Handle,
        added_nodes: Vec<Handle>,
        removed_nodes: Vec<Handle>,
    },
    /// 文本内容变化
    CharacterData { target: Handle },
}

impl MutationRecord {
    /// 记录 `target` 下新增的节点
    pub fn added(target: &Handle, added_nodes: Vec<Handle>) -> Self {
        MutationRecord::ChildList {
            target: target.clone(),
            added_nodes,
            removed_nodes: Vec::new(),
        }
    }

    pub fn added_nodes(&self) -> &[Handle] {
        match self {
            MutationRecord::ChildList { added_nodes, .. } => added_nodes,
            MutationRecord::CharacterData { .. } => &[],
        }
    }
}

/// 一批变更的处理结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservedBatch {
    pub added_elements: usize,
    pub directions_flipped: usize,
}

impl ObservedBatch {
    pub fn needs_translation(&self) -> bool {
        self.added_elements > 0
    }
}

/// 处理一批变更
pub fn process_mutations(records: &[MutationRecord], rtl: bool) -> ObservedBatch {
    let mut batch = ObservedBatch::default();

    for node in records.iter().flat_map(|record| record.added_nodes()) {
        if !matches!(node.data, NodeData::Element { .. }) {
            continue;
        }
        batch.added_elements += 1;

        if rtl && flip_direction(node) {
            batch.directions_flipped += 1;
        }
    }

    trace!(
        records = records.len(),
        added_elements = batch.added_elements,
        "mutation batch observed"
    );
    batch
}
