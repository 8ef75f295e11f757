//! 翻译引擎
//!
//! 一次完整的翻译包含文本节点、`placeholder`/`aria-label`/`title` 属性以及
//! meta description。每一次都独立地重新扫描整棵树，不记忆已翻译过的节点：
//! 已经被替换成希伯来文的内容不再匹配任何英文键，所以重复执行是幂等的。

use markup5ever_rcdom::{Handle, NodeData};
use tracing::{debug, trace};

use crate::parsers::html::{
    find_meta_by_name, get_node_attr, get_node_name, get_parent_node, set_node_attr, set_text,
    Document, TextNodes,
};

use super::table::TranslationTable;

/// 文本节点的父元素是这些元素时跳过
const SKIP_PARENTS: &[&str] = &["script", "style", "noscript"];

/// 整体替换的属性
pub const TRANSLATABLE_ATTRS: &[&str] = &["placeholder", "aria-label", "title"];

/// 一次翻译的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    pub text_nodes: usize,
    pub attributes: usize,
    pub meta: usize,
}

impl TranslationStats {
    pub fn total(&self) -> usize {
        self.text_nodes + self.attributes + self.meta
    }
}

/// 对文档执行一次完整翻译
pub fn translate_page(document: &Document, table: &TranslationTable) -> TranslationStats {
    let text_nodes = match document.body() {
        Some(body) => translate_text_nodes(&body, table),
        None => 0,
    };

    let attributes = TRANSLATABLE_ATTRS
        .iter()
        .map(|attr_name| translate_attribute(document, attr_name, table))
        .sum();

    let meta = translate_meta_description(document, table);

    let stats = TranslationStats {
        text_nodes,
        attributes,
        meta,
    };
    debug!(
        text_nodes = stats.text_nodes,
        attributes = stats.attributes,
        meta = stats.meta,
        "translation pass finished"
    );
    stats
}

/// 文本节点是否参与翻译
///
/// 拒绝：没有父元素、父元素是 script/style/noscript、内容只有空白。
pub fn is_translatable_text(node: &Handle) -> bool {
    let parent_name = match get_parent_node(node) {
        Some(parent) => match get_node_name(&parent) {
            Some(name) => name.to_string(),
            None => return false,
        },
        None => return false,
    };

    if SKIP_PARENTS.contains(&parent_name.as_str()) {
        return false;
    }

    match &node.data {
        NodeData::Text { contents } => !contents.borrow().trim().is_empty(),
        _ => false,
    }
}

/// 翻译根节点下的所有文本节点，返回替换次数
///
/// 只有去掉首尾空白后与键完全相等的文本才会被替换，原有的首尾空白保持不变。
pub fn translate_text_nodes(root: &Handle, table: &TranslationTable) -> usize {
    // 先收集，替换只作用于本轮开始时的文本节点
    let nodes: Vec<Handle> = TextNodes::new(root, is_translatable_text).collect();
    let mut replaced = 0;

    for node in nodes {
        let original = match &node.data {
            NodeData::Text { contents } => contents.borrow().to_string(),
            _ => continue,
        };
        let trimmed = original.trim();

        if let Some(translated) = table.get(trimmed) {
            set_text(&node, &original.replacen(trimmed, translated, 1));
            replaced += 1;
        }
    }

    replaced
}

/// 翻译文档中所有带某个属性的元素，返回替换次数
pub fn translate_attribute(document: &Document, attr_name: &str, table: &TranslationTable) -> usize {
    let mut replaced = 0;

    for element in document.elements() {
        let Some(value) = get_node_attr(&element, attr_name) else {
            continue;
        };

        if let Some(translated) = table.get(&value) {
            set_node_attr(&element, attr_name, Some(translated.to_string()));
            replaced += 1;
        }
    }

    replaced
}

/// 翻译 `<meta name="description">` 的内容
pub fn translate_meta_description(document: &Document, table: &TranslationTable) -> usize {
    let Some(meta) = find_meta_by_name(document, "description") else {
        trace!("no meta description");
        return 0;
    };

    let content = get_node_attr(&meta, "content").unwrap_or_default();
    match table.get(&content) {
        Some(translated) => {
            set_node_attr(&meta, "content", Some(translated.to_string()));
            1
        }
        None => 0,
    }
}
