//! 布局镜像
//!
//! 把文档切换为从右到左：文档级 `dir`/`lang`，内联 `direction: ltr` 与
//! `text-align: left` 的翻转，以及供主题样式表使用的根级自定义属性。

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::parsers::css::InlineStyle;
use crate::parsers::html::{get_node_attr, is_element, set_node_attr, Document};

/// 内容本身有方向性的输入框类型，保持从左到右
pub const DIRECTIONAL_INPUT_TYPES: &[&str] = &["email", "url", "tel", "number"];

/// 写到 `<html>` 上的自定义属性
pub const ROOT_PROPERTIES: &[(&str, &str)] = &[
    ("--rtl-direction", "rtl"),
    ("--rtl-text-align", "right"),
    ("--rtl-float", "right"),
    ("--rtl-margin-start", "margin-right"),
];

/// 一次镜像的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub directions_flipped: usize,
    pub alignments_flipped: usize,
}

/// 对整个文档执行从右到左镜像
///
/// 幂等：已经翻转过的元素不再匹配 `direction: ltr`/`text-align: left`。
pub fn apply_rtl(document: &Document) -> LayoutStats {
    if let Some(html) = document.html() {
        set_node_attr(&html, "dir", Some("rtl".to_string()));
        set_node_attr(&html, "lang", Some("he".to_string()));
    }
    if let Some(body) = document.body() {
        set_node_attr(&body, "dir", Some("rtl".to_string()));
    }

    let mut stats = LayoutStats::default();

    for element in document.elements() {
        let Some(mut style) = InlineStyle::of(&element) else {
            continue;
        };
        let mut changed = false;

        if style.is("direction", "ltr") && !is_directional_input(&element) {
            style.set("direction", "rtl");
            stats.directions_flipped += 1;
            changed = true;
        }

        if style.is("text-align", "left") {
            style.set("text-align", "right");
            stats.alignments_flipped += 1;
            changed = true;
        }

        if changed {
            style.write_to(&element);
        }
    }

    if let Some(html) = document.html() {
        let mut style = InlineStyle::of(&html).unwrap_or_default();
        for (property, value) in ROOT_PROPERTIES {
            style.set(property, value);
        }
        style.write_to(&html);
    }

    debug!(
        directions = stats.directions_flipped,
        alignments = stats.alignments_flipped,
        "layout mirrored"
    );
    stats
}

/// 输入框的类型是否要求保持从左到右（邮箱、网址、电话、数字）
pub fn is_directional_input(node: &Handle) -> bool {
    if !is_element(node, "input") {
        return false;
    }

    let input_type = get_node_attr(node, "type")
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    DIRECTIONAL_INPUT_TYPES.contains(&input_type.as_str())
}

/// 把单个元素的内联 `direction: ltr` 改为 `rtl`，返回是否发生了改变
///
/// 用于新插入的节点，不做输入框类型的例外处理。
pub fn flip_direction(node: &Handle) -> bool {
    match InlineStyle::of(node) {
        Some(mut style) if style.is("direction", "ltr") => {
            style.set("direction", "rtl");
            style.write_to(node);
            true
        }
        _ => false,
    }
}
