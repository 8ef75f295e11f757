//! HTML 文档元数据处理
//!
//! 读取字符编码声明以及 `<meta name="...">` 标签。

use markup5ever_rcdom::Handle;

use super::dom::{get_node_attr, is_element, Document};

/// 获取文档字符编码
///
/// 支持两种格式：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
pub fn get_charset(document: &Document) -> Option<String> {
    let head = document.head()?;

    for meta_node in head.children.borrow().iter().filter(|n| is_element(n, "meta")) {
        if let Some(meta_charset_node_attr_value) = get_node_attr(meta_node, "charset") {
            return Some(meta_charset_node_attr_value);
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(content_type) = get_node_attr(meta_node, "content") {
                if let Some(charset) = parse_charset(&content_type) {
                    return Some(charset);
                }
            }
        }
    }

    None
}

/// 从 Content-Type 值中提取 charset 参数
pub fn parse_charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|part| {
        let part = part.trim();
        part.get(..8)
            .filter(|key| key.eq_ignore_ascii_case("charset="))
            .map(|_| part[8..].trim_matches('"').to_string())
    })
}

/// 查找第一个 `<meta name="...">` 标签
pub fn find_meta_by_name(document: &Document, meta_name: &str) -> Option<Handle> {
    document.find_first(|node| {
        is_element(node, "meta") && get_node_attr(node, "name").as_deref() == Some(meta_name)
    })
}
