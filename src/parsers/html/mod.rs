//! HTML解析和处理模块
//!
//! - `dom`: 基础DOM操作与文档类型
//! - `walker`: 惰性的DOM遍历器
//! - `metadata`: 文档元数据处理
//! - `serializer`: 序列化功能

pub mod dom;
pub mod metadata;
pub mod serializer;
pub mod walker;

// 重新导出主要的公共 API
pub use dom::{
    add_class, append_child, closest, detach, get_child_node_by_name, get_node_attr,
    get_node_name, get_parent_node, has_class, is_element, remove_class, set_node_attr, set_text,
    set_text_content, text_content, toggle_class, Document, ElementBuilder,
};
pub use metadata::{find_meta_by_name, get_charset, parse_charset};
pub use serializer::{serialize_document, serialize_to_string};
pub use walker::{elements, Descendants, TextNodes};
