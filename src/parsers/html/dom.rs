//! 基础DOM操作
//!
//! 在 `markup5ever_rcdom` 之上提供店面脚本需要的全部DOM原语：
//! 属性读写、class 列表、父节点查找、元素创建与插入、文本内容读取。

use std::cell::RefCell;
use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, StrTendril, TendrilSink};
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

use super::walker::{elements, Descendants};

/// 一个已解析的HTML文档
///
/// 文档总是包含 `<html>`、`<head>` 和 `<body>`，html5ever 的树构建器会补齐缺失的部分。
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// 从UTF-8字符串解析文档
    pub fn parse(html: &str) -> Document {
        Document {
            dom: parse_document(RcDom::default(), Default::default()).one(html),
        }
    }

    /// 将HTML字节按给定编码转换为文档
    ///
    /// 编码标签无法识别时按UTF-8（有损）解码。
    pub fn from_bytes(data: &[u8], document_encoding: &str) -> Document {
        let s: String = if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let (string, _, _) = encoding.decode(data);
            string.to_string()
        } else {
            String::from_utf8_lossy(data).to_string()
        };

        Document::parse(&s)
    }

    pub fn dom(&self) -> &RcDom {
        &self.dom
    }

    /// 文档根节点（`#document`）
    pub fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    /// `<html>` 元素
    pub fn html(&self) -> Option<Handle> {
        get_child_node_by_name(&self.dom.document, "html")
    }

    pub fn head(&self) -> Option<Handle> {
        self.html()
            .and_then(|html| get_child_node_by_name(&html, "head"))
    }

    pub fn body(&self) -> Option<Handle> {
        self.html()
            .and_then(|html| get_child_node_by_name(&html, "body"))
    }

    /// 文档中所有元素（深度优先，文档顺序）
    pub fn elements(&self) -> impl Iterator<Item = Handle> {
        elements(&self.dom.document)
    }

    /// 按文档顺序查找第一个满足条件的元素
    pub fn find_first<F>(&self, predicate: F) -> Option<Handle>
    where
        F: FnMut(&Handle) -> bool,
    {
        self.elements().find(predicate)
    }

    /// 创建一个HTML命名空间中的元素，尚未插入到树中
    pub fn create_element(&self, name: &str, attrs: &[(&str, &str)]) -> Handle {
        self.create_element_ns(QualName::new(None, ns!(html), LocalName::from(name)), attrs)
    }

    /// 创建一个SVG命名空间中的元素
    pub fn create_svg_element(&self, name: &str, attrs: &[(&str, &str)]) -> Handle {
        self.create_element_ns(QualName::new(None, ns!(svg), LocalName::from(name)), attrs)
    }

    fn create_element_ns(&self, name: QualName, attrs: &[(&str, &str)]) -> Handle {
        let attributes = attrs
            .iter()
            .map(|(attr_name, attr_value)| Attribute {
                name: QualName::new(None, ns!(), LocalName::from(*attr_name)),
                value: format_tendril!("{}", attr_value),
            })
            .collect();

        create_element(&self.dom, name, attributes)
    }

    /// 创建一个文本节点
    pub fn create_text(&self, text: &str) -> Handle {
        Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from_slice(text)),
        })
    }

    /// 以构建器方式创建元素
    pub fn build(&self, name: &str) -> ElementBuilder<'_> {
        ElementBuilder {
            document: self,
            node: self.create_element(name, &[]),
        }
    }
}

/// 元素构建器，用于拼装小型DOM片段（支付图标、无障碍面板等）
pub struct ElementBuilder<'a> {
    document: &'a Document,
    node: Handle,
}

impl ElementBuilder<'_> {
    pub fn attr(self, attr_name: &str, attr_value: &str) -> Self {
        set_node_attr(&self.node, attr_name, Some(attr_value.to_string()));
        self
    }

    pub fn class(self, class_name: &str) -> Self {
        self.attr("class", class_name)
    }

    pub fn text(self, text: &str) -> Self {
        append_child(&self.node, self.document.create_text(text));
        self
    }

    pub fn child(self, child: Handle) -> Self {
        append_child(&self.node, child);
        self
    }

    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = Handle>,
    {
        for child in children {
            append_child(&self.node, child);
        }
        self
    }

    pub fn finish(self) -> Handle {
        self.node
    }
}

/// 根据名称获取子节点
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children.iter().find(|child| match child.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    });
    matching_children.cloned()
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 判断节点是否为指定名称的元素
pub fn is_element(node: &Handle, node_name: &str) -> bool {
    get_node_name(node) == Some(node_name)
}

/// 获取父节点
///
/// 父指针存放在 `Cell` 中，读取时需要取出再放回。
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    let parent = weak.as_ref().and_then(|node| node.upgrade());
    child.parent.set(weak);
    parent
}

/// 设置节点属性
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.clone() {
                    let _ = &attrs_mut[i].value.clear();
                    let _ = &attrs_mut[i].value.push_slice(attr_value.as_str());
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            // Add new attribute (since originally the target node didn't have it)
            if let Some(attr_value) = attr_value {
                let name = LocalName::from(attr_name);

                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), name),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}

/// 把子节点追加到父节点末尾
///
/// 子节点如果已经挂在别处，会先从原父节点上摘下。
pub fn append_child(parent: &Handle, child: Handle) {
    detach(&child);
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// 把节点从它的父节点上摘下
pub fn detach(node: &Handle) {
    if let Some(parent) = get_parent_node(node) {
        parent
            .children
            .borrow_mut()
            .retain(|sibling| !Rc::ptr_eq(sibling, node));
    }
    node.parent.set(None);
}

/// 向上查找最近的指定名称的祖先元素（不含自身）
pub fn closest(node: &Handle, node_name: &str) -> Option<Handle> {
    let mut current = get_parent_node(node);
    while let Some(candidate) = current {
        if is_element(&candidate, node_name) {
            return Some(candidate);
        }
        current = get_parent_node(&candidate);
    }
    None
}

/// 元素的所有后代文本拼接而成的内容
pub fn text_content(node: &Handle) -> String {
    let mut content = String::new();
    for descendant in Descendants::new(node) {
        if let NodeData::Text { contents } = &descendant.data {
            content.push_str(&contents.borrow());
        }
    }
    content
}

/// 替换文本节点的内容
pub fn set_text(node: &Handle, text: &str) {
    if let NodeData::Text { contents } = &node.data {
        let mut contents = contents.borrow_mut();
        contents.clear();
        contents.push_slice(text);
    }
}

/// 用单个文本节点替换元素的全部子节点
pub fn set_text_content(node: &Handle, text: &str) {
    for child in node.children.borrow_mut().drain(..) {
        child.parent.set(None);
    }
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    });
    append_child(node, text_node);
}

/// 检查元素的 class 属性是否包含给定的类名
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// 按 `classList.toggle(name, force)` 的语义添加或移除类名
pub fn toggle_class(node: &Handle, class_name: &str, force: bool) {
    let classes = get_node_attr(node, "class").unwrap_or_default();
    let mut list: Vec<&str> = classes.split_ascii_whitespace().collect();
    let present = list.contains(&class_name);

    if force == present {
        return;
    }

    if force {
        list.push(class_name);
    } else {
        list.retain(|c| *c != class_name);
    }

    set_node_attr(node, "class", Some(list.join(" ")));
}

pub fn add_class(node: &Handle, class_name: &str) {
    toggle_class(node, class_name, true);
}

pub fn remove_class(node: &Handle, class_name: &str) {
    toggle_class(node, class_name, false);
}
