//! DOM遍历
//!
//! 深度优先、文档顺序的惰性遍历器。每次调用都从当前树状态重新开始，
//! 所以在两次遍历之间被修改过的树也能被正确地重新扫描。

use markup5ever_rcdom::{Handle, NodeData};

/// 深度优先的后代遍历器（包含起始节点本身）
pub struct Descendants {
    stack: Vec<Handle>,
}

impl Descendants {
    pub fn new(root: &Handle) -> Self {
        Descendants {
            stack: vec![root.clone()],
        }
    }
}

impl Iterator for Descendants {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;

        // 逆序压栈，保证出栈顺序即文档顺序
        for child in node.children.borrow().iter().rev() {
            self.stack.push(child.clone());
        }

        Some(node)
    }
}

/// 根节点下的所有元素节点
pub fn elements(root: &Handle) -> impl Iterator<Item = Handle> {
    Descendants::new(root).filter(|node| matches!(node.data, NodeData::Element { .. }))
}

/// 只产出文本节点的遍历器，带一个接受/拒绝谓词
pub struct TextNodes<F> {
    inner: Descendants,
    accept: F,
}

impl<F> TextNodes<F>
where
    F: FnMut(&Handle) -> bool,
{
    pub fn new(root: &Handle, accept: F) -> Self {
        TextNodes {
            inner: Descendants::new(root),
            accept,
        }
    }
}

impl<F> Iterator for TextNodes<F>
where
    F: FnMut(&Handle) -> bool,
{
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        loop {
            let node = self.inner.next()?;
            if matches!(node.data, NodeData::Text { .. }) && (self.accept)(&node) {
                return Some(node);
            }
        }
    }
}
