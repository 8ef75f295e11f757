//! 合成事件
//!
//! 运行时修改表单字段后会“派发” `input`/`change` 事件，让宿主页面上的响应式框架
//! 感知到变化。这里把派发记录在一个日志里，由宿主读取并转发。

use std::fmt;
use std::rc::Rc;

use markup5ever_rcdom::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    Change,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventKind::Input => f.write_str("input"),
            EventKind::Change => f.write_str("change"),
        }
    }
}

/// 一次已派发的事件
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: Handle,
    pub bubbles: bool,
}

impl DomEvent {
    pub fn is_for(&self, node: &Handle) -> bool {
        Rc::ptr_eq(&self.target, node)
    }
}

/// 按派发顺序保存的事件日志
///
/// 日志不会自行清理，宿主在转发完事件后应调用 [`EventLog::drain`]
/// （或 `Storefront::take_events`），否则记录会在整个页面生命周期内累积。
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<DomEvent>,
}

impl EventLog {
    /// 派发一个冒泡事件
    pub fn dispatch(&mut self, kind: EventKind, target: &Handle) {
        self.events.push(DomEvent {
            kind,
            target: target.clone(),
            bubbles: true,
        });
    }

    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    /// 取出并清空所有事件
    pub fn drain(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.events)
    }

    /// 某个节点上收到的事件类型，按顺序
    pub fn kinds_for(&self, node: &Handle) -> Vec<EventKind> {
        self.events
            .iter()
            .filter(|event| event.is_for(node))
            .map(|event| event.kind)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
