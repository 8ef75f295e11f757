//! 防抖器
//!
//! 最多只有一个待执行的任务。再次调度会取消之前的截止时间并重新计时，
//! 所以窗口内的多次触发只会执行一次，且执行的是最后一次调度。
//! 时间由调用方传入，运行时本身不持有计时器。

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 从 `now` 开始重新计时；返回是否替换了一个尚未执行的任务
    pub fn schedule(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.delay).is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 截止时间已到则消费掉待执行的任务并返回 `true`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
