//! # 工具模块
//!
//! - `debounce` - 取消并重新调度的单任务防抖器

pub mod debounce;

// Re-export commonly used items for convenience
pub use debounce::Debouncer;
