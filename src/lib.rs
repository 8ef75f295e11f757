//! # RTL Pro
//!
//! 把店面页面转换为希伯来文从右到左版本的运行时库。
//!
//! ## 模块组织
//!
//! - `storefront` - 运行时句柄，按顺序应用所有功能并接收宿主事件
//! - `layout` - 文档方向与内联样式的镜像
//! - `translation` - 精确匹配的英文 → 希伯来文翻译
//! - `font` / `custom_css` - 样式注入
//! - `payment` - 页脚支付图标
//! - `postcode` - 邮编识别与表单自动填写
//! - `observer` - DOM变更批次的处理
//! - `accessibility` - 无障碍组件
//! - `parsers` - HTML 与内联CSS 的解析和序列化
//! - `core` - 错误类型和整页处理入口

pub mod accessibility;
pub mod config;
pub mod core;
pub mod custom_css;
pub mod env;
pub mod events;
pub mod font;
pub mod layout;
pub mod observer;
pub mod parsers;
pub mod payment;
pub mod postcode;
pub mod storefront;
pub mod translation;
pub mod utils;

// Re-export commonly used items for convenience
pub use config::{AccessibilityConfig, StorefrontConfig};
pub use crate::core::*;
pub use observer::MutationRecord;
pub use parsers::{serialize_document, Document};
pub use storefront::Storefront;
