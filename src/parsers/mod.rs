//! # 解析器模块
//!
//! - `html` - HTML文档解析、DOM操作、元数据处理、序列化
//! - `css` - 内联样式声明的解析与改写、CSS字符串格式化

pub mod css;
pub mod html;

// Re-export commonly used items for convenience
pub use css::{format_quoted_string, InlineStyle};
pub use html::{serialize_document, Document};
