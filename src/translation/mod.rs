//! 翻译模块
//!
//! - `dictionary`: 内置的英文 → 希伯来文词典
//! - `table`: 合并商家覆盖后的精确匹配翻译表
//! - `engine`: 对DOM执行翻译的各个阶段

pub mod dictionary;
pub mod engine;
pub mod table;

pub use engine::{
    is_translatable_text, translate_attribute, translate_meta_description, translate_page,
    translate_text_nodes, TranslationStats, TRANSLATABLE_ATTRS,
};
pub use table::TranslationTable;
