use std::collections::HashMap;

use crate::config::StorefrontConfig;

use super::dictionary::{ADD_TO_CART_KEYS, BUY_NOW_KEYS, DEFAULT_TRANSLATIONS};

/// 精确匹配的翻译表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// 只包含内置词典的翻译表
    pub fn builtin() -> Self {
        TranslationTable {
            entries: DEFAULT_TRANSLATIONS
                .iter()
                .map(|(english, hebrew)| (english.to_string(), hebrew.to_string()))
                .collect(),
        }
    }

    /// 按店铺配置构建翻译表
    ///
    /// 合并顺序：内置词典 → 商家自定义翻译 → 购买/加入购物车按钮文案。
    pub fn for_config(config: &StorefrontConfig) -> Self {
        let mut table = Self::builtin();

        for (original, translated) in &config.translations {
            table.insert(original, translated);
        }

        if let Some(text) = config.buy_now_text() {
            for key in BUY_NOW_KEYS {
                table.insert(key, text);
            }
        }

        if let Some(text) = config.add_to_cart_text() {
            for key in ADD_TO_CART_KEYS {
                table.insert(key, text);
            }
        }

        table
    }

    /// 添加或覆盖一条翻译；空译文会被忽略
    pub fn insert(&mut self, original: &str, translated: &str) {
        if translated.is_empty() {
            return;
        }
        self.entries
            .insert(original.to_string(), translated.to_string());
    }

    /// 精确查找
    pub fn get(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
