//! 店铺配置
//!
//! 对应店面页面注入的每店配置对象。所有字段都有默认值：缺失或为空即视为功能关闭，
//! 从不作为错误处理。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RtlProError, RtlProResult};

/// 默认正文字号（像素）
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// 店面运行时配置，一次页面加载期间不可变
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub rtl_enabled: bool,
    pub translation_enabled: bool,
    pub font_enabled: bool,
    pub font_family: Option<String>,
    /// 像素；缺失或为 0 时使用 [`DEFAULT_FONT_SIZE`]
    pub font_size: Option<u32>,
    /// 字体样式表地址（例如 Google Fonts 链接）
    pub font_url: Option<String>,
    pub payment_icons_enabled: bool,
    /// 只显示这些图标；缺失时显示全部
    pub payment_icons: Option<Vec<String>>,
    pub postcode_detection: bool,
    pub buy_now_text: Option<String>,
    pub add_to_cart_text: Option<String>,
    pub custom_css: Option<String>,
    /// 商家自定义翻译，覆盖内置词典
    pub translations: HashMap<String, String>,
    pub accessibility: Option<AccessibilityConfig>,
}

impl StorefrontConfig {
    /// 从JSON字符串加载
    pub fn from_json_str(raw: &str) -> RtlProResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从TOML字符串加载
    pub fn from_toml_str(raw: &str) -> RtlProResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// 根据扩展名选择解析器加载配置文件
    pub fn from_path(path: &Path) -> RtlProResult<Self> {
        let raw = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        debug!(path = %path.display(), "loading storefront configuration");

        match extension.as_str() {
            "json" => Self::from_json_str(&raw),
            "toml" => Self::from_toml_str(&raw),
            other => Err(RtlProError::UnsupportedConfigFormat(other.to_string())),
        }
    }

    /// 主开关：RTL 与翻译都关闭时整个运行时不做任何事
    pub fn is_active(&self) -> bool {
        self.rtl_enabled || self.translation_enabled
    }

    /// 配置的非空字体名称
    pub fn font_family(&self) -> Option<&str> {
        self.font_family
            .as_deref()
            .map(str::trim)
            .filter(|family| !family.is_empty())
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn buy_now_text(&self) -> Option<&str> {
        non_empty(&self.buy_now_text)
    }

    pub fn add_to_cart_text(&self) -> Option<&str> {
        non_empty(&self.add_to_cart_text)
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.custom_css
            .as_deref()
            .filter(|css| !css.trim().is_empty())
    }
}

/// 无障碍组件配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilityConfig {
    pub enabled: bool,
    pub show_widget: bool,
    pub show_statement: bool,
    /// 按钮位置，例如 `bottom-left`
    pub position: Option<String>,
    /// 按钮背景色
    pub color: Option<String>,
    pub company_name: Option<String>,
    pub shop_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub accessibility_officer: Option<String>,
    /// `YYYY-MM-DD`；缺失时使用当天日期
    pub last_updated: Option<String>,
}

impl AccessibilityConfig {
    pub fn position(&self) -> &str {
        non_empty(&self.position).unwrap_or("bottom-left")
    }

    pub fn color(&self) -> &str {
        non_empty(&self.color).unwrap_or("#0066CC")
    }

    /// 声明中使用的商家名称
    pub fn company_name(&self) -> &str {
        non_empty(&self.company_name)
            .or_else(|| non_empty(&self.shop_name))
            .unwrap_or("החנות")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
