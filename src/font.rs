//! 字体注入
//!
//! 在 `<head>` 末尾追加一次字体样式块；初始化时只调用一次，因此不做去重。

use tracing::{debug, trace};

use crate::config::StorefrontConfig;
use crate::parsers::css::{format_quoted_string, InlineStyle};
use crate::parsers::html::{append_child, Document};

pub const FONT_STYLE_ID: &str = "rtl-pro-font";
pub const FONT_FAMILY_PROPERTY: &str = "--rtl-pro-font-family";

/// `"<family>", sans-serif` 形式的字体栈，名称按CSS字符串转义
pub fn font_stack(family: &str) -> String {
    format!("{}, sans-serif", format_quoted_string(family))
}

/// 注入字体使用的CSS
pub fn font_css(family: &str, size: u32) -> String {
    format!(
        "body, body * {{ font-family: {} !important; }} body {{ font-size: {}px; }}",
        font_stack(family),
        size
    )
}

/// 按配置注入字体；未启用或字体名称为空时返回 `false`
pub fn apply_font(document: &Document, config: &StorefrontConfig) -> bool {
    if !config.font_enabled {
        return false;
    }
    let Some(family) = config.font_family() else {
        trace!("font enabled without a family");
        return false;
    };

    if let Some(html) = document.html() {
        let mut style = InlineStyle::of(&html).unwrap_or_default();
        style.set(FONT_FAMILY_PROPERTY, &font_stack(family));
        style.write_to(&html);
    }

    let Some(head) = document.head() else {
        return false;
    };

    if let Some(url) = config.font_url.as_deref().filter(|url| !url.is_empty()) {
        let link = document.create_element("link", &[("rel", "stylesheet"), ("href", url)]);
        append_child(&head, link);
    }

    let style = document
        .build("style")
        .attr("id", FONT_STYLE_ID)
        .text(&font_css(family, config.font_size()))
        .finish();
    append_child(&head, style);

    debug!(family, size = config.font_size(), "font injected");
    true
}
