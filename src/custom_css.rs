//! 商家自定义CSS

use tracing::debug;

use crate::config::StorefrontConfig;
use crate::parsers::html::{append_child, Document};

pub const CUSTOM_CSS_ID: &str = "rtl-pro-custom-css";

/// 把商家的自定义CSS作为一个 `<style>` 追加到 `<head>`
pub fn inject_custom_css(document: &Document, config: &StorefrontConfig) -> bool {
    let (Some(css), Some(head)) = (config.custom_css(), document.head()) else {
        return false;
    };

    let style = document
        .build("style")
        .attr("id", CUSTOM_CSS_ID)
        .text(css)
        .finish();
    append_child(&head, style);

    debug!(bytes = css.len(), "custom css injected");
    true
}
