//! 无障碍组件
//!
//! 符合以色列无障碍法规的浮动组件：开关按钮、设置面板、无障碍声明弹窗和阅读辅助线。
//! 用户偏好以JSON保存；宿主页面负责持久化（浏览器中即 `localStorage`），
//! 这里只负责解析、修改和应用。

use chrono::Utc;
use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::AccessibilityConfig;
use crate::core::RtlProResult;
use crate::parsers::css::InlineStyle;
use crate::parsers::html::{
    add_class, append_child, elements, get_node_attr, get_parent_node, has_class, remove_class,
    set_text_content, toggle_class, Document,
};

/// 宿主保存偏好时使用的键
pub const STORAGE_KEY: &str = "rtl_pro_a11y_settings";
pub const MIN_FONT_STEP: i32 = -3;
pub const MAX_FONT_STEP: i32 = 5;

pub const TOGGLE_CLASS: &str = "rtl-pro-a11y-toggle";
pub const PANEL_CLASS: &str = "rtl-pro-a11y-panel";
pub const MODAL_OVERLAY_CLASS: &str = "rtl-pro-a11y-modal-overlay";
pub const READING_GUIDE_CLASS: &str = "rtl-pro-reading-guide";
const READING_GUIDE_LINE_CLASS: &str = "rtl-pro-reading-guide-line";
const CLOSE_CLASS: &str = "rtl-pro-a11y-close";
const ACTIVE: &str = "active";

/// 面板中可以开关的功能
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    TextSpacing,
    HighContrast,
    Grayscale,
    HighlightLinks,
    LargeCursor,
    ReadingGuide,
    StopAnimations,
}

impl Feature {
    /// 面板中的显示顺序
    pub const ALL: [Feature; 7] = [
        Feature::TextSpacing,
        Feature::HighContrast,
        Feature::Grayscale,
        Feature::HighlightLinks,
        Feature::LargeCursor,
        Feature::ReadingGuide,
        Feature::StopAnimations,
    ];

    /// 偏好JSON和 `data-feature` 中使用的键
    pub fn key(self) -> &'static str {
        match self {
            Feature::TextSpacing => "textSpacing",
            Feature::HighContrast => "highContrast",
            Feature::Grayscale => "grayscale",
            Feature::HighlightLinks => "highlightLinks",
            Feature::LargeCursor => "largeCursor",
            Feature::ReadingGuide => "readingGuide",
            Feature::StopAnimations => "stopAnimations",
        }
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|feature| feature.key() == key)
    }

    /// 启用时加到 `<body>` 上的类；阅读辅助线自己切换 `active`
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Feature::TextSpacing => Some("rtl-pro-text-spacing"),
            Feature::HighContrast => Some("rtl-pro-high-contrast"),
            Feature::Grayscale => Some("rtl-pro-grayscale"),
            Feature::HighlightLinks => Some("rtl-pro-highlight-links"),
            Feature::LargeCursor => Some("rtl-pro-large-cursor"),
            Feature::ReadingGuide => None,
            Feature::StopAnimations => Some("rtl-pro-stop-animations"),
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Feature::TextSpacing => "↔️",
            Feature::HighContrast => "◐",
            Feature::Grayscale => "🔲",
            Feature::HighlightLinks => "🔗",
            Feature::LargeCursor => "🖱️",
            Feature::ReadingGuide => "📏",
            Feature::StopAnimations => "⏸️",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Feature::TextSpacing => "ריווח טקסט",
            Feature::HighContrast => "ניגודיות גבוהה",
            Feature::Grayscale => "גווני אפור",
            Feature::HighlightLinks => "הדגש קישורים",
            Feature::LargeCursor => "סמן גדול",
            Feature::ReadingGuide => "סרגל קריאה",
            Feature::StopAnimations => "עצור אנימציות",
        }
    }
}

/// 用户的无障碍偏好
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    /// 字号档位，范围 [`MIN_FONT_STEP`]..=[`MAX_FONT_STEP`]
    pub font_size: i32,
    pub high_contrast: bool,
    pub grayscale: bool,
    pub highlight_links: bool,
    pub large_cursor: bool,
    pub reading_guide: bool,
    pub stop_animations: bool,
    pub text_spacing: bool,
}

impl AccessibilityPreferences {
    /// 解析保存的偏好；缺失或损坏时返回默认值
    pub fn from_saved(saved: Option<&str>) -> Self {
        let mut preferences = saved
            .and_then(|raw| match serde_json::from_str::<Self>(raw) {
                Ok(preferences) => Some(preferences),
                Err(err) => {
                    trace!(%err, "discarding malformed accessibility preferences");
                    None
                }
            })
            .unwrap_or_default();
        preferences.font_size = preferences.font_size.clamp(MIN_FONT_STEP, MAX_FONT_STEP);
        preferences
    }

    pub fn to_json(&self) -> RtlProResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::TextSpacing => self.text_spacing,
            Feature::HighContrast => self.high_contrast,
            Feature::Grayscale => self.grayscale,
            Feature::HighlightLinks => self.highlight_links,
            Feature::LargeCursor => self.large_cursor,
            Feature::ReadingGuide => self.reading_guide,
            Feature::StopAnimations => self.stop_animations,
        }
    }

    /// 切换功能，返回新的状态
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::TextSpacing => &mut self.text_spacing,
            Feature::HighContrast => &mut self.high_contrast,
            Feature::Grayscale => &mut self.grayscale,
            Feature::HighlightLinks => &mut self.highlight_links,
            Feature::LargeCursor => &mut self.large_cursor,
            Feature::ReadingGuide => &mut self.reading_guide,
            Feature::StopAnimations => &mut self.stop_animations,
        };
        *flag = !*flag;
        *flag
    }

    /// 增大一档字号；已到上限时返回 `false`
    pub fn increase_font(&mut self) -> bool {
        if self.font_size >= MAX_FONT_STEP {
            return false;
        }
        self.font_size += 1;
        true
    }

    /// 减小一档字号；已到下限时返回 `false`
    pub fn decrease_font(&mut self) -> bool {
        if self.font_size <= MIN_FONT_STEP {
            return false;
        }
        self.font_size -= 1;
        true
    }

    /// 面板上显示的百分比
    pub fn font_percent(&self) -> i32 {
        100 + self.font_size * 10
    }

    /// 根元素字号（像素）
    pub fn root_font_size(&self) -> i32 {
        16 + self.font_size * 2
    }
}

/// 已挂载到文档中的无障碍组件
#[derive(Debug)]
pub struct AccessibilityWidget {
    preferences: AccessibilityPreferences,
    html: Option<Handle>,
    body: Handle,
    toggle_button: Option<Handle>,
    panel: Option<Handle>,
    statement: Option<Handle>,
    reading_guide: Handle,
    reading_guide_line: Handle,
}

impl AccessibilityWidget {
    /// 按配置挂载组件并应用保存的偏好
    ///
    /// 组件未启用或文档没有 `<body>` 时返回 `None`。
    pub fn mount(
        document: &Document,
        config: &AccessibilityConfig,
        saved: Option<&str>,
    ) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let Some(body) = document.body() else {
            trace!("no body, accessibility widget skipped");
            return None;
        };

        let (toggle_button, panel) = if config.show_widget {
            let button = build_toggle_button(document, config);
            let panel = build_panel(document, config);
            append_child(&body, button.clone());
            append_child(&body, panel.clone());
            (Some(button), Some(panel))
        } else {
            (None, None)
        };

        let statement = config.show_statement.then(|| {
            let overlay = build_statement(document, config);
            append_child(&body, overlay.clone());
            overlay
        });

        let reading_guide_line = document.build("div").class(READING_GUIDE_LINE_CLASS).finish();
        let reading_guide = document
            .build("div")
            .class(READING_GUIDE_CLASS)
            .child(reading_guide_line.clone())
            .finish();
        append_child(&body, reading_guide.clone());

        let mut widget = AccessibilityWidget {
            preferences: AccessibilityPreferences::from_saved(saved),
            html: document.html(),
            body,
            toggle_button,
            panel,
            statement,
            reading_guide,
            reading_guide_line,
        };
        widget.refresh();

        debug!(
            widget = widget.panel.is_some(),
            statement = widget.statement.is_some(),
            "accessibility widget mounted"
        );
        Some(widget)
    }

    pub fn preferences(&self) -> &AccessibilityPreferences {
        &self.preferences
    }

    /// 当前偏好的JSON，供宿主保存到 [`STORAGE_KEY`]
    pub fn preferences_json(&self) -> RtlProResult<String> {
        self.preferences.to_json()
    }

    /// 浮动的无障碍按钮；`showWidget` 关闭时没有
    pub fn toggle_button(&self) -> Option<&Handle> {
        self.toggle_button.as_ref()
    }

    pub fn panel(&self) -> Option<&Handle> {
        self.panel.as_ref()
    }

    pub fn statement(&self) -> Option<&Handle> {
        self.statement.as_ref()
    }

    pub fn reading_guide(&self) -> &Handle {
        &self.reading_guide
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.as_ref().is_some_and(|panel| has_class(panel, ACTIVE))
    }

    pub fn toggle_panel(&mut self) {
        if let Some(panel) = &self.panel {
            toggle_class(panel, ACTIVE, !has_class(panel, ACTIVE));
        }
    }

    pub fn toggle_feature(&mut self, feature: Feature) -> bool {
        let enabled = self.preferences.toggle(feature);
        self.refresh();
        enabled
    }

    pub fn increase_font(&mut self) -> bool {
        let changed = self.preferences.increase_font();
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn decrease_font(&mut self) -> bool {
        let changed = self.preferences.decrease_font();
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn reset(&mut self) {
        self.preferences = AccessibilityPreferences::default();
        self.refresh();
    }

    /// 替换为另一份保存的偏好
    pub fn restore(&mut self, saved: Option<&str>) {
        self.preferences = AccessibilityPreferences::from_saved(saved);
        self.refresh();
    }

    /// 打开声明弹窗并收起面板
    pub fn show_statement(&mut self) -> bool {
        let Some(statement) = &self.statement else {
            return false;
        };
        add_class(statement, ACTIVE);
        if let Some(panel) = &self.panel {
            remove_class(panel, ACTIVE);
        }
        true
    }

    pub fn hide_statement(&mut self) {
        if let Some(statement) = &self.statement {
            remove_class(statement, ACTIVE);
        }
    }

    pub fn is_statement_open(&self) -> bool {
        self.statement
            .as_ref()
            .is_some_and(|statement| has_class(statement, ACTIVE))
    }

    /// 鼠标移动时让阅读辅助线跟随指针
    pub fn move_reading_guide(&mut self, client_y: i32) {
        if !self.preferences.reading_guide {
            return;
        }
        let mut style = InlineStyle::of(&self.reading_guide_line).unwrap_or_default();
        style.set("top", &format!("{}px", client_y - 20));
        style.write_to(&self.reading_guide_line);
    }

    /// 处理组件内的一次点击，返回是否有控件响应
    ///
    /// 从被点击的节点向上查找第一个带行为的控件，与事件冒泡到按钮监听器的效果一致。
    pub fn click(&mut self, target: &Handle) -> bool {
        if let Some(statement) = &self.statement {
            if std::rc::Rc::ptr_eq(statement, target) {
                self.hide_statement();
                return true;
            }
        }

        let mut current = Some(target.clone());
        while let Some(node) = current {
            if let Some(handled) = self.activate(&node) {
                return handled;
            }
            current = get_parent_node(&node);
        }
        false
    }

    fn activate(&mut self, node: &Handle) -> Option<bool> {
        if let Some(feature) = get_node_attr(node, "data-feature").and_then(|k| Feature::from_key(&k)) {
            self.toggle_feature(feature);
            return Some(true);
        }

        match get_node_attr(node, "data-action").as_deref() {
            Some("increase-font") => return Some(self.increase_font()),
            Some("decrease-font") => return Some(self.decrease_font()),
            Some("reset") => {
                self.reset();
                return Some(true);
            }
            Some("show-statement") => return Some(self.show_statement()),
            _ => {}
        }

        if has_class(node, CLOSE_CLASS) {
            if self.is_inside(node, self.statement.as_ref()) {
                self.hide_statement();
            } else {
                self.toggle_panel();
            }
            return Some(true);
        }

        if has_class(node, TOGGLE_CLASS) {
            self.toggle_panel();
            return Some(true);
        }

        None
    }

    fn is_inside(&self, node: &Handle, container: Option<&Handle>) -> bool {
        let Some(container) = container else {
            return false;
        };
        let mut current = Some(node.clone());
        while let Some(node) = current {
            if std::rc::Rc::ptr_eq(&node, container) {
                return true;
            }
            current = get_parent_node(&node);
        }
        false
    }

    /// 把偏好应用到文档并同步面板状态
    fn refresh(&mut self) {
        let preferences = self.preferences;

        if let Some(html) = &self.html {
            let mut style = InlineStyle::of(html).unwrap_or_default();
            style.set("font-size", &format!("{}px", preferences.root_font_size()));
            style.write_to(html);
        }

        for feature in Feature::ALL {
            if let Some(class_name) = feature.body_class() {
                toggle_class(&self.body, class_name, preferences.is_enabled(feature));
            }
        }
        toggle_class(&self.reading_guide, ACTIVE, preferences.reading_guide);

        if let Some(panel) = &self.panel {
            for node in elements(panel) {
                if let Some(feature) =
                    get_node_attr(&node, "data-feature").and_then(|k| Feature::from_key(&k))
                {
                    toggle_class(&node, ACTIVE, preferences.is_enabled(feature));
                }
                if get_node_attr(&node, "data-display").as_deref() == Some("font-size") {
                    set_text_content(&node, &format!("{}%", preferences.font_percent()));
                }
            }
        }

        trace!(font_size = preferences.font_size, "accessibility preferences applied");
    }
}

fn build_toggle_button(document: &Document, config: &AccessibilityConfig) -> Handle {
    let icon = document.create_svg_element(
        "svg",
        &[("viewBox", "0 0 24 24"), ("xmlns", "http://www.w3.org/2000/svg")],
    );
    append_child(
        &icon,
        document.create_svg_element(
            "circle",
            &[("cx", "12"), ("cy", "4"), ("r", "2"), ("fill", "white")],
        ),
    );
    for path in [
        "M12 7c-3 0-5.5 1-7 2l1.5 2c1.2-.8 3.2-1.5 5.5-1.5s4.3.7 5.5 1.5L19 9c-1.5-1-4-2-7-2z",
        "M10 11v3H8v6h3v-6h2v6h3v-6h-2v-3h-4z",
    ] {
        append_child(
            &icon,
            document.create_svg_element("path", &[("d", path), ("fill", "white")]),
        );
    }

    let mut style = InlineStyle::default();
    style.set("background-color", config.color());

    document
        .build("button")
        .class(&format!("{} {}", TOGGLE_CLASS, config.position()))
        .attr("style", &style.to_string())
        .attr("aria-label", "תפריט נגישות")
        .attr("title", "נגישות")
        .child(icon)
        .finish()
}

fn feature_button(document: &Document, feature: Feature) -> Handle {
    document
        .build("button")
        .class("rtl-pro-a11y-btn")
        .attr("data-feature", feature.key())
        .child(
            document
                .build("span")
                .class("rtl-pro-a11y-btn-icon")
                .text(feature.icon())
                .finish(),
        )
        .child(
            document
                .build("span")
                .class("rtl-pro-a11y-btn-label")
                .text(feature.label())
                .finish(),
        )
        .finish()
}

fn group(document: &Document, title: &str) -> Handle {
    document
        .build("div")
        .class("rtl-pro-a11y-group")
        .child(
            document
                .build("div")
                .class("rtl-pro-a11y-group-title")
                .text(title)
                .finish(),
        )
        .finish()
}

fn close_button(document: &Document) -> Handle {
    document
        .build("button")
        .class(CLOSE_CLASS)
        .attr("aria-label", "סגור")
        .text("×")
        .finish()
}

fn build_panel(document: &Document, config: &AccessibilityConfig) -> Handle {
    let header = document
        .build("div")
        .class("rtl-pro-a11y-header")
        .child(document.build("h3").text("♿ הגדרות נגישות").finish())
        .child(close_button(document))
        .finish();

    let size_controls = document
        .build("div")
        .class("rtl-pro-a11y-size-controls")
        .child(
            document
                .build("button")
                .class("rtl-pro-a11y-size-btn")
                .attr("data-action", "decrease-font")
                .attr("aria-label", "הקטן טקסט")
                .text("א-")
                .finish(),
        )
        .child(
            document
                .build("span")
                .attr("data-display", "font-size")
                .text("100%")
                .finish(),
        )
        .child(
            document
                .build("button")
                .class("rtl-pro-a11y-size-btn")
                .attr("data-action", "increase-font")
                .attr("aria-label", "הגדל טקסט")
                .text("א+")
                .finish(),
        )
        .finish();

    let content = group(document, "📝 תוכן");
    append_child(
        &content,
        document
            .build("div")
            .class("rtl-pro-a11y-size-row")
            .child(document.build("span").text("גודל טקסט").finish())
            .child(size_controls)
            .finish(),
    );
    append_child(&content, feature_button(document, Feature::TextSpacing));

    let display = group(document, "🎨 תצוגה");
    for feature in [Feature::HighContrast, Feature::Grayscale, Feature::HighlightLinks] {
        append_child(&display, feature_button(document, feature));
    }

    let navigation = group(document, "🖱️ ניווט");
    for feature in [Feature::LargeCursor, Feature::ReadingGuide, Feature::StopAnimations] {
        append_child(&navigation, feature_button(document, feature));
    }

    let body = document
        .build("div")
        .class("rtl-pro-a11y-body")
        .children([content, display, navigation])
        .child(
            document
                .build("button")
                .class("rtl-pro-a11y-reset")
                .attr("data-action", "reset")
                .text("🔄 איפוס הגדרות")
                .finish(),
        )
        .finish();

    let panel = document
        .build("div")
        .class(&format!("{} {}", PANEL_CLASS, config.position()))
        .attr("role", "dialog")
        .attr("aria-label", "הגדרות נגישות")
        .child(header)
        .child(body)
        .finish();

    if config.show_statement {
        append_child(
            &panel,
            document
                .build("a")
                .class("rtl-pro-a11y-statement-link")
                .attr("data-action", "show-statement")
                .text("📋 הצהרת נגישות")
                .finish(),
        );
    }

    panel
}

const ADJUSTMENTS: &[&str] = &[
    "התאמת האתר לטכנולוגיות מסייעות",
    "ניווט באמצעות מקלדת",
    "התאמת צבעים וניגודיות",
    "תיאור טקסטואלי לתמונות",
    "שינוי גודל טקסט",
    "תמיכה בתצוגת RTL",
    "מבנה כותרות היררכי",
    "התאמת טפסים",
];

fn contact_line(document: &Document, label: &str, value: &str, href: Option<String>) -> Handle {
    let paragraph = document
        .build("p")
        .child(document.build("strong").text(label).finish())
        .text(" ")
        .finish();
    match href {
        Some(href) => append_child(
            &paragraph,
            document.build("a").attr("href", &href).text(value).finish(),
        ),
        None => append_child(&paragraph, document.create_text(value)),
    }
    paragraph
}

fn build_statement(document: &Document, config: &AccessibilityConfig) -> Handle {
    let last_updated = config
        .last_updated
        .clone()
        .filter(|date| !date.is_empty())
        .unwrap_or_else(|| Utc::now().date_naive().format("%Y-%m-%d").to_string());

    let heading = |text: &str| document.build("h3").text(text).finish();
    let paragraph = |text: &str| document.build("p").text(text).finish();

    let mut sections = vec![
        heading("כללי"),
        paragraph(&format!(
            "{} מחויבים להנגשת האתר לאנשים עם מוגבלויות, בהתאם לחוק שוויון זכויות לאנשים עם מוגבלות, תשנ\"ח-1998.",
            config.company_name()
        )),
        heading("רמת הנגישות"),
        paragraph("אנו שואפים לעמוד בדרישות תקן הנגישות הישראלי (תקן ישראלי 5568) המבוסס על תקן WCAG 2.1 ברמה AA."),
        heading("התאמות הנגישות שבוצעו"),
        document
            .build("ul")
            .children(
                ADJUSTMENTS
                    .iter()
                    .map(|item| document.build("li").text(item).finish())
                    .collect::<Vec<_>>(),
            )
            .finish(),
        heading("דפדפנים נתמכים"),
        paragraph("Chrome, Firefox, Safari, Edge."),
        heading("יצירת קשר"),
        paragraph("אם נתקלתם בבעיית נגישות, צרו קשר:"),
    ];

    let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
    if let Some(officer) = present(&config.accessibility_officer) {
        sections.push(contact_line(document, "רכז/ת נגישות:", &officer, None));
    }
    if let Some(email) = present(&config.contact_email) {
        let href = format!("mailto:{}", email);
        sections.push(contact_line(document, "אימייל:", &email, Some(href)));
    }
    if let Some(phone) = present(&config.contact_phone) {
        let href = format!("tel:{}", phone);
        sections.push(contact_line(document, "טלפון:", &phone, Some(href)));
    }
    sections.push(heading("תאריך עדכון"));
    sections.push(paragraph(&format!(
        "הצהרת נגישות זו עודכנה לאחרונה בתאריך {}.",
        last_updated
    )));

    let modal = document
        .build("div")
        .class("rtl-pro-a11y-modal")
        .child(
            document
                .build("div")
                .class("rtl-pro-a11y-modal-header")
                .child(document.build("h2").text("הצהרת נגישות").finish())
                .child(close_button(document))
                .finish(),
        )
        .child(
            document
                .build("div")
                .class("rtl-pro-a11y-modal-body")
                .children(sections)
                .finish(),
        )
        .finish();

    document
        .build("div")
        .class(MODAL_OVERLAY_CLASS)
        .child(modal)
        .finish()
}
