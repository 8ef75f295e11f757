//! 店面运行时句柄
//!
//! [`Storefront::init`] 按固定顺序应用所有功能，并返回一个句柄。宿主页面通过句柄上的方法
//! 转发DOM变更、计时、表单输入和主题分区事件，而不是依赖全局对象。

use std::time::Instant;

use markup5ever_rcdom::Handle;
use tracing::{debug, info, trace};

use crate::accessibility::AccessibilityWidget;
use crate::config::StorefrontConfig;
use crate::custom_css::inject_custom_css;
use crate::events::{DomEvent, EventLog};
use crate::font::apply_font;
use crate::layout::{apply_rtl, LayoutStats};
use crate::observer::{process_mutations, MutationRecord, ObservedBatch, RETRANSLATE_DELAY};
use crate::parsers::html::{add_class, append_child, set_node_attr, Document};
use crate::payment::add_payment_icons;
use crate::postcode::{PostcodeFill, PostcodeResolver};
use crate::translation::{translate_page, TranslationStats, TranslationTable};
use crate::utils::Debouncer;

/// 初始化完成后加到 `<body>` 上的类
pub const LOADED_CLASS: &str = "rtl-pro-loaded";

/// 一次页面加载期间的运行时
pub struct Storefront {
    document: Document,
    config: StorefrontConfig,
    active: bool,
    translations: TranslationTable,
    postcode: Option<PostcodeResolver>,
    accessibility: Option<AccessibilityWidget>,
    retranslate: Debouncer,
    events: EventLog,
}

impl Storefront {
    /// 对文档应用配置
    ///
    /// RTL 和翻译都关闭时返回一个不活动的句柄，除无障碍组件外文档保持原样。
    pub fn init(document: Document, config: StorefrontConfig) -> Self {
        Self::init_with_preferences(document, config, None)
    }

    /// 同 [`Storefront::init`]，并恢复宿主保存的无障碍偏好
    pub fn init_with_preferences(
        document: Document,
        config: StorefrontConfig,
        saved_preferences: Option<&str>,
    ) -> Self {
        let mut storefront = Storefront {
            translations: TranslationTable::for_config(&config),
            active: config.is_active(),
            document,
            config,
            postcode: None,
            accessibility: None,
            retranslate: Debouncer::new(RETRANSLATE_DELAY),
            events: EventLog::default(),
        };

        // 无障碍组件只受自身的 enabled 控制
        if let Some(a11y) = &storefront.config.accessibility {
            storefront.accessibility =
                AccessibilityWidget::mount(&storefront.document, a11y, saved_preferences);
        }

        if !storefront.active {
            trace!("storefront runtime inactive");
            return storefront;
        }

        if storefront.config.rtl_enabled {
            apply_rtl(&storefront.document);
        }
        if storefront.config.translation_enabled {
            translate_page(&storefront.document, &storefront.translations);
        }
        let font = apply_font(&storefront.document, &storefront.config);
        let custom_css = inject_custom_css(&storefront.document, &storefront.config);
        let payment_icons = add_payment_icons(&storefront.document, &storefront.config);

        if storefront.config.postcode_detection {
            let mut resolver = PostcodeResolver::new();
            resolver.attach_listeners(&storefront.document);
            storefront.postcode = Some(resolver);
        }

        if let Some(body) = storefront.document.body() {
            add_class(&body, LOADED_CLASS);
        }

        info!(
            rtl = storefront.config.rtl_enabled,
            translation = storefront.config.translation_enabled,
            font,
            custom_css,
            payment_icons,
            postcode = storefront.postcode.is_some(),
            accessibility = storefront.accessibility.is_some(),
            "storefront initialized"
        );
        storefront
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// 重新执行布局镜像
    pub fn apply_layout(&self) -> LayoutStats {
        if !self.active {
            return LayoutStats::default();
        }
        apply_rtl(&self.document)
    }

    /// 重新翻译整个文档
    pub fn translate(&self) -> TranslationStats {
        if !self.active {
            return TranslationStats::default();
        }
        translate_page(&self.document, &self.translations)
    }

    /// 处理一批DOM变更
    ///
    /// 先为新出现的邮编输入框挂载监听器，再翻转新元素的方向；翻译启用且有元素插入时
    /// 安排一次防抖的重新翻译，已有的安排会被取代。
    pub fn observe(&mut self, records: &[MutationRecord], now: Instant) -> ObservedBatch {
        if !self.active {
            return ObservedBatch::default();
        }

        if let Some(resolver) = &mut self.postcode {
            resolver.attach_listeners(&self.document);
        }

        let batch = process_mutations(records, self.config.rtl_enabled);

        if self.config.translation_enabled
            && batch.needs_translation()
            && self.retranslate.schedule(now)
        {
            trace!("pending retranslation rescheduled");
        }
        batch
    }

    /// 把节点插入到父节点末尾并按一次变更处理
    pub fn insert(&mut self, parent: &Handle, child: Handle, now: Instant) -> ObservedBatch {
        append_child(parent, child.clone());
        let record = MutationRecord::added(parent, vec![child]);
        self.observe(&[record], now)
    }

    /// 推进时间；防抖到期时执行重新翻译并返回 `true`
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.retranslate.poll(now) {
            return false;
        }
        let stats = self.translate();
        debug!(replaced = stats.total(), "debounced retranslation");
        true
    }

    pub fn pending_translation(&self) -> Option<Instant> {
        self.retranslate.deadline()
    }

    /// 用户在输入框中输入
    ///
    /// 先写入 `value`，再交给已挂载在该输入框上的邮编监听器。
    pub fn input(&mut self, field: &Handle, value: &str) -> PostcodeFill {
        set_node_attr(field, "value", Some(value.to_string()));
        match &self.postcode {
            Some(resolver) => resolver.handle_input(field, value, &mut self.events),
            None => PostcodeFill::default(),
        }
    }

    /// 主题编辑器加载了一个分区
    pub fn on_section_load(&self) {
        if !self.active {
            return;
        }
        if self.config.rtl_enabled {
            apply_rtl(&self.document);
        }
        if self.config.translation_enabled {
            translate_page(&self.document, &self.translations);
        }
    }

    /// 主题编辑器重新排列了分区
    pub fn on_section_reorder(&self) {
        if self.active && self.config.translation_enabled {
            translate_page(&self.document, &self.translations);
        }
    }

    pub fn postcode(&self) -> Option<&PostcodeResolver> {
        self.postcode.as_ref()
    }

    pub fn accessibility(&self) -> Option<&AccessibilityWidget> {
        self.accessibility.as_ref()
    }

    pub fn accessibility_mut(&mut self) -> Option<&mut AccessibilityWidget> {
        self.accessibility.as_mut()
    }

    /// 已派发但尚未取出的合成事件
    pub fn events(&self) -> &[DomEvent] {
        self.events.events()
    }

    /// 取出并清空事件日志；宿主转发完事件后调用
    pub fn take_events(&mut self) -> Vec<DomEvent> {
        self.events.drain()
    }
}
