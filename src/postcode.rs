//! 邮编识别
//!
//! 监听地址表单中的邮编输入框。用户输入后取前两位数字查城市表，
//! 命中时把城市写入同一表单的城市字段，并把国家选择为以色列。
//! 未命中的前缀是预期情况：什么也不改，也不报错。

use std::rc::Rc;

use markup5ever_rcdom::Handle;
use tracing::{debug, trace};

use crate::events::{EventKind, EventLog};
use crate::parsers::html::{
    closest, elements, get_node_attr, is_element, set_node_attr, text_content, Document,
};

/// 写在已挂载监听器的输入框上的标记，只用于输出，不参与去重
pub const POSTCODE_MARKER: &str = "data-rtl-pro-postcode";

/// 邮编前两位 → 城市
pub const POSTCODE_CITIES: &[(&str, &str)] = &[
    ("61", "תל אביב-יפו"),
    ("62", "תל אביב-יפו"),
    ("63", "תל אביב-יפו"),
    ("64", "תל אביב-יפו"),
    ("65", "תל אביב-יפו"),
    ("66", "תל אביב-יפו"),
    ("67", "תל אביב-יפו"),
    ("68", "תל אביב-יפו"),
    ("69", "תל אביב-יפו"),
    ("91", "ירושלים"),
    ("92", "ירושלים"),
    ("93", "ירושלים"),
    ("94", "ירושלים"),
    ("95", "ירושלים"),
    ("96", "ירושלים"),
    ("31", "חיפה"),
    ("32", "חיפה"),
    ("33", "חיפה"),
    ("34", "חיפה"),
    ("35", "חיפה"),
    ("84", "באר שבע"),
    ("85", "באר שבע"),
    ("42", "נתניה"),
    ("75", "ראשון לציון"),
    ("49", "פתח תקווה"),
    ("77", "אשדוד"),
    ("46", "הרצליה"),
    ("52", "רמת גן"),
    ("58", "חולון"),
    ("51", "בני ברק"),
    ("59", "בת ים"),
    ("76", "רחובות"),
    ("78", "אשקלון"),
    ("44", "כפר סבא"),
    ("43", "רעננה"),
    ("71", "מודיעין"),
    ("88", "אילת"),
    ("16", "נצרת"),
    ("24", "עכו"),
    ("14", "טבריה"),
    ("20", "כרמיאל"),
    ("30", "חדרה"),
    ("40", "רמלה"),
    ("70", "לוד"),
    ("79", "קרית גת"),
    ("83", "ערד"),
    ("87", "דימונה"),
    ("22", "נהריה"),
];

const POSTCODE_NAME_HINTS: &[&str] = &["zip", "postal", "postcode"];
const POSTCODE_ID_HINTS: &[&str] = &["zip", "postal"];
const ISRAEL_LABELS: &[&str] = &["Israel", "ישראל"];

/// 按邮编查城市
///
/// 去掉所有非数字字符后至少需要两位数字。
pub fn lookup_postcode(code: &str) -> Option<&'static str> {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    let prefix = digits.get(..2)?;

    POSTCODE_CITIES
        .iter()
        .find(|(key, _)| *key == prefix)
        .map(|(_, city)| *city)
}

fn attr_contains(node: &Handle, attr_name: &str, hints: &[&str]) -> bool {
    get_node_attr(node, attr_name)
        .map(|value| hints.iter().any(|hint| value.contains(hint)))
        .unwrap_or(false)
}

fn attr_is(node: &Handle, attr_name: &str, expected: &str) -> bool {
    get_node_attr(node, attr_name).as_deref() == Some(expected)
}

/// 输入框是否为邮编字段（name、id 子串或 autocomplete）
pub fn is_postcode_field(node: &Handle) -> bool {
    is_element(node, "input")
        && (attr_contains(node, "name", POSTCODE_NAME_HINTS)
            || attr_contains(node, "id", POSTCODE_ID_HINTS)
            || attr_is(node, "autocomplete", "postal-code"))
}

/// 是否为城市字段（输入框或下拉框）
pub fn is_city_field(node: &Handle) -> bool {
    (is_element(node, "input") || is_element(node, "select"))
        && (attr_contains(node, "name", &["city", "City"])
            || attr_contains(node, "id", &["city"])
            || attr_is(node, "autocomplete", "address-level2"))
}

/// 是否为国家下拉框
pub fn is_country_field(node: &Handle) -> bool {
    is_element(node, "select")
        && (attr_contains(node, "name", &["country"]) || attr_is(node, "autocomplete", "country"))
}

/// `<option>` 的值：`value` 属性，缺失时为去掉首尾空白的文本
pub fn option_value(option: &Handle) -> String {
    get_node_attr(option, "value").unwrap_or_else(|| text_content(option).trim().to_string())
}

fn options(select: &Handle) -> Vec<Handle> {
    elements(select).filter(|n| is_element(n, "option")).collect()
}

/// 选中下拉框中的某个选项，其余选项取消选中
pub fn select_option(select: &Handle, chosen: &Handle) {
    for option in options(select) {
        let selected = Rc::ptr_eq(&option, chosen);
        set_node_attr(&option, "selected", selected.then(String::new));
    }
}

/// 下拉框当前的值：被选中的选项，否则第一个选项
pub fn select_value(select: &Handle) -> Option<String> {
    let options = options(select);
    options
        .iter()
        .find(|option| get_node_attr(option, "selected").is_some())
        .or_else(|| options.first())
        .map(option_value)
}

/// 一次邮编输入的处理结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostcodeFill {
    pub city: Option<&'static str>,
    pub city_updated: bool,
    pub country_selected: bool,
}

/// 邮编监听器注册表
#[derive(Debug, Default)]
pub struct PostcodeResolver {
    attached: Vec<Handle>,
}

impl PostcodeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为尚未注册的邮编输入框挂载监听器，返回新挂载的数量
    ///
    /// 每个输入框最多挂载一次；页面后来插入的输入框在下一次扫描时被挂载。
    /// 是否已挂载只看注册表，不看文档里的标记属性。
    pub fn attach_listeners(&mut self, document: &Document) -> usize {
        let mut attached = 0;

        for input in document.elements().filter(is_postcode_field) {
            if self.is_attached(&input) {
                continue;
            }
            set_node_attr(&input, POSTCODE_MARKER, Some("true".to_string()));
            self.attached.push(input);
            attached += 1;
        }

        if attached > 0 {
            debug!(attached, "postcode listeners attached");
        }
        attached
    }

    pub fn is_attached(&self, node: &Handle) -> bool {
        self.attached.iter().any(|input| Rc::ptr_eq(input, node))
    }

    pub fn listener_count(&self) -> usize {
        self.attached.len()
    }

    /// 处理挂载了监听器的输入框上的一次输入
    pub fn handle_input(&self, input: &Handle, value: &str, events: &mut EventLog) -> PostcodeFill {
        if !self.is_attached(input) {
            return PostcodeFill::default();
        }

        let Some(city) = lookup_postcode(value) else {
            trace!(value, "postcode prefix not mapped");
            return PostcodeFill::default();
        };

        let mut fill = PostcodeFill {
            city: Some(city),
            ..Default::default()
        };

        let Some(form) = closest(input, "form") else {
            trace!("postcode input outside of a form");
            return fill;
        };

        fill.city_updated = fill_city(&form, city, events);
        fill.country_selected = select_israel(&form, events);

        debug!(
            city,
            city_updated = fill.city_updated,
            country_selected = fill.country_selected,
            "postcode resolved"
        );
        fill
    }
}

/// 把城市写入表单中的城市字段
pub fn fill_city(form: &Handle, city: &str, events: &mut EventLog) -> bool {
    let Some(field) = elements(form).find(is_city_field) else {
        return false;
    };

    if is_element(&field, "select") {
        let matching = options(&field).into_iter().find(|option| {
            text_content(option).contains(city) || option_value(option).contains(city)
        });

        match matching {
            Some(option) => {
                select_option(&field, &option);
                events.dispatch(EventKind::Change, &field);
                true
            }
            None => false,
        }
    } else {
        set_node_attr(&field, "value", Some(city.to_string()));
        events.dispatch(EventKind::Input, &field);
        events.dispatch(EventKind::Change, &field);
        true
    }
}

/// 在表单的国家下拉框中选择以色列
pub fn select_israel(form: &Handle, events: &mut EventLog) -> bool {
    let Some(select) = elements(form).find(is_country_field) else {
        return false;
    };

    let israel = options(&select).into_iter().find(|option| {
        let value = option_value(option);
        let label = text_content(option);
        value == "IL" || value == "Israel" || ISRAEL_LABELS.iter().any(|l| label.contains(l))
    });

    match israel {
        Some(option) => {
            select_option(&select, &option);
            events.dispatch(EventKind::Change, &select);
            true
        }
        None => false,
    }
}
