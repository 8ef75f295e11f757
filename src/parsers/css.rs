//! CSS 解析器模块
//!
//! 店面脚本对CSS的需求很窄：读写元素的内联 `style` 声明（方向、对齐、自定义属性），
//! 以及在注入的样式块里安全地引用字体名称。声明的切分交给 cssparser 的分词器，
//! 这样 `url(data:...;base64,...)` 或带分号的字符串不会被错误地截断。

use std::fmt;

use cssparser::{serialize_string, Parser, ParserInput, Token};
use markup5ever_rcdom::Handle;

use crate::parsers::html::{get_node_attr, set_node_attr};

/// 一条 `property: value` 声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// 元素内联样式（`style` 属性）的声明列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    /// 解析 `style` 属性的值，丢弃没有冒号的残缺声明
    pub fn parse(style: &str) -> Self {
        let declarations = split_declarations(style)
            .into_iter()
            .filter_map(|chunk| {
                let (property, value) = chunk.split_once(':')?;
                let property = normalize_property(property.trim());
                let value = value.trim();

                if property.is_empty() || value.is_empty() {
                    return None;
                }

                Some(Declaration {
                    property,
                    value: value.to_string(),
                })
            })
            .collect();

        InlineStyle { declarations }
    }

    /// 读取元素的内联样式；没有 `style` 属性时返回 `None`
    pub fn of(node: &Handle) -> Option<Self> {
        get_node_attr(node, "style").map(|style| InlineStyle::parse(&style))
    }

    /// 属性的当前值（后出现的声明覆盖先出现的）
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = normalize_property(property);
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// 属性值是否等于给定关键字（忽略大小写和 `!important`）
    pub fn is(&self, property: &str, keyword: &str) -> bool {
        self.get(property)
            .map(|value| strip_important(value).eq_ignore_ascii_case(keyword))
            .unwrap_or(false)
    }

    /// 设置属性；已存在的同名声明全部合并为一条
    pub fn set(&mut self, property: &str, value: &str) {
        let property = normalize_property(property);

        match self.declarations.iter().position(|d| d.property == property) {
            Some(index) => {
                self.declarations[index].value = value.to_string();
                let mut seen = false;
                self.declarations.retain(|d| {
                    if d.property != property {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.declarations.push(Declaration {
                property,
                value: value.to_string(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// 写回元素的 `style` 属性
    pub fn write_to(&self, node: &Handle) {
        set_node_attr(node, "style", Some(self.to_string()));
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for declaration in &self.declarations {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}: {};", declaration.property, declaration.value)?;
        }
        Ok(())
    }
}

/// 按顶层分号切分声明块；嵌套在函数、括号或字符串里的分号被分词器吞掉
fn split_declarations(style: &str) -> Vec<&str> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);
    let mut chunks = Vec::new();
    let mut start = parser.position();

    loop {
        let token_offset = parser.position();
        let is_semicolon = match parser.next_including_whitespace_and_comments() {
            Ok(token) => matches!(token, Token::Semicolon),
            Err(_) => break,
        };

        if is_semicolon {
            chunks.push(parser.slice(start..token_offset));
            start = parser.position();
        }
    }

    chunks.push(parser.slice_from(start));
    chunks
}

// Custom properties are case-sensitive, everything else is not.
fn normalize_property(property: &str) -> String {
    if property.starts_with("--") {
        property.to_string()
    } else {
        property.to_ascii_lowercase()
    }
}

// `!` 和 `important` 之间允许空白
fn strip_important(value: &str) -> &str {
    let trimmed = value.trim_end();
    let Some(bang) = trimmed.rfind('!') else {
        return trimmed;
    };
    if trimmed[bang + 1..].trim_start().eq_ignore_ascii_case("important") {
        trimmed[..bang].trim_end()
    } else {
        trimmed
    }
}

/// 格式化带引号的CSS字符串
///
/// 自动添加引号并转义特殊字符，用于把商家配置的字体名称放进样式块。
pub fn format_quoted_string(string: &str) -> String {
    let mut res: String = "".to_string();
    let _ = serialize_string(string, &mut res);
    res
}
