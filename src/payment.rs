//! 支付图标
//!
//! 固定顺序的支付方式徽章，以内联SVG渲染后追加到页脚。

use markup5ever_rcdom::Handle;
use tracing::{debug, trace};

use crate::config::StorefrontConfig;
use crate::parsers::html::{append_child, get_node_attr, has_class, is_element, Document};

pub const CONTAINER_CLASS: &str = "rtl-pro-payment-icons";
pub const ICON_CLASS: &str = "rtl-pro-payment-icon";
pub const CONTAINER_LABEL: &str = "אמצעי תשלום מקובלים";

/// 徽章里的一个SVG图形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Background {
        fill: &'static str,
        stroke: Option<&'static str>,
    },
    Circle {
        cx: &'static str,
        fill: &'static str,
        opacity: Option<&'static str>,
    },
    Label {
        text: &'static str,
        fill: &'static str,
        size: &'static str,
        bold: bool,
    },
}

/// 一种支付方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
    pub shapes: &'static [Shape],
}

const fn background(fill: &'static str) -> Shape {
    Shape::Background { fill, stroke: None }
}

const fn label(text: &'static str, fill: &'static str, size: &'static str) -> Shape {
    Shape::Label {
        text,
        fill,
        size,
        bold: true,
    }
}

/// 所有支付方式，顺序即渲染顺序
pub const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod {
        id: "visa",
        name: "Visa",
        shapes: &[background("#1A1F71"), label("VISA", "white", "10")],
    },
    PaymentMethod {
        id: "mastercard",
        name: "Mastercard",
        shapes: &[
            background("#252525"),
            Shape::Circle {
                cx: "16",
                fill: "#EB001B",
                opacity: None,
            },
            Shape::Circle {
                cx: "24",
                fill: "#F79E1B",
                opacity: Some("0.8"),
            },
        ],
    },
    PaymentMethod {
        id: "amex",
        name: "American Express",
        shapes: &[background("#2E77BC"), label("AMEX", "white", "7")],
    },
    PaymentMethod {
        id: "paypal",
        name: "PayPal",
        shapes: &[background("#003087"), label("PayPal", "white", "8")],
    },
    PaymentMethod {
        id: "apple-pay",
        name: "Apple Pay",
        shapes: &[
            background("#000"),
            Shape::Label {
                text: "Pay",
                fill: "white",
                size: "8",
                bold: false,
            },
        ],
    },
    PaymentMethod {
        id: "google-pay",
        name: "Google Pay",
        shapes: &[
            Shape::Background {
                fill: "#fff",
                stroke: Some("#ddd"),
            },
            label("GPay", "#5F6368", "7"),
        ],
    },
    PaymentMethod {
        id: "bit",
        name: "Bit",
        shapes: &[background("#3CC8C8"), label("bit", "white", "10")],
    },
];

/// 按配置挑选要显示的支付方式，保持固定顺序
pub fn selected_methods(config: &StorefrontConfig) -> Vec<&'static PaymentMethod> {
    PAYMENT_METHODS
        .iter()
        .filter(|method| match &config.payment_icons {
            Some(ids) => ids.iter().any(|id| id.eq_ignore_ascii_case(method.id)),
            None => true,
        })
        .collect()
}

/// 查找页脚：先 `<footer>`，再 `.footer`，最后 `#footer`
pub fn find_footer(document: &Document) -> Option<Handle> {
    document
        .find_first(|n| is_element(n, "footer"))
        .or_else(|| document.find_first(|n| has_class(n, "footer")))
        .or_else(|| document.find_first(|n| get_node_attr(n, "id").as_deref() == Some("footer")))
}

/// 渲染单个徽章的SVG
pub fn render_svg(document: &Document, method: &PaymentMethod) -> Handle {
    let svg = document.create_svg_element(
        "svg",
        &[
            ("width", "40"),
            ("height", "25"),
            ("viewBox", "0 0 40 25"),
            ("fill", "none"),
        ],
    );

    for shape in method.shapes {
        let node = match *shape {
            Shape::Background { fill, stroke } => {
                let mut attrs = vec![("width", "40"), ("height", "25"), ("rx", "3"), ("fill", fill)];
                if let Some(stroke) = stroke {
                    attrs.push(("stroke", stroke));
                }
                document.create_svg_element("rect", &attrs)
            }
            Shape::Circle { cx, fill, opacity } => {
                let mut attrs = vec![("cx", cx), ("cy", "12.5"), ("r", "7"), ("fill", fill)];
                if let Some(opacity) = opacity {
                    attrs.push(("opacity", opacity));
                }
                document.create_svg_element("circle", &attrs)
            }
            Shape::Label {
                text,
                fill,
                size,
                bold,
            } => {
                let mut attrs = vec![
                    ("x", "20"),
                    ("y", "16"),
                    ("fill", fill),
                    ("font-size", size),
                    ("text-anchor", "middle"),
                ];
                if bold {
                    attrs.push(("font-weight", "bold"));
                }
                let node = document.create_svg_element("text", &attrs);
                append_child(&node, document.create_text(text));
                node
            }
        };
        append_child(&svg, node);
    }

    svg
}

/// 构建带标签的图标列表容器
pub fn build_container(document: &Document, methods: &[&PaymentMethod]) -> Handle {
    let items = methods.iter().map(|method| {
        document
            .build("span")
            .class(ICON_CLASS)
            .attr("role", "listitem")
            .attr("aria-label", method.name)
            .child(render_svg(document, method))
            .finish()
    });

    document
        .build("div")
        .class(CONTAINER_CLASS)
        .attr("role", "list")
        .attr("aria-label", CONTAINER_LABEL)
        .children(items.collect::<Vec<_>>())
        .finish()
}

/// 把支付图标追加到页脚；没有页脚时静默跳过
pub fn add_payment_icons(document: &Document, config: &StorefrontConfig) -> bool {
    if !config.payment_icons_enabled {
        return false;
    }

    let Some(footer) = find_footer(document) else {
        trace!("no footer found, payment icons skipped");
        return false;
    };

    let methods = selected_methods(config);
    let container = build_container(document, &methods);
    append_child(&footer, container);

    debug!(count = methods.len(), "payment icons rendered");
    true
}
