//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use rtl_pro::accessibility::{Feature, PANEL_CLASS};
    use rtl_pro::parsers::html::{get_node_attr, has_class};
    use rtl_pro::{AccessibilityConfig, Document, Storefront, StorefrontConfig};

    use crate::common::{html_of, rtl_and_translation, PRODUCT_PAGE};

    fn with_widget() -> StorefrontConfig {
        StorefrontConfig {
            accessibility: Some(AccessibilityConfig {
                enabled: true,
                show_widget: true,
                show_statement: true,
                position: Some("bottom-right".to_string()),
                company_name: Some("Acme".to_string()),
                ..Default::default()
            }),
            ..rtl_and_translation()
        }
    }

    #[test]
    fn widget_is_mounted_alongside_mirrored_layout() {
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), with_widget());
        let document = storefront.document();

        let panel = document.find_first(|n| has_class(n, PANEL_CLASS)).unwrap();
        assert!(has_class(&panel, "bottom-right"));
        assert!(html_of(document).contains("Acme מחויבים"));

        // 根元素同时带有镜像属性和无障碍字号
        let style = get_node_attr(&document.html().unwrap(), "style").unwrap();
        assert!(style.contains("--rtl-direction: rtl;"));
        assert!(style.contains("font-size: 16px;"));
    }

    #[test]
    fn saved_preferences_are_applied_on_init() {
        let storefront = Storefront::init_with_preferences(
            Document::parse(PRODUCT_PAGE),
            with_widget(),
            Some(r#"{"highContrast":true,"fontSize":-1}"#),
        );
        let body = storefront.document().body().unwrap();

        assert!(has_class(&body, "rtl-pro-high-contrast"));
        let style = get_node_attr(&storefront.document().html().unwrap(), "style").unwrap();
        assert!(style.contains("font-size: 14px;"));
    }

    #[test]
    fn host_can_drive_the_widget() {
        let mut storefront = Storefront::init(Document::parse(PRODUCT_PAGE), with_widget());
        let widget = storefront.accessibility_mut().unwrap();

        widget.toggle_feature(Feature::StopAnimations);
        widget.increase_font();
        let json = widget.preferences_json().unwrap();

        assert!(json.contains("\"stopAnimations\":true"));
        assert!(json.contains("\"fontSize\":1"));
        assert!(has_class(
            &storefront.document().body().unwrap(),
            "rtl-pro-stop-animations"
        ));
    }

    #[test]
    fn widget_mounts_without_rtl_or_translation() {
        let config = StorefrontConfig {
            accessibility: Some(AccessibilityConfig {
                enabled: true,
                show_widget: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);
        let body = storefront.document().body().unwrap();

        assert!(!storefront.is_active());
        assert!(storefront.accessibility().is_some());
        assert!(!has_class(&body, "rtl-pro-loaded"));
        assert!(get_node_attr(&body, "dir").is_none());
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use rtl_pro::{AccessibilityConfig, Document, Storefront, StorefrontConfig};

    use crate::common::{html_of, PRODUCT_PAGE};

    #[test]
    fn disabled_widget_is_not_mounted() {
        let config = StorefrontConfig {
            rtl_enabled: true,
            accessibility: Some(AccessibilityConfig::default()),
            ..Default::default()
        };
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);

        assert!(storefront.accessibility().is_none());
        assert!(!html_of(storefront.document()).contains("rtl-pro-reading-guide"));
    }
}
